//! Plain listings of every table and integrity checks.

use rusqlite::Row;

use super::{
    schema::TABLES,
    utils::{date_column, id_column},
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Book, Publisher, Sale, Shop, Stock, TableCounts},
};

const SELECT_PUBLISHERS_SQL: &str = "SELECT id, name FROM publisher ORDER BY id";
const SELECT_BOOKS_SQL: &str = "SELECT id, title, id_publisher FROM book ORDER BY id";
const SELECT_SHOPS_SQL: &str = "SELECT id, name FROM shop ORDER BY id";
const SELECT_STOCK_SQL: &str = "SELECT id, id_book, id_shop, count FROM stock ORDER BY id";
const SELECT_SALES_SQL: &str =
    "SELECT id, price, date_sale, id_stock, count FROM sale ORDER BY id";

impl super::Database {
    /// All publishers, by id.
    pub fn publishers(&self) -> Result<Vec<Publisher>> {
        self.list(SELECT_PUBLISHERS_SQL, "publishers", |row| {
            Ok(Publisher {
                id: id_column(row, 0)?,
                name: row.get(1)?,
            })
        })
    }

    /// All books, by id.
    pub fn books(&self) -> Result<Vec<Book>> {
        self.list(SELECT_BOOKS_SQL, "books", |row| {
            Ok(Book {
                id: id_column(row, 0)?,
                title: row.get(1)?,
                id_publisher: id_column(row, 2)?,
            })
        })
    }

    /// All shops, by id.
    pub fn shops(&self) -> Result<Vec<Shop>> {
        self.list(SELECT_SHOPS_SQL, "shops", |row| {
            Ok(Shop {
                id: id_column(row, 0)?,
                name: row.get(1)?,
            })
        })
    }

    /// All stock entries, by id.
    pub fn stock(&self) -> Result<Vec<Stock>> {
        self.list(SELECT_STOCK_SQL, "stock", |row| {
            Ok(Stock {
                id: id_column(row, 0)?,
                id_book: id_column(row, 1)?,
                id_shop: id_column(row, 2)?,
                count: row.get(3)?,
            })
        })
    }

    /// All sales, by id.
    pub fn sales(&self) -> Result<Vec<Sale>> {
        self.list(SELECT_SALES_SQL, "sales", |row| {
            Ok(Sale {
                id: id_column(row, 0)?,
                price: row.get(1)?,
                date_sale: date_column(row, 2)?,
                id_stock: id_column(row, 3)?,
                count: row.get(4)?,
            })
        })
    }

    /// Row counts of every table.
    pub fn table_counts(&self) -> Result<TableCounts> {
        let [publishers, books, shops, stock, sales] = TABLES;

        Ok(TableCounts {
            publishers: self.count_rows(publishers)?,
            books: self.count_rows(books)?,
            shops: self.count_rows(shops)?,
            stock: self.count_rows(stock)?,
            sales: self.count_rows(sales)?,
        })
    }

    /// Number of foreign key references that do not resolve to a row.
    pub fn dangling_references(&self) -> Result<u64> {
        let mut stmt = self
            .connection
            .prepare("PRAGMA foreign_key_check")
            .db_context("Failed to prepare foreign key check")?;

        let violations = stmt
            .query_map([], |_| Ok(()))
            .db_context("Failed to run foreign key check")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch foreign key violations")?;

        Ok(violations.len() as u64)
    }

    fn count_rows(&self, table: &str) -> Result<u64> {
        self.connection
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get::<_, i64>(0)
            })
            .map(|count| count as u64)
            .db_context(&format!("Failed to count rows in {table}"))
    }

    fn list<T, F>(&self, sql: &str, what: &str, map: F) -> Result<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context(&format!("Failed to prepare {what} query"))?;

        let items = stmt
            .query_map([], map)
            .db_context(&format!("Failed to query {what}"))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context(&format!("Failed to fetch {what}"))?;

        Ok(items)
    }
}
