//! Atomic fixture loading.

use log::debug;
use rusqlite::{params, Transaction};

use super::utils::resolve_index;
use crate::{
    error::{DatabaseResultExt, Result},
    fixtures::Fixtures,
};

const INSERT_PUBLISHER_SQL: &str = "INSERT INTO publisher (name) VALUES (?1)";
const INSERT_SHOP_SQL: &str = "INSERT INTO shop (name) VALUES (?1)";
const INSERT_BOOK_SQL: &str = "INSERT INTO book (title, id_publisher) VALUES (?1, ?2)";
const INSERT_STOCK_SQL: &str = "INSERT INTO stock (id_book, id_shop, count) VALUES (?1, ?2, ?3)";
const INSERT_SALE_SQL: &str =
    "INSERT INTO sale (price, date_sale, id_stock, count) VALUES (?1, ?2, ?3, ?4)";

impl super::Database {
    /// Inserts a fixture set as one unit of work.
    ///
    /// Positional references are resolved to the keys generated for the
    /// referenced rows. On any failure the transaction is rolled back and no
    /// row of the set persists.
    pub fn seed(&mut self, fixtures: &Fixtures) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin seed transaction")?;

        let publisher_keys = insert_all(&tx, &fixtures.publishers, "publisher", |tx, p| {
            tx.execute(INSERT_PUBLISHER_SQL, params![p.name])
                .db_context("Failed to insert publisher")
        })?;

        let shop_keys = insert_all(&tx, &fixtures.shops, "shop", |tx, s| {
            tx.execute(INSERT_SHOP_SQL, params![s.name])
                .db_context("Failed to insert shop")
        })?;

        let book_keys = insert_all(&tx, &fixtures.books, "book", |tx, b| {
            let publisher = resolve_index(&publisher_keys, b.publisher, "book.publisher")?;
            tx.execute(INSERT_BOOK_SQL, params![b.title, publisher])
                .db_context("Failed to insert book")
        })?;

        let stock_keys = insert_all(&tx, &fixtures.stock, "stock", |tx, s| {
            let book = resolve_index(&book_keys, s.book, "stock.book")?;
            let shop = resolve_index(&shop_keys, s.shop, "stock.shop")?;
            tx.execute(INSERT_STOCK_SQL, params![book, shop, s.count])
                .db_context("Failed to insert stock")
        })?;

        insert_all(&tx, &fixtures.sales, "sale", |tx, s| {
            let stock = resolve_index(&stock_keys, s.stock, "sale.stock")?;
            tx.execute(
                INSERT_SALE_SQL,
                params![s.price, s.date_sale.to_string(), stock, s.count],
            )
            .db_context("Failed to insert sale")
        })?;

        tx.commit().db_context("Failed to commit seed transaction")?;

        Ok(())
    }
}

/// Runs `insert` for every item and collects the generated row keys in
/// fixture order.
fn insert_all<T, F>(tx: &Transaction<'_>, items: &[T], table: &str, insert: F) -> Result<Vec<i64>>
where
    F: Fn(&Transaction<'_>, &T) -> Result<usize>,
{
    debug!("Seeding {} rows into {table}", items.len());

    items
        .iter()
        .map(|item| {
            insert(tx, item)?;
            Ok(tx.last_insert_rowid())
        })
        .collect()
}
