//! Seed data for the bookstore database.
//!
//! A [`Fixtures`] set describes rows to insert before their keys exist, so
//! references between them are positional: `BookSeed::publisher` is an index
//! into [`Fixtures::publishers`], `StockSeed::book` into [`Fixtures::books`]
//! and so on. [`crate::db::Database::seed`] resolves those indices to the
//! generated keys while inserting.

use jiff::civil::{date, Date};

use crate::models::Price;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublisherSeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookSeed {
    pub title: String,
    /// Index into [`Fixtures::publishers`]
    pub publisher: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopSeed {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSeed {
    /// Index into [`Fixtures::books`]
    pub book: usize,
    /// Index into [`Fixtures::shops`]
    pub shop: usize,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleSeed {
    pub price: Price,
    pub date_sale: Date,
    /// Index into [`Fixtures::stock`]
    pub stock: usize,
    pub count: i64,
}

/// A complete set of rows to seed in one unit of work.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fixtures {
    pub publishers: Vec<PublisherSeed>,
    pub books: Vec<BookSeed>,
    pub shops: Vec<ShopSeed>,
    pub stock: Vec<StockSeed>,
    pub sales: Vec<SaleSeed>,
}

impl Fixtures {
    /// The fixed demonstration dataset: 3 publishers, 6 books, 3 shops,
    /// 6 stock entries and 6 sales.
    pub fn sample() -> Self {
        let publishers = ["Dan Millman", "Robin Sharma", "Frederick Backman"]
            .into_iter()
            .map(|name| PublisherSeed {
                name: name.to_string(),
            })
            .collect();

        let books = [
            ("Way of the Peacefull Warrior", 0),
            ("The laws of spirit", 0),
            ("Saint, serfinger and CEO", 1),
            ("I am the best", 1),
            ("A Man Called Ove", 2),
            ("Beartown", 2),
        ]
        .into_iter()
        .map(|(title, publisher)| BookSeed {
            title: title.to_string(),
            publisher,
        })
        .collect();

        let shops = ["Буквоед", "Лабиринт", "Калевала"]
            .into_iter()
            .map(|name| ShopSeed {
                name: name.to_string(),
            })
            .collect();

        let stock = [(0, 0, 5), (1, 1, 10), (2, 0, 15), (3, 2, 8), (4, 2, 12), (5, 0, 25)]
            .into_iter()
            .map(|(book, shop, count)| StockSeed { book, shop, count })
            .collect();

        let sales = [
            (62560, date(2023, 5, 12), 1, 4),
            (33560, date(2023, 5, 10), 0, 3),
            (55500, date(2023, 5, 9), 2, 1),
            (70000, date(2023, 5, 11), 3, 2),
            (87000, date(2023, 4, 22), 4, 3),
            (58000, date(2023, 4, 13), 5, 2),
        ]
        .into_iter()
        .map(|(minor, date_sale, stock, count)| SaleSeed {
            price: Price::from_minor_units(minor),
            date_sale,
            stock,
            count,
        })
        .collect();

        Self {
            publishers,
            books,
            shops,
            stock,
            sales,
        }
    }
}
