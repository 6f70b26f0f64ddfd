//! Entity definitions, one per table.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Price;

/// A publishing house or author brand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Publisher {
    /// Surrogate key
    pub id: u64,

    /// Unique publisher name
    pub name: String,
}

/// A book, owned by exactly one publisher.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Surrogate key
    pub id: u64,

    /// Unique book title
    pub title: String,

    /// Publisher this book belongs to
    pub id_publisher: u64,
}

/// A shop that carries books.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shop {
    /// Surrogate key
    pub id: u64,

    /// Unique shop name
    pub name: String,
}

/// A book carried at a shop, with the quantity on hand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Surrogate key
    pub id: u64,

    /// Book being stocked
    pub id_book: u64,

    /// Shop carrying the book
    pub id_shop: u64,

    /// Quantity on hand
    pub count: i64,
}

/// A sale recorded against one stock entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sale {
    /// Surrogate key
    pub id: u64,

    /// Unit price of the sale
    pub price: Price,

    /// Calendar date of the sale
    pub date_sale: Date,

    /// Stock entry the sale was made from
    pub id_stock: u64,

    /// Quantity sold
    pub count: i64,
}
