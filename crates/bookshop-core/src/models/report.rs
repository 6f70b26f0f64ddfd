//! Report rows and the lookup that selects them.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Price;

/// One line of the publisher sales report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportRow {
    /// Title of the book sold
    pub title: String,

    /// Name of the shop the sale was made at
    pub shop: String,

    /// Sale price
    pub price: Price,

    /// Date of the sale
    pub date: Date,
}

/// How a publisher is selected for a report.
///
/// Free text typed by a user is always a [`PublisherLookup::Name`]; an id is
/// only used when asked for explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublisherLookup {
    /// Exact match on `publisher.name`
    Name(String),

    /// Match on `publisher.id`
    Id(u64),
}

impl PublisherLookup {
    /// Lookup by exact publisher name.
    pub fn name(name: impl Into<String>) -> Self {
        PublisherLookup::Name(name.into())
    }

    /// Lookup by publisher id.
    pub fn id(id: u64) -> Self {
        PublisherLookup::Id(id)
    }
}

impl From<&str> for PublisherLookup {
    fn from(name: &str) -> Self {
        PublisherLookup::Name(name.to_string())
    }
}

/// Row counts of every table.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableCounts {
    pub publishers: u64,
    pub books: u64,
    pub shops: u64,
    pub stock: u64,
    pub sales: u64,
}

impl TableCounts {
    /// Total number of rows across all tables.
    pub fn total(&self) -> u64 {
        self.publishers + self.books + self.shops + self.stock + self.sales
    }
}
