//! High-level bookshop API.
//!
//! [`Bookshop`] owns the database handle for the whole run and exposes the
//! operations a front end needs: reset the store, run the publisher report
//! and list entities. Configuration (where the database lives) is resolved by
//! [`BookshopBuilder`].

use std::path::{Path, PathBuf};

use crate::{
    db::Database,
    error::Result,
    models::{Book, Publisher, PublisherLookup, ReportRow, Sale, Shop, Stock, TableCounts},
};

mod builder;

pub use builder::BookshopBuilder;

/// Main bookshop interface.
pub struct Bookshop {
    db: Database,
    db_path: Option<PathBuf>,
}

impl Bookshop {
    fn new(db: Database, db_path: Option<PathBuf>) -> Self {
        Self { db, db_path }
    }

    /// Path of the database file, `None` for an in-memory database.
    pub fn database_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Provisions the schema and loads the sample fixtures.
    pub fn reset(&mut self) -> Result<TableCounts> {
        self.db.reset()
    }

    /// Runs the publisher sales report. An unknown publisher yields an empty
    /// report.
    pub fn report(&self, lookup: &PublisherLookup) -> Result<Vec<ReportRow>> {
        self.db.publisher_report(lookup)
    }

    /// Row counts of every table.
    pub fn table_counts(&self) -> Result<TableCounts> {
        self.db.table_counts()
    }

    /// All publishers, by id.
    pub fn publishers(&self) -> Result<Vec<Publisher>> {
        self.db.publishers()
    }

    /// All books, by id.
    pub fn books(&self) -> Result<Vec<Book>> {
        self.db.books()
    }

    /// All shops, by id.
    pub fn shops(&self) -> Result<Vec<Shop>> {
        self.db.shops()
    }

    /// All stock entries, by id.
    pub fn stock(&self) -> Result<Vec<Stock>> {
        self.db.stock()
    }

    /// All sales, by id.
    pub fn sales(&self) -> Result<Vec<Sale>> {
        self.db.sales()
    }

    /// Releases the database connection.
    pub fn close(self) -> Result<()> {
        self.db.close()
    }
}
