//! Database operations and SQLite management for the bookstore.
//!
//! This module owns the SQLite connection and groups the operations on it by
//! concern: schema provisioning, fixture seeding, the publisher report and
//! plain entity listings.

use std::path::Path;

use log::{debug, info};
use rusqlite::Connection;

use crate::{
    error::{BookshopError, DatabaseResultExt, Result},
    fixtures::Fixtures,
    models::TableCounts,
};

pub mod entity_queries;
pub mod report_queries;
pub mod schema;
pub mod seed;
mod utils;

/// Database connection and operations handler.
///
/// The connection lives exactly as long as this value. [`Database::close`]
/// releases it and reports close failures; dropping it releases it silently.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens a database file, creating it if missing. Does not touch the
    /// schema; call [`Database::provision_schema`] or [`Database::reset`].
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        Self::from_connection(connection)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;
        Self::from_connection(connection)
    }

    fn from_connection(connection: Connection) -> Result<Self> {
        // Enable foreign keys for this connection
        connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        Ok(Self { connection })
    }

    /// Drops and recreates every table, then loads the sample fixtures.
    ///
    /// This is the start-of-run step: afterwards the database holds exactly
    /// one copy of [`Fixtures::sample`].
    pub fn reset(&mut self) -> Result<TableCounts> {
        self.provision_schema()?;
        self.seed(&Fixtures::sample())?;

        let counts = self.table_counts()?;
        info!("Database reset with {} seeded rows", counts.total());
        Ok(counts)
    }

    /// Closes the connection, surfacing any error SQLite reports on close.
    pub fn close(self) -> Result<()> {
        debug!("Closing database connection");
        self.connection.close().map_err(|(_, e)| {
            BookshopError::database("Failed to close database connection").with_source(e)
        })
    }
}
