//! Destructive schema provisioning.

use log::debug;

use crate::error::{DatabaseResultExt, Result};

const SCHEMA_SQL: &str = include_str!("../../assets/schema.sql");

/// Tables in dependency order, parents first.
pub const TABLES: [&str; 5] = ["publisher", "book", "shop", "stock", "sale"];

impl super::Database {
    /// Drops every bookstore table if present and recreates it empty.
    ///
    /// Runs in a single transaction, so a failure leaves the previous schema
    /// in place. Any data held in the tables is discarded.
    pub fn provision_schema(&mut self) -> Result<()> {
        debug!("Provisioning schema ({} tables)", TABLES.len());

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin schema transaction")?;

        tx.execute_batch(SCHEMA_SQL)
            .db_context("Failed to provision schema")?;

        tx.commit().db_context("Failed to commit schema transaction")?;

        Ok(())
    }
}
