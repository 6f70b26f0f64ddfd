//! Core library for the bookshop sales report.
//!
//! This crate models a small bookstore inventory (publishers, books, shops,
//! stock and sales) on top of SQLite, loads a fixed demonstration dataset and
//! answers one question: which books of a given publisher were sold, where,
//! for how much and when.
//!
//! # Layers
//!
//! - [`models`]: entity types and report rows
//! - [`db`]: schema provisioning, seeding, the report query and listings
//! - [`fixtures`]: the seed dataset
//! - [`display`]: the pipe table and entity listings
//! - [`bookshop`]: the [`Bookshop`] facade and its builder
//!
//! # Quick Start
//!
//! ```rust
//! use bookshop_core::{BookshopBuilder, PublisherLookup, ReportTable};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut shop = BookshopBuilder::new().in_memory().build()?;
//! shop.reset()?;
//!
//! let rows = shop.report(&PublisherLookup::name("Dan Millman"))?;
//! assert_eq!(rows.len(), 2);
//! print!("{}", ReportTable(&rows));
//!
//! shop.close()?;
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod bookshop;
pub mod db;
pub mod display;
pub mod error;
pub mod fixtures;
pub mod models;

// Re-export commonly used types
pub use bookshop::{Bookshop, BookshopBuilder};
pub use db::Database;
pub use display::{Listing, ReportTable};
pub use error::{BookshopError, Result};
pub use fixtures::Fixtures;
pub use models::{
    Book, Price, Publisher, PublisherLookup, ReportRow, Sale, Shop, Stock, TableCounts,
};
