//! Data models for the bookstore inventory.
//!
//! Five entities mirror the relational schema: [`Publisher`], [`Book`],
//! [`Shop`], [`Stock`] (a book carried at a shop) and [`Sale`] (a transaction
//! against one stock entry). References between entities are plain foreign
//! key ids; navigation happens through explicit queries in [`crate::db`].
//!
//! Display implementations for these models live in
//! [`crate::display::models`] so that the entity definitions stay free of
//! presentation concerns.
//!
//! # Examples
//!
//! ```rust
//! use bookshop_core::models::{Price, ReportRow};
//! use jiff::civil::date;
//!
//! let row = ReportRow {
//!     title: "Beartown".to_string(),
//!     shop: "Буквоед".to_string(),
//!     price: Price::from_minor_units(58000),
//!     date: date(2023, 4, 13),
//! };
//! assert_eq!(row.price.to_string(), "580.00");
//! ```

pub mod entities;
pub mod price;
pub mod report;


pub use entities::{Book, Publisher, Sale, Shop, Stock};
pub use price::Price;
pub use report::{PublisherLookup, ReportRow, TableCounts};
