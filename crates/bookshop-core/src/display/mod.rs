//! Display formatting for report tables and entity listings.
//!
//! Entities carry no presentation logic of their own. Their string forms are
//! [`std::fmt::Display`] implementations in [`models`], and collections are
//! formatted through newtype wrappers:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrapper Types   │    │   Formatted     │
//! │ (ReportRow, ..) │───▶│ (ReportTable,   │───▶│    Output       │
//! │                 │    │  Listing)       │    │  (Terminal)     │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`table`]: the pipe-delimited report table ([`ReportTable`])
//! - [`collections`]: entity listings with empty handling ([`Listing`])
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use bookshop_core::{
//!     display::ReportTable,
//!     models::{Price, ReportRow},
//! };
//! use jiff::civil::date;
//!
//! let rows = vec![ReportRow {
//!     title: "Beartown".to_string(),
//!     shop: "Буквоед".to_string(),
//!     price: Price::from_minor_units(58000),
//!     date: date(2023, 4, 13),
//! }];
//!
//! let output = ReportTable(&rows).to_string();
//! assert!(output.starts_with("| Title    | Shop    |"));
//! assert!(output.contains("| Beartown | Буквоед | 580.00 | 2023-04-13 |"));
//! ```

pub mod collections;
pub mod models;
pub mod table;

// Re-export commonly used types for convenience
pub use collections::{Entity, Listing};
pub use table::{ReportTable, HEADERS};
