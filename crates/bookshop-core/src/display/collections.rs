//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides a wrapper that formats a list of entities one per
//! line, with consistent empty collection handling.

use std::fmt;

use crate::models::{Book, Publisher, Sale, Shop, Stock};

/// An entity that can be listed.
pub trait Entity: fmt::Display {
    /// Plural noun used in the empty message, e.g. `"publishers"`.
    const PLURAL: &'static str;
}

impl Entity for Publisher {
    const PLURAL: &'static str = "publishers";
}

impl Entity for Book {
    const PLURAL: &'static str = "books";
}

impl Entity for Shop {
    const PLURAL: &'static str = "shops";
}

impl Entity for Stock {
    const PLURAL: &'static str = "stock entries";
}

impl Entity for Sale {
    const PLURAL: &'static str = "sales";
}

/// Newtype wrapper for displaying a list of entities.
///
/// # Examples
///
/// ```rust
/// use bookshop_core::{display::Listing, models::Shop};
///
/// let shops = Listing(vec![Shop {
///     id: 1,
///     name: "Буквоед".to_string(),
/// }]);
/// assert_eq!(shops.to_string(), "1: Буквоед\n");
///
/// let empty: Listing<Shop> = Listing(vec![]);
/// assert_eq!(empty.to_string(), "No shops found.\n");
/// ```
pub struct Listing<T>(pub Vec<T>);

impl<T: Entity> fmt::Display for Listing<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No {} found.", T::PLURAL)
        } else {
            for entity in &self.0 {
                writeln!(f, "{entity}")?;
            }
            Ok(())
        }
    }
}
