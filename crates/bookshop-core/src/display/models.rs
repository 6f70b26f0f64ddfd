//! Display implementations for domain models.
//!
//! This module contains the Display trait implementations for the entities,
//! separated from the model definitions. Entities format as a single line
//! keyed by id; references are shown by the id they point to.

use std::fmt;

use crate::models::{Book, Price, Publisher, ReportRow, Sale, Shop, Stock, TableCounts};

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.minor_units() < 0 {
            write!(f, "-")?;
        }
        write!(f, "{}.{:02}", self.major().abs(), self.fraction())
    }
}

impl fmt::Display for Publisher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, publisher {})",
            self.id, self.title, self.id_publisher
        )
    }
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.name)
    }
}

impl fmt::Display for Stock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: (book {}, shop {}, {})",
            self.id, self.id_book, self.id_shop, self.count
        )
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: ({}, {}, stock {}, {})",
            self.id, self.price, self.date_sale, self.id_stock, self.count
        )
    }
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {}",
            self.title, self.shop, self.price, self.date
        )
    }
}

impl fmt::Display for TableCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Publishers: {}", self.publishers)?;
        writeln!(f, "- Books: {}", self.books)?;
        writeln!(f, "- Shops: {}", self.shops)?;
        writeln!(f, "- Stock: {}", self.stock)?;
        writeln!(f, "- Sales: {}", self.sales)
    }
}
