//! Exact decimal price stored in minor units.

use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of minor units in one major unit.
pub const MINOR_UNITS: i64 = 100;

/// A sale price with two fractional digits.
///
/// Held as an integer count of minor units so that `335.6` stays exactly
/// `335.60` through storage and arithmetic. Stored in SQLite as `INTEGER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    /// Creates a price from a count of minor units (`33560` is `335.60`).
    pub const fn from_minor_units(minor: i64) -> Self {
        Self(minor)
    }

    /// Returns the amount in minor units.
    pub const fn minor_units(self) -> i64 {
        self.0
    }

    /// Returns the whole part of the amount.
    pub const fn major(self) -> i64 {
        self.0 / MINOR_UNITS
    }

    /// Returns the fractional part of the amount, always non-negative.
    pub const fn fraction(self) -> i64 {
        (self.0 % MINOR_UNITS).abs()
    }
}

impl FromStr for Price {
    type Err = String;

    /// Parses decimal text such as `"555"`, `"335.6"` or `"625.60"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let (whole, fraction) = text.split_once('.').unwrap_or((text, ""));

        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid price: {s}"));
        }
        if fraction.len() > 2 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid price: {s} (at most two fractional digits)"));
        }

        let whole: i64 = whole
            .parse()
            .map_err(|_| format!("Price out of range: {s}"))?;
        let fraction = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|e| e.to_string())? * 10,
            _ => fraction.parse::<i64>().map_err(|e| e.to_string())?,
        };

        whole
            .checked_mul(MINOR_UNITS)
            .and_then(|minor| minor.checked_add(fraction))
            .map(Price)
            .ok_or_else(|| format!("Price out of range: {s}"))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

impl ToSql for Price {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Price {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Price)
    }
}
