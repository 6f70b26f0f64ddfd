//! Row conversion helpers shared by the query modules.

use jiff::civil::Date;
use rusqlite::{types::Type, Row};

use crate::error::{BookshopError, Result};

/// Reads an ISO-8601 date stored as text.
pub(super) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Date> {
    row.get::<_, String>(idx)?
        .parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a surrogate key.
pub(super) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Resolves a positional fixture reference to the key generated for it.
pub(super) fn resolve_index(keys: &[i64], index: usize, field: &str) -> Result<i64> {
    keys.get(index).copied().ok_or_else(|| {
        BookshopError::invalid_input(
            field,
            format!("index {index} is out of range ({} rows)", keys.len()),
        )
    })
}
