//! Error types for the bookshop library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every bookshop operation.
#[derive(Error, Debug)]
pub enum BookshopError {
    /// Connection, provisioning, seeding or query failures
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> BookshopError {
        BookshopError::Database {
            message: self.message,
            source,
        }
    }
}

impl BookshopError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BookshopError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the underlying SQLite error is a constraint violation
    /// (unique, foreign key, not null or check).
    pub fn is_constraint_violation(&self) -> bool {
        match self {
            BookshopError::Database { source, .. } => matches!(
                source.sqlite_error_code(),
                Some(rusqlite::ErrorCode::ConstraintViolation)
            ),
            _ => false,
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message naming the failing stage.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| BookshopError::database(message).with_source(e))
    }
}

/// Result type alias for bookshop operations
pub type Result<T> = std::result::Result<T, BookshopError>;
