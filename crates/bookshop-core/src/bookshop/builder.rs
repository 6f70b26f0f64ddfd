//! Builder for creating and configuring Bookshop instances.

use std::path::{Path, PathBuf};

use log::debug;

use super::Bookshop;
use crate::{
    db::Database,
    error::{BookshopError, Result},
};

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Location {
    Default,
    File(PathBuf),
    InMemory,
}

/// Builder for creating and configuring Bookshop instances.
#[derive(Debug, Clone)]
pub struct BookshopBuilder {
    location: Location,
}

impl BookshopBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            location: Location::Default,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/bookshop/bookshop.db` or
    /// `~/.local/share/bookshop/bookshop.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.location = Location::File(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.location = Location::InMemory;
        self
    }

    /// Opens the configured database.
    ///
    /// The schema is left untouched; call [`Bookshop::reset`] to provision
    /// and seed it.
    ///
    /// # Errors
    ///
    /// Returns `BookshopError::XdgDirectory` if the default path cannot be
    /// resolved, `BookshopError::Configuration` if the path names a
    /// directory, `BookshopError::FileSystem` if its parent cannot be created
    /// and `BookshopError::Database` if the connection fails.
    pub fn build(self) -> Result<Bookshop> {
        let db_path = match self.location {
            Location::InMemory => {
                debug!("Opening in-memory database");
                return Ok(Bookshop::new(Database::open_in_memory()?, None));
            }
            Location::File(path) => path,
            Location::Default => Self::default_database_path()?,
        };

        if db_path.is_dir() {
            return Err(BookshopError::Configuration {
                message: format!("Database path is a directory: {}", db_path.display()),
            });
        }

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| BookshopError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        Ok(Bookshop::new(db, Some(db_path)))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("bookshop")
            .place_data_file("bookshop.db")
            .map_err(|e| BookshopError::XdgDirectory(e.to_string()))
    }
}

impl Default for BookshopBuilder {
    fn default() -> Self {
        Self::new()
    }
}
