use std::path::PathBuf;

use bookshop_core::PublisherLookup;
use clap::{Parser, Subcommand, ValueEnum};

/// Publisher sales report over a seeded bookstore database
///
/// Bookshop keeps a small inventory of publishers, books, shops, stock and
/// sales in SQLite. A full run recreates the tables, loads the demonstration
/// dataset and prints every sale of one publisher's books as a table.
#[derive(Parser)]
#[command(version, about, name = "bookshop")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bookshop/bookshop.db
    #[arg(long, global = true, env = "BOOKSHOP_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print rows as JSON instead of a table
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Bookshop CLI
///
/// Without a subcommand, `run` is executed and the publisher is prompted for.
#[derive(Subcommand)]
pub enum Commands {
    /// Recreate and seed the database, then report on a publisher
    Run(PublisherArgs),
    /// Recreate and seed the database
    Setup,
    /// Report on a publisher using the existing database
    #[command(alias = "r")]
    Report(PublisherArgs),
    /// List every row of one table
    #[command(alias = "ls")]
    List {
        #[arg(value_enum)]
        table: Table,
    },
}

/// Selects the publisher to report on
#[derive(clap::Args, Default)]
pub struct PublisherArgs {
    /// Exact publisher name. Prompted for when neither it nor --id is given
    pub publisher: Option<String>,

    /// Select the publisher by id instead of name
    #[arg(long, conflicts_with = "publisher")]
    pub id: Option<u64>,
}

impl PublisherArgs {
    /// The lookup given on the command line, if any.
    pub fn into_lookup(self) -> Option<PublisherLookup> {
        match (self.publisher, self.id) {
            (_, Some(id)) => Some(PublisherLookup::Id(id)),
            (Some(name), None) => Some(PublisherLookup::Name(name)),
            (None, None) => None,
        }
    }
}

/// Tables that can be listed
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Table {
    Publishers,
    Books,
    Shops,
    Stock,
    Sales,
}
