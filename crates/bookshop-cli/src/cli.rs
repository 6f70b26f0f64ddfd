//! Command handlers for the bookshop CLI
//!
//! Each handler runs one workflow against the [`Bookshop`] facade and renders
//! its result, either as markdown through the [`TerminalRenderer`] or as JSON
//! when `--json` is given.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use bookshop_core::{
    display::Entity, Bookshop, Listing, PublisherLookup, ReportTable, TableCounts,
};
use log::{debug, info};
use serde::Serialize;

use crate::{
    args::{PublisherArgs, Table},
    renderer::TerminalRenderer,
};

/// Prompt shown when no publisher is given on the command line.
pub const PROMPT: &str = "Enter publisher name or id: ";

pub struct Cli {
    bookshop: Bookshop,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(bookshop: Bookshop, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            bookshop,
            renderer,
            json,
        }
    }

    /// Full run: recreate and seed the database, then report.
    pub fn run(&mut self, args: PublisherArgs) -> Result<()> {
        self.reset()?;
        self.report(args)
    }

    /// Recreate and seed the database and print what was loaded.
    pub fn setup(&mut self) -> Result<()> {
        let counts = self.reset()?;

        if self.json {
            return print_json(&counts);
        }
        self.renderer
            .render(&format!("# Database ready\n\n{counts}"))
    }

    /// Report on a publisher, prompting for a name if none was given.
    pub fn report(&self, args: PublisherArgs) -> Result<()> {
        let lookup = match args.into_lookup() {
            Some(lookup) => lookup,
            None => PublisherLookup::Name(
                prompt_publisher(io::stdin().lock(), io::stdout().lock())
                    .context("Failed to read publisher name")?,
            ),
        };
        debug!("Publisher lookup: {lookup:?}");

        let rows = self
            .bookshop
            .report(&lookup)
            .context("Failed to run report")?;

        if self.json {
            return print_json(&rows);
        }
        self.renderer.render_table(&ReportTable(&rows).to_string())
    }

    /// List every row of one table.
    pub fn list(&self, table: Table) -> Result<()> {
        let context = "Failed to list table";
        match table {
            Table::Publishers => self.show(self.bookshop.publishers().context(context)?),
            Table::Books => self.show(self.bookshop.books().context(context)?),
            Table::Shops => self.show(self.bookshop.shops().context(context)?),
            Table::Stock => self.show(self.bookshop.stock().context(context)?),
            Table::Sales => self.show(self.bookshop.sales().context(context)?),
        }
    }

    /// Release the database connection.
    pub fn close(self) -> Result<()> {
        self.bookshop.close().context("Failed to close database")
    }

    fn reset(&mut self) -> Result<TableCounts> {
        let counts = self
            .bookshop
            .reset()
            .context("Failed to provision and seed database")?;
        info!("Seeded {} rows", counts.total());
        Ok(counts)
    }

    fn show<T: Entity + Serialize>(&self, items: Vec<T>) -> Result<()> {
        if self.json {
            return print_json(&items);
        }
        self.renderer.render(&Listing(items).to_string())
    }
}

/// Writes the prompt and reads one line, without its line ending.
///
/// End of input yields an empty name, which matches no publisher.
pub fn prompt_publisher<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<String> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}
