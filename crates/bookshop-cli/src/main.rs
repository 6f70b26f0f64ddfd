//! Bookshop CLI Application
//!
//! Command-line interface for the bookshop sales report.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bookshop_core::BookshopBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        json,
        command,
    } = Args::parse();

    let bookshop = BookshopBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open database")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Bookshop started");

    let mut cli = Cli::new(bookshop, renderer, json);
    match command {
        Some(Run(publisher)) => cli.run(publisher)?,
        Some(Setup) => cli.setup()?,
        Some(Report(publisher)) => cli.report(publisher)?,
        Some(List { table }) => cli.list(table)?,
        None => cli.run(Default::default())?,
    }

    cli.close()
}
