//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[34m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render a markdown pipe table
    ///
    /// The table is always printed as pipe text. Rich mode only colors the
    /// header line, and only when stdout is a terminal.
    pub fn render_table(&self, table: &str) -> Result<()> {
        let stdout = io::stdout();
        let styled = self.rich_enabled && stdout.is_terminal();
        write_table(stdout.lock(), table, styled)?;
        Ok(())
    }
}

fn write_table<W: Write>(mut out: W, table: &str, styled: bool) -> io::Result<()> {
    match table.split_once('\n') {
        Some((header, rest)) if styled => {
            writeln!(out, "\x1b[34m{header}\x1b[0m")?;
            write!(out, "{rest}")?;
        }
        _ => write!(out, "{table}")?,
    }
    out.flush()
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
