//! Pipe-delimited report table.

use std::fmt;

use crate::models::ReportRow;

/// Column headers of the report, in output order.
pub const HEADERS: [&str; 4] = ["Title", "Shop", "Price", "Date"];

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGNMENT: [Align; 4] = [Align::Left, Align::Left, Align::Right, Align::Left];

/// Formats report rows as a markdown pipe table.
///
/// Headers are always written, so an empty report renders as the header and
/// alignment lines only. Columns are padded to their widest cell counted in
/// characters, which keeps Cyrillic shop names aligned. The price column is
/// right-aligned.
pub struct ReportTable<'a>(pub &'a [ReportRow]);

impl ReportTable<'_> {
    fn cells(&self) -> Vec<[String; 4]> {
        self.0
            .iter()
            .map(|row| {
                [
                    row.title.clone(),
                    row.shop.clone(),
                    row.price.to_string(),
                    row.date.to_string(),
                ]
            })
            .collect()
    }
}

impl fmt::Display for ReportTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells = self.cells();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        write_row(f, &HEADERS, &widths)?;

        write!(f, "|")?;
        for (width, align) in widths.iter().zip(ALIGNMENT) {
            let dashes = "-".repeat(width + 1);
            match align {
                Align::Left => write!(f, ":{dashes}|")?,
                Align::Right => write!(f, "{dashes}:|")?,
            }
        }
        writeln!(f)?;

        for row in &cells {
            write_row(f, row, &widths)?;
        }

        Ok(())
    }
}

fn write_row<S: AsRef<str>>(
    f: &mut fmt::Formatter<'_>,
    cells: &[S],
    widths: &[usize; 4],
) -> fmt::Result {
    write!(f, "|")?;
    for ((cell, width), align) in cells.iter().zip(widths.iter().copied()).zip(ALIGNMENT) {
        let cell = cell.as_ref();
        match align {
            Align::Left => write!(f, " {cell:<width$} |")?,
            Align::Right => write!(f, " {cell:>width$} |")?,
        }
    }
    writeln!(f)
}
