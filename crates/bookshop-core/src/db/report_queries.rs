//! The publisher sales report.

use log::debug;
use rusqlite::{params, Params};

use super::utils::date_column;
use crate::{
    error::{DatabaseResultExt, Result},
    models::{PublisherLookup, ReportRow},
};

/// Every sale of every book of one publisher, with the shop of the stock
/// entry the sale was made from.
///
/// Each stock row pairs its own shop with its own sales, so a book stocked in
/// several shops never mixes one shop's sales into another's line.
macro_rules! report_sql {
    ($filter:literal) => {
        concat!(
            "SELECT b.title, sh.name, sa.price, sa.date_sale
             FROM publisher p
             JOIN book b ON b.id_publisher = p.id
             JOIN stock st ON st.id_book = b.id
             JOIN shop sh ON sh.id = st.id_shop
             JOIN sale sa ON sa.id_stock = st.id
             WHERE ",
            $filter,
            " ORDER BY b.id, st.id, sa.id"
        )
    };
}

const REPORT_BY_NAME_SQL: &str = report_sql!("p.name = ?1");
const REPORT_BY_ID_SQL: &str = report_sql!("p.id = ?1");

impl super::Database {
    /// Lists `(title, shop, price, date)` for every sale of the selected
    /// publisher's books, ordered by book, stock entry and sale.
    ///
    /// A publisher that does not exist, or has no sales, yields an empty
    /// report rather than an error.
    pub fn publisher_report(&self, lookup: &PublisherLookup) -> Result<Vec<ReportRow>> {
        debug!("Running publisher report for {lookup:?}");

        match lookup {
            PublisherLookup::Name(name) => self.query_report(REPORT_BY_NAME_SQL, params![name]),
            PublisherLookup::Id(id) => match i64::try_from(*id) {
                Ok(id) => self.query_report(REPORT_BY_ID_SQL, params![id]),
                // SQLite rowids are signed, so no row can carry this id.
                Err(_) => Ok(Vec::new()),
            },
        }
    }

    fn query_report<P: Params>(&self, sql: &str, params: P) -> Result<Vec<ReportRow>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare report query")?;

        let rows = stmt
            .query_map(params, |row| {
                Ok(ReportRow {
                    title: row.get(0)?,
                    shop: row.get(1)?,
                    price: row.get(2)?,
                    date: date_column(row, 3)?,
                })
            })
            .db_context("Failed to run report query")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch report rows")?;

        debug!("Report returned {} rows", rows.len());
        Ok(rows)
    }
}
