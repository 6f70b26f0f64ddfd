mod common;

use bookshop_core::{
    fixtures::{Fixtures, SaleSeed, StockSeed},
    BookshopBuilder, BookshopError, Price, PublisherLookup, ReportRow, ReportTable,
};
use common::{create_seeded_db, create_test_db};
use jiff::civil::{date, Date};

fn row(title: &str, shop: &str, minor: i64, date: Date) -> ReportRow {
    ReportRow {
        title: title.to_string(),
        shop: shop.to_string(),
        price: Price::from_minor_units(minor),
        date,
    }
}

#[test]
fn test_report_dan_millman() {
    let (_temp_file, db) = create_seeded_db();

    let rows = db
        .publisher_report(&PublisherLookup::name("Dan Millman"))
        .expect("Failed to run report");

    assert_eq!(
        rows,
        vec![
            row("Way of the Peacefull Warrior", "Буквоед", 33560, date(2023, 5, 10)),
            row("The laws of spirit", "Лабиринт", 62560, date(2023, 5, 12)),
        ]
    );
}

#[test]
fn test_report_robin_sharma() {
    let (_temp_file, db) = create_seeded_db();

    let rows = db
        .publisher_report(&PublisherLookup::name("Robin Sharma"))
        .expect("Failed to run report");

    assert_eq!(
        rows,
        vec![
            row("Saint, serfinger and CEO", "Буквоед", 55500, date(2023, 5, 9)),
            row("I am the best", "Калевала", 70000, date(2023, 5, 11)),
        ]
    );
}

#[test]
fn test_report_frederick_backman() {
    let (_temp_file, db) = create_seeded_db();

    let rows = db
        .publisher_report(&PublisherLookup::name("Frederick Backman"))
        .expect("Failed to run report");

    assert_eq!(
        rows,
        vec![
            row("A Man Called Ove", "Калевала", 87000, date(2023, 4, 22)),
            row("Beartown", "Буквоед", 58000, date(2023, 4, 13)),
        ]
    );
}

#[test]
fn test_report_has_no_cross_publisher_leakage() {
    let (_temp_file, db) = create_seeded_db();

    let publishers = db.publishers().unwrap();
    let books = db.books().unwrap();

    for publisher in &publishers {
        let own_titles: Vec<&str> = books
            .iter()
            .filter(|b| b.id_publisher == publisher.id)
            .map(|b| b.title.as_str())
            .collect();

        let rows = db
            .publisher_report(&PublisherLookup::name(publisher.name.as_str()))
            .unwrap();

        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| own_titles.contains(&r.title.as_str())));
    }
}

#[test]
fn test_report_unknown_publisher_is_empty() {
    let (_temp_file, db) = create_seeded_db();

    let rows = db
        .publisher_report(&PublisherLookup::name("nonexistent-name"))
        .expect("Unknown publisher must not be an error");

    assert!(rows.is_empty());
}

#[test]
fn test_report_matches_name_exactly() {
    let (_temp_file, db) = create_seeded_db();

    for text in ["dan millman", "Dan", "Dan Millman ", "%"] {
        let rows = db.publisher_report(&PublisherLookup::name(text)).unwrap();
        assert!(rows.is_empty(), "{text:?} should not match");
    }
}

#[test]
fn test_report_numeric_text_is_a_name() {
    let (_temp_file, db) = create_seeded_db();

    let rows = db.publisher_report(&PublisherLookup::from("1")).unwrap();

    assert!(rows.is_empty());
}

#[test]
fn test_report_by_id() {
    let (_temp_file, db) = create_seeded_db();
    let publisher = &db.publishers().unwrap()[1];

    let by_id = db
        .publisher_report(&PublisherLookup::id(publisher.id))
        .unwrap();
    let by_name = db
        .publisher_report(&PublisherLookup::name(publisher.name.as_str()))
        .unwrap();

    assert_eq!(by_id, by_name);
    assert!(db
        .publisher_report(&PublisherLookup::id(999))
        .unwrap()
        .is_empty());
}

#[test]
fn test_report_by_id_beyond_rowid_range_is_empty() {
    let (_temp_file, db) = create_seeded_db();

    for id in [i64::MAX as u64 + 1, u64::MAX] {
        let rows = db.publisher_report(&PublisherLookup::id(id)).unwrap();
        assert!(rows.is_empty(), "id {id} should match nothing");
    }
}

#[test]
fn test_report_on_empty_schema() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let rows = db
        .publisher_report(&PublisherLookup::name("Dan Millman"))
        .unwrap();

    assert!(rows.is_empty());
}

#[test]
fn test_report_pairs_each_stock_with_its_own_sales() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    // Stock the first book in a second shop and sell it there too.
    let mut fixtures = Fixtures::sample();
    fixtures.stock.push(StockSeed {
        book: 0,
        shop: 1,
        count: 2,
    });
    fixtures.sales.push(SaleSeed {
        price: Price::from_minor_units(40000),
        date_sale: date(2023, 6, 1),
        stock: 6,
        count: 1,
    });
    db.seed(&fixtures).unwrap();

    let rows = db
        .publisher_report(&PublisherLookup::name("Dan Millman"))
        .unwrap();

    assert_eq!(
        rows,
        vec![
            row("Way of the Peacefull Warrior", "Буквоед", 33560, date(2023, 5, 10)),
            row("Way of the Peacefull Warrior", "Лабиринт", 40000, date(2023, 6, 1)),
            row("The laws of spirit", "Лабиринт", 62560, date(2023, 5, 12)),
        ]
    );
}

#[test]
fn test_report_skips_stock_without_sales() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let mut fixtures = Fixtures::sample();
    fixtures.sales.retain(|sale| sale.stock != 0);
    db.seed(&fixtures).unwrap();

    let rows = db
        .publisher_report(&PublisherLookup::name("Dan Millman"))
        .unwrap();

    assert_eq!(
        rows,
        vec![row("The laws of spirit", "Лабиринт", 62560, date(2023, 5, 12))]
    );
}

#[test]
fn test_facade_report_table() {
    let mut shop = BookshopBuilder::new()
        .in_memory()
        .build()
        .expect("Failed to build bookshop");
    assert!(shop.database_path().is_none());

    shop.reset().unwrap();
    let rows = shop.report(&PublisherLookup::name("Dan Millman")).unwrap();
    let table = ReportTable(&rows).to_string();

    assert!(table.starts_with("| Title"));
    assert!(table.contains("| Way of the Peacefull Warrior | Буквоед  | 335.60 | 2023-05-10 |"));
    assert_eq!(table.lines().count(), 4);

    shop.close().unwrap();
}

#[test]
fn test_facade_with_database_path_creates_directories() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("bookshop.db");

    let mut shop = BookshopBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to build bookshop");

    assert_eq!(shop.database_path(), Some(db_path.as_path()));
    let seeded = shop.reset().unwrap();
    assert_eq!(seeded.total(), 24);
    shop.close().unwrap();

    assert!(db_path.exists());

    let reopened = BookshopBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to reopen bookshop");
    assert_eq!(reopened.table_counts().unwrap(), seeded);
    reopened.close().unwrap();
}

#[test]
fn test_facade_rejects_directory_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();

    let result = BookshopBuilder::new()
        .with_database_path(Some(temp_dir.path()))
        .build();

    assert!(matches!(result, Err(BookshopError::Configuration { .. })));
}
