mod common;

use bookshop_core::{
    fixtures::{BookSeed, Fixtures, PublisherSeed},
    BookshopError, Database, Price, TableCounts,
};
use common::{create_seeded_db, create_test_db};
use jiff::civil::date;

const SEEDED: TableCounts = TableCounts {
    publishers: 3,
    books: 6,
    shops: 3,
    stock: 6,
    sales: 6,
};

#[test]
fn test_database_initialization() {
    let (temp_file, _db) = create_test_db();

    assert!(temp_file.path().exists());
}

#[test]
fn test_provision_creates_empty_tables() {
    let (_temp_file, mut db) = create_test_db();

    db.provision_schema().expect("Failed to provision schema");

    assert_eq!(db.table_counts().unwrap(), TableCounts::default());
}

#[test]
fn test_provision_twice_is_idempotent() {
    let (_temp_file, mut db) = create_test_db();

    db.provision_schema().expect("First provisioning failed");
    db.provision_schema().expect("Second provisioning failed");

    assert_eq!(db.table_counts().unwrap(), TableCounts::default());
}

#[test]
fn test_provision_discards_seeded_rows() {
    let (_temp_file, mut db) = create_seeded_db();

    db.provision_schema().expect("Failed to reprovision");

    assert_eq!(db.table_counts().unwrap().total(), 0);
}

#[test]
fn test_reset_seeds_exact_counts() {
    let (_temp_file, mut db) = create_test_db();

    let counts = db.reset().expect("Failed to reset");

    assert_eq!(counts, SEEDED);
    assert_eq!(db.table_counts().unwrap(), SEEDED);
}

#[test]
fn test_reset_twice_leaves_one_copy() {
    let (_temp_file, mut db) = create_seeded_db();

    db.reset().expect("Second reset failed");

    assert_eq!(db.table_counts().unwrap(), SEEDED);
}

#[test]
fn test_reset_survives_reopen() {
    let (temp_file, db) = create_seeded_db();
    db.close().expect("Failed to close database");

    let reopened = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(reopened.table_counts().unwrap(), SEEDED);
}

#[test]
fn test_seeded_references_resolve() {
    let (_temp_file, db) = create_seeded_db();

    assert_eq!(db.dangling_references().unwrap(), 0);

    let publishers = db.publishers().unwrap();
    let books = db.books().unwrap();
    let shops = db.shops().unwrap();
    let stock = db.stock().unwrap();
    let sales = db.sales().unwrap();

    assert!(books
        .iter()
        .all(|b| publishers.iter().any(|p| p.id == b.id_publisher)));
    assert!(stock.iter().all(|s| books.iter().any(|b| b.id == s.id_book)
        && shops.iter().any(|sh| sh.id == s.id_shop)));
    assert!(sales.iter().all(|sale| stock.iter().any(|s| s.id == sale.id_stock)));
}

#[test]
fn test_seeded_values() {
    let (_temp_file, db) = create_seeded_db();

    let names: Vec<String> = db.publishers().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, ["Dan Millman", "Robin Sharma", "Frederick Backman"]);

    let shops: Vec<String> = db.shops().unwrap().into_iter().map(|s| s.name).collect();
    assert_eq!(shops, ["Буквоед", "Лабиринт", "Калевала"]);

    let stock = db.stock().unwrap();
    let counts: Vec<i64> = stock.iter().map(|s| s.count).collect();
    assert_eq!(counts, [5, 10, 15, 8, 12, 25]);

    let sales = db.sales().unwrap();
    let second = &sales[1];
    assert_eq!(second.price, Price::from_minor_units(33560));
    assert_eq!(second.date_sale, date(2023, 5, 10));
    assert_eq!(second.id_stock, stock[0].id);
    assert_eq!(second.count, 3);
}

#[test]
fn test_duplicate_publisher_rolls_back_seed() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let mut fixtures = Fixtures::sample();
    fixtures.publishers.push(PublisherSeed {
        name: "Dan Millman".to_string(),
    });

    let err = db.seed(&fixtures).expect_err("Duplicate publisher should fail");

    assert!(err.is_constraint_violation());
    assert_eq!(db.table_counts().unwrap(), TableCounts::default());
}

#[test]
fn test_failed_seed_can_be_retried() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let mut broken = Fixtures::sample();
    broken.books.push(BookSeed {
        title: "Beartown".to_string(),
        publisher: 0,
    });
    assert!(db.seed(&broken).is_err());

    db.seed(&Fixtures::sample()).expect("Retry should succeed");
    assert_eq!(db.table_counts().unwrap(), SEEDED);
}

#[test]
fn test_dangling_fixture_index_rolls_back_seed() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let mut fixtures = Fixtures::sample();
    fixtures.sales[5].stock = 99;

    let err = db.seed(&fixtures).expect_err("Dangling index should fail");

    match err {
        BookshopError::InvalidInput { field, .. } => assert_eq!(field, "sale.stock"),
        other => panic!("Unexpected error: {other}"),
    }
    assert_eq!(db.table_counts().unwrap().total(), 0);
}

#[test]
fn test_seeding_twice_without_provisioning_fails_whole() {
    let (_temp_file, mut db) = create_seeded_db();

    let err = db
        .seed(&Fixtures::sample())
        .expect_err("Second seed should violate uniqueness");

    assert!(err.is_constraint_violation());
    assert_eq!(db.table_counts().unwrap(), SEEDED);
}

#[test]
fn test_name_length_is_enforced() {
    let (_temp_file, mut db) = create_test_db();
    db.provision_schema().unwrap();

    let fixtures = Fixtures {
        publishers: vec![PublisherSeed {
            name: "x".repeat(41),
        }],
        ..Default::default()
    };

    let err = db.seed(&fixtures).expect_err("Over-long name should fail");
    assert!(err.is_constraint_violation());
}

#[test]
fn test_seed_without_schema_fails_with_stage_context() {
    let (_temp_file, mut db) = create_test_db();

    let err = db
        .seed(&Fixtures::sample())
        .expect_err("Seeding without tables should fail");

    assert!(err.to_string().contains("Failed to insert publisher"));
}

#[test]
fn test_in_memory_database() {
    let mut db = Database::open_in_memory().expect("Failed to open in-memory database");

    assert_eq!(db.reset().unwrap(), SEEDED);
    db.close().expect("Failed to close in-memory database");
}
