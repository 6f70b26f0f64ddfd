use bookshop_core::Database;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database file for testing
#[allow(dead_code)]
pub fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

/// Helper function to create a temporary database holding the sample fixtures
#[allow(dead_code)]
pub fn create_seeded_db() -> (NamedTempFile, Database) {
    let (temp_file, mut db) = create_test_db();
    db.reset().expect("Failed to reset test database");
    (temp_file, db)
}
