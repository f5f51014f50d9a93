//! Shared test utilities for domain testing
//!
//! This crate provides reusable test infrastructure for the catalog
//! domains:
//! - [`TestDatabase`]: a migrated throwaway SQLite database
//! - [`TestCatalogDir`]: a temp directory laid out like a catalog
//!   deployment (items file plus image directory)
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::TestDatabase;
//!
//! #[tokio::test]
//! async fn my_sqlite_test() {
//!     let db = TestDatabase::new().await;
//!     let repo = SqliteItemRepository::new(db.connection());
//! }
//! ```

use sea_orm::DatabaseConnection;
use std::path::PathBuf;
use tempfile::TempDir;

/// A throwaway SQLite database with migrations applied.
///
/// Uses a file in a temp directory rather than `sqlite::memory:` so every
/// pooled connection sees the same database. The directory (and with it
/// the database) is removed on drop.
pub struct TestDatabase {
    db: DatabaseConnection,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir for test database");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("test.sqlite3").display()
        );

        let db = database::sqlite::connect(&url)
            .await
            .expect("failed to open test database");
        database::sqlite::run_migrations::<migration::Migrator>(&db, "test-utils")
            .await
            .expect("failed to migrate test database");

        Self { db, _dir: dir }
    }

    /// Cloneable handle to the underlying connection pool.
    pub fn connection(&self) -> DatabaseConnection {
        self.db.clone()
    }
}

/// A temp directory laid out like a catalog deployment.
pub struct TestCatalogDir {
    dir: TempDir,
}

impl TestCatalogDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp catalog dir");
        std::fs::create_dir(dir.path().join("images")).expect("failed to create image dir");
        Self { dir }
    }

    /// Path of the items document (not created until first use).
    pub fn items_file(&self) -> PathBuf {
        self.dir.path().join("items.json")
    }

    pub fn image_dir(&self) -> PathBuf {
        self.dir.path().join("images")
    }

    /// Drop an image file into the image directory.
    pub fn add_image(&self, name: &str, bytes: &[u8]) {
        std::fs::write(self.image_dir().join(name), bytes).expect("failed to write test image");
    }
}

impl Default for TestCatalogDir {
    fn default() -> Self {
        Self::new()
    }
}
