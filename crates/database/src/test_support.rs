//! Shared helpers for database tests

use cinema_config::DatabaseConfig;
use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::initialize_database;

/// Create a migrated database in a temporary directory
pub async fn create_test_database() -> (SqlitePool, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");

    let config = DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        max_connections: 2,
    };

    let pool = initialize_database(&config).await.unwrap();
    (pool, temp_dir)
}
