//! Cinema Database Crate
//!
//! Connection management, migrations, entities, field validation and
//! repositories for the movie catalog.

use sqlx::SqlitePool;
use tracing::info;

pub use cinema_config::DatabaseConfig;

pub mod connection;
pub mod entities;
pub mod migrations;
pub mod repos;
pub mod types;
pub mod validation;

#[cfg(test)]
pub(crate) mod test_support;

pub use connection::prepare_database;
pub use migrations::run_migrations;

pub use repos::{ActorRepository, MovieRepository};

pub use entities::{
    Actor, CensorshipLevel, CreateActorRequest, CreateMovieRequest, Movie, MovieFilter, NewActor,
    NewMovie, UnknownCensorshipLevel,
};

pub use types::{CatalogError, CatalogResult, DatabaseError, DatabaseResult};
pub use validation::ValidationErrors;

/// Tables owned by the catalog, children first so deletes respect foreign keys.
pub const CATALOG_TABLES: &[&str] = &["movie_actors", "movies", "actors"];

/// Initialize the database with migrations
pub async fn initialize_database(config: &DatabaseConfig) -> DatabaseResult<SqlitePool> {
    let pool = prepare_database(config)
        .await
        .map_err(|e| DatabaseError::ConnectionError(format!("{e:#}")))?;

    run_migrations(&pool)
        .await
        .map_err(|e| DatabaseError::MigrationError(format!("{e:#}")))?;

    Ok(pool)
}

/// Delete every row from the given catalog tables, returning the rows removed.
///
/// Only names listed in [`CATALOG_TABLES`] are accepted.
pub async fn clean_tables(pool: &SqlitePool, tables: &[&str]) -> DatabaseResult<u64> {
    let mut removed = 0;
    for table in tables {
        if !CATALOG_TABLES.contains(table) {
            return Err(DatabaseError::QueryError(format!("unknown table {table}")));
        }

        let result = sqlx::query(&format!("DELETE FROM {table}"))
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::QueryError(e.to_string()))?;
        removed += result.rows_affected();
    }

    info!(?tables, removed, "cleaned tables");
    Ok(removed)
}
