//! Repository for movie data access operations.

use chrono::{NaiveDate, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::{info, warn};

use super::actor_repository;
use crate::entities::{Actor, CensorshipLevel, Movie, MovieFilter, NewMovie};
use crate::types::{CatalogError, CatalogResult};

const MOVIE_COLUMNS: &str =
    "id, public_id, name, release_date, censorship_level, created_at, updated_at";

#[derive(Debug, FromRow)]
struct MovieRow {
    id: i64,
    public_id: String,
    name: String,
    release_date: NaiveDate,
    censorship_level: String,
    created_at: String,
    updated_at: String,
}

impl MovieRow {
    fn into_movie(self, actors: Vec<Actor>) -> CatalogResult<Movie> {
        let censorship_level = self
            .censorship_level
            .parse::<CensorshipLevel>()
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(Movie {
            id: self.id,
            public_id: self.public_id,
            name: self.name,
            release_date: self.release_date,
            censorship_level,
            actors,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Repository for movie database operations
#[derive(Clone)]
pub struct MovieRepository {
    pool: SqlitePool,
}

impl MovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find movie by public ID, actors included
    pub async fn find_by_public_id(&self, public_id: &str) -> CatalogResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE public_id = ?"
        ))
        .bind(public_id)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate_optional(row).await
    }

    /// Find movie by its unique name
    pub async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Movie>> {
        let row = sqlx::query_as::<_, MovieRow>(&format!(
            "SELECT {MOVIE_COLUMNS} FROM movies WHERE name = ?"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        self.hydrate_optional(row).await
    }

    /// List movies matching the filter, ordered by name
    pub async fn find(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!("SELECT {MOVIE_COLUMNS} FROM movies"));

        if let Some(level) = filter.censorship_level {
            query
                .push(" WHERE censorship_level = ")
                .push_bind(level.as_str());
        }
        query.push(" ORDER BY name ASC");

        let rows = query
            .build_query_as::<MovieRow>()
            .fetch_all(&self.pool)
            .await?;

        let mut conn = self.pool.acquire().await?;
        let mut movies = Vec::with_capacity(rows.len());
        for row in rows {
            let actors = actor_repository::find_by_movie_id(&mut conn, row.id).await?;
            movies.push(row.into_movie(actors)?);
        }

        Ok(movies)
    }

    /// Insert a movie together with its cast in one transaction
    pub async fn create(&self, movie: &NewMovie) -> CatalogResult<Movie> {
        let public_id = cuid2::cuid();
        let now = Utc::now().to_rfc3339();

        let mut tx = self.pool.begin().await?;

        let movie_id = sqlx::query(
            "INSERT INTO movies (public_id, name, release_date, censorship_level, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&public_id)
        .bind(&movie.name)
        .bind(movie.release_date)
        .bind(movie.censorship_level.as_str())
        .bind(&now)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_insert_error(e, &movie.name))?
        .last_insert_rowid();

        let mut actors: Vec<Actor> = Vec::with_capacity(movie.actors.len() + movie.actor_ids.len());
        for new_actor in &movie.actors {
            actors.push(actor_repository::insert(&mut tx, new_actor).await?);
        }

        for actor_public_id in &movie.actor_ids {
            let actor = actor_repository::find_by_public_id(&mut tx, actor_public_id)
                .await?
                .ok_or_else(|| CatalogError::actor_not_found(actor_public_id.as_str()))?;
            if !actors.iter().any(|existing| existing.id == actor.id) {
                actors.push(actor);
            }
        }

        for actor in &actors {
            link_actor(&mut tx, movie_id, actor.id).await?;
        }

        tx.commit().await?;

        info!(
            movie_id,
            public_id = %public_id,
            name = %movie.name,
            censorship_level = %movie.censorship_level,
            actors = actors.len(),
            "created new movie"
        );

        actors.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));

        Ok(Movie {
            id: movie_id,
            public_id,
            name: movie.name.clone(),
            release_date: movie.release_date,
            censorship_level: movie.censorship_level,
            actors,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Delete a movie; returns whether a row was removed
    pub async fn delete(&self, public_id: &str) -> CatalogResult<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE public_id = ?")
            .bind(public_id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(public_id = %public_id, "deleted movie");
        } else {
            warn!(public_id = %public_id, "attempted to delete missing movie");
        }

        Ok(deleted)
    }

    pub async fn count(&self) -> CatalogResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM movies")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn hydrate_optional(&self, row: Option<MovieRow>) -> CatalogResult<Option<Movie>> {
        let Some(row) = row else {
            return Ok(None);
        };

        let mut conn = self.pool.acquire().await?;
        let actors = actor_repository::find_by_movie_id(&mut conn, row.id).await?;
        row.into_movie(actors).map(Some)
    }
}

async fn link_actor(conn: &mut SqliteConnection, movie_id: i64, actor_id: i64) -> CatalogResult<()> {
    sqlx::query("INSERT OR IGNORE INTO movie_actors (movie_id, actor_id) VALUES (?, ?)")
        .bind(movie_id)
        .bind(actor_id)
        .execute(&mut *conn)
        .await?;

    Ok(())
}

fn map_insert_error(error: sqlx::Error, name: &str) -> CatalogError {
    match &error {
        sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
            CatalogError::NameAlreadyExists(name.to_string())
        }
        _ => CatalogError::from(error),
    }
}
