//! Test factories and helpers for service layer testing

use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};
use cinema_config::DatabaseConfig;
use cinema_database::{
    initialize_database, Actor, CatalogResult, CreateActorRequest,
    CreateMovieRequest, Movie, MovieFilter, NewMovie,
};
use rand::Rng;
use sqlx::SqlitePool;
use tempfile::TempDir;

use super::movie_service::{MovieRepo, MovieService};

pub use cinema_database::clean_tables;

/// Creates a migrated test database in a temporary directory
pub async fn create_test_db() -> (SqlitePool, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");

    let config = DatabaseConfig {
        url: format!("sqlite://{}", db_path.display()),
        max_connections: 2,
    };

    let pool = initialize_database(&config)
        .await
        .expect("Failed to create test database");

    (pool, temp_dir)
}

/// A valid actor payload with a unique name
pub fn build_actor() -> CreateActorRequest {
    CreateActorRequest::new(format!("Actor {}", cuid2::cuid()))
}

/// A valid movie payload with a unique name, a random release date and no cast
pub fn build_movie() -> CreateMovieRequest {
    CreateMovieRequest {
        name: format!("Movie {}", cuid2::cuid()),
        release_date: Some(random_release_date().format("%Y-%m-%d").to_string().into()),
        censorship_level: Some("not_censored".into()),
        actors: vec![],
        actor_ids: vec![],
    }
}

/// Build `count` movies, let the caller adjust each one, and persist them
pub async fn populate_movies<R, F>(
    service: &MovieService<R>,
    count: usize,
    customize: F,
) -> Vec<Movie>
where
    R: MovieRepo,
    F: Fn(&mut CreateMovieRequest),
{
    let mut movies = Vec::with_capacity(count);
    for _ in 0..count {
        let mut movie = build_movie();
        customize(&mut movie);
        movies.push(service.create(movie).await.expect("Failed to populate movie"));
    }
    movies
}

fn random_release_date() -> NaiveDate {
    let mut rng = rand::thread_rng();
    NaiveDate::from_ymd_opt(
        rng.gen_range(1920..=2024),
        rng.gen_range(1..=12),
        rng.gen_range(1..=28),
    )
    .expect("day 1..=28 exists in every month")
}

/// Repository keeping movies in memory, counting inserts
#[derive(Clone, Default)]
pub struct InMemoryMovieRepository {
    movies: Arc<Mutex<Vec<Movie>>>,
    create_calls: Arc<Mutex<usize>>,
}

impl InMemoryMovieRepository {
    pub fn create_calls(&self) -> usize {
        *self.create_calls.lock().unwrap()
    }
}

impl MovieRepo for InMemoryMovieRepository {
    async fn find_by_public_id(&self, public_id: &str) -> CatalogResult<Option<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.iter().find(|m| m.public_id == public_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies.iter().find(|m| m.name == name).cloned())
    }

    async fn find(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let movies = self.movies.lock().unwrap();
        Ok(movies
            .iter()
            .filter(|m| {
                filter
                    .censorship_level
                    .map_or(true, |level| m.censorship_level == level)
            })
            .cloned()
            .collect())
    }

    async fn create(&self, movie: &NewMovie) -> CatalogResult<Movie> {
        *self.create_calls.lock().unwrap() += 1;

        let mut movies = self.movies.lock().unwrap();
        let now = Utc::now().to_rfc3339();
        let id = movies.len() as i64 + 1;
        let created = Movie {
            id,
            public_id: format!("movie-{id}"),
            name: movie.name.clone(),
            release_date: movie.release_date,
            censorship_level: movie.censorship_level,
            actors: movie
                .actors
                .iter()
                .enumerate()
                .map(|(i, actor)| Actor {
                    id: i as i64 + 1,
                    public_id: format!("actor-{id}-{i}"),
                    name: actor.name.clone(),
                    created_at: now.clone(),
                })
                .collect(),
            created_at: now.clone(),
            updated_at: now,
        };
        movies.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, public_id: &str) -> CatalogResult<bool> {
        let mut movies = self.movies.lock().unwrap();
        let before = movies.len();
        movies.retain(|m| m.public_id != public_id);
        Ok(movies.len() != before)
    }
}
