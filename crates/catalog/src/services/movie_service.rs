//! Movie service for managing movie operations.

use cinema_database::{
    CatalogError, CatalogResult, CreateMovieRequest, Movie, MovieFilter, MovieRepository, NewMovie,
};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Service for managing movie operations
#[derive(Clone)]
pub struct MovieService<R = MovieRepository> {
    movie_repository: R,
}

impl MovieService<MovieRepository> {
    /// Create a new movie service backed by the database
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            movie_repository: MovieRepository::new(pool),
        }
    }
}

impl<R> MovieService<R>
where
    R: MovieRepo,
{
    pub fn with_repository(movie_repository: R) -> Self {
        Self { movie_repository }
    }

    /// Validate and persist a new movie.
    ///
    /// Fails with [`CatalogError::Validation`] when a field is malformed and
    /// with [`CatalogError::NameAlreadyExists`] when the name is taken.
    pub async fn create(&self, request: CreateMovieRequest) -> CatalogResult<Movie> {
        let movie = request.validate().map_err(|errors| {
            debug!(%errors, "rejected invalid movie");
            CatalogError::Validation(errors)
        })?;

        if self
            .movie_repository
            .find_by_name(&movie.name)
            .await?
            .is_some()
        {
            warn!(name = %movie.name, "movie name already taken");
            return Err(CatalogError::NameAlreadyExists(movie.name));
        }

        let created = self.movie_repository.create(&movie).await?;
        info!(public_id = %created.public_id, name = %created.name, "movie added to catalog");
        Ok(created)
    }

    /// List movies, optionally restricted by the filter
    pub async fn find(&self, filter: MovieFilter) -> CatalogResult<Vec<Movie>> {
        let movies = self.movie_repository.find(&filter).await?;
        debug!(?filter, count = movies.len(), "listed movies");
        Ok(movies)
    }

    pub async fn get(&self, public_id: &str) -> CatalogResult<Movie> {
        self.movie_repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| CatalogError::movie_not_found(public_id))
    }

    pub async fn delete(&self, public_id: &str) -> CatalogResult<()> {
        if self.movie_repository.delete(public_id).await? {
            Ok(())
        } else {
            Err(CatalogError::movie_not_found(public_id))
        }
    }
}

/// Trait for movie repositories to allow generic usage
#[allow(async_fn_in_trait)]
pub trait MovieRepo {
    async fn find_by_public_id(&self, public_id: &str) -> CatalogResult<Option<Movie>>;
    async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Movie>>;
    async fn find(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>>;
    async fn create(&self, movie: &NewMovie) -> CatalogResult<Movie>;
    async fn delete(&self, public_id: &str) -> CatalogResult<bool>;
}

impl MovieRepo for MovieRepository {
    async fn find_by_public_id(&self, public_id: &str) -> CatalogResult<Option<Movie>> {
        self.find_by_public_id(public_id).await
    }

    async fn find_by_name(&self, name: &str) -> CatalogResult<Option<Movie>> {
        self.find_by_name(name).await
    }

    async fn find(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        self.find(filter).await
    }

    async fn create(&self, movie: &NewMovie) -> CatalogResult<Movie> {
        self.create(movie).await
    }

    async fn delete(&self, public_id: &str) -> CatalogResult<bool> {
        self.delete(public_id).await
    }
}
