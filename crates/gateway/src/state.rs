//! Shared application state for the gateway

use std::sync::Arc;

use cinema_catalog::{ActorService, MovieService};
use cinema_database::MovieRepository;
use sqlx::SqlitePool;

/// Shared application state containing all services
#[derive(Clone)]
pub struct GatewayState {
    /// Database connection pool
    pub pool: SqlitePool,
    pub movie_service: Arc<MovieService<MovieRepository>>,
    pub actor_service: Arc<ActorService>,
}

impl GatewayState {
    pub fn new(pool: SqlitePool) -> Self {
        let movie_service = Arc::new(MovieService::new(pool.clone()));
        let actor_service = Arc::new(ActorService::new(pool.clone()));

        Self {
            pool,
            movie_service,
            actor_service,
        }
    }

    pub fn movie_service(&self) -> &MovieService<MovieRepository> {
        &self.movie_service
    }

    pub fn actor_service(&self) -> &ActorService {
        &self.actor_service
    }
}
