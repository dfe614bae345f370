//! Actor service for managing actors independently of movies.

use cinema_database::{
    Actor, ActorRepository, CatalogError, CatalogResult, CreateActorRequest,
};
use sqlx::SqlitePool;
use tracing::debug;

/// Service for managing actor operations
#[derive(Clone)]
pub struct ActorService {
    actor_repository: ActorRepository,
}

impl ActorService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            actor_repository: ActorRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateActorRequest) -> CatalogResult<Actor> {
        let actor = request.validate()?;
        self.actor_repository.create(&actor).await
    }

    pub async fn get(&self, public_id: &str) -> CatalogResult<Actor> {
        self.actor_repository
            .find_by_public_id(public_id)
            .await?
            .ok_or_else(|| CatalogError::actor_not_found(public_id))
    }

    pub async fn list(&self) -> CatalogResult<Vec<Actor>> {
        let actors = self.actor_repository.list().await?;
        debug!(count = actors.len(), "listed actors");
        Ok(actors)
    }
}
