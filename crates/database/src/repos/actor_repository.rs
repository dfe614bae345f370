//! Repository for actor data access operations.

use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::info;

use crate::entities::{Actor, NewActor};
use crate::types::CatalogResult;

const ACTOR_COLUMNS: &str = "a.id, a.public_id, a.name, a.created_at";

/// Repository for actor database operations
#[derive(Clone)]
pub struct ActorRepository {
    pool: SqlitePool,
}

impl ActorRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find actor by public ID
    pub async fn find_by_public_id(&self, public_id: &str) -> CatalogResult<Option<Actor>> {
        let mut conn = self.pool.acquire().await?;
        find_by_public_id(&mut conn, public_id).await
    }

    /// Actors cast in a movie, ordered by name
    pub async fn find_by_movie_id(&self, movie_id: i64) -> CatalogResult<Vec<Actor>> {
        let mut conn = self.pool.acquire().await?;
        find_by_movie_id(&mut conn, movie_id).await
    }

    pub async fn list(&self) -> CatalogResult<Vec<Actor>> {
        let actors = sqlx::query_as::<_, Actor>(&format!(
            "SELECT {ACTOR_COLUMNS} FROM actors a ORDER BY a.name ASC, a.id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(actors)
    }

    pub async fn create(&self, actor: &NewActor) -> CatalogResult<Actor> {
        let mut conn = self.pool.acquire().await?;
        insert(&mut conn, actor).await
    }
}

pub(crate) async fn find_by_public_id(
    conn: &mut SqliteConnection,
    public_id: &str,
) -> CatalogResult<Option<Actor>> {
    let actor = sqlx::query_as::<_, Actor>(&format!(
        "SELECT {ACTOR_COLUMNS} FROM actors a WHERE a.public_id = ?"
    ))
    .bind(public_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(actor)
}

pub(crate) async fn find_by_movie_id(
    conn: &mut SqliteConnection,
    movie_id: i64,
) -> CatalogResult<Vec<Actor>> {
    let actors = sqlx::query_as::<_, Actor>(&format!(
        "SELECT {ACTOR_COLUMNS}
         FROM actors a
         JOIN movie_actors ma ON ma.actor_id = a.id
         WHERE ma.movie_id = ?
         ORDER BY a.name ASC, a.id ASC"
    ))
    .bind(movie_id)
    .fetch_all(&mut *conn)
    .await?;

    Ok(actors)
}

pub(crate) async fn insert(conn: &mut SqliteConnection, actor: &NewActor) -> CatalogResult<Actor> {
    let public_id = cuid2::cuid();
    let now = Utc::now().to_rfc3339();

    let id = sqlx::query("INSERT INTO actors (public_id, name, created_at) VALUES (?, ?, ?)")
        .bind(&public_id)
        .bind(&actor.name)
        .bind(&now)
        .execute(&mut *conn)
        .await?
        .last_insert_rowid();

    info!(actor_id = id, public_id = %public_id, name = %actor.name, "created new actor");

    Ok(Actor {
        id,
        public_id,
        name: actor.name.clone(),
        created_at: now,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::create_test_database;

    #[tokio::test]
    async fn test_create_and_find_actor() {
        let (pool, _temp_dir) = create_test_database().await;
        let repo = ActorRepository::new(pool);

        let created = repo
            .create(&NewActor {
                name: "Tom Skerritt".to_string(),
            })
            .await
            .unwrap();

        assert!(created.id > 0);
        assert!(!created.public_id.is_empty());

        let found = repo.find_by_public_id(&created.public_id).await.unwrap();
        assert_eq!(found, Some(created));

        assert!(repo.find_by_public_id("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_orders_by_name() {
        let (pool, _temp_dir) = create_test_database().await;
        let repo = ActorRepository::new(pool);

        for name in ["Yaphet Kotto", "Ian Holm", "John Hurt"] {
            repo.create(&NewActor {
                name: name.to_string(),
            })
            .await
            .unwrap();
        }

        let names: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|actor| actor.name)
            .collect();
        assert_eq!(names, vec!["Ian Holm", "John Hurt", "Yaphet Kotto"]);
    }
}
