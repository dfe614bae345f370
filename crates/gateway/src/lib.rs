//! # Cinema Gateway Crate
//!
//! HTTP layer of the cinema backend. Routes REST calls to the catalog
//! services, maps catalog errors to status codes and serves the OpenAPI
//! document describing the API.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cinema_gateway::{create_router, GatewayState};
//!
//! let state = GatewayState::new(pool);
//! let app = create_router(state, &[]);
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:7070").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod error;
pub mod middleware;
pub mod rest;
pub mod state;

pub use error::{ErrorResponse, GatewayError, GatewayResult};
pub use middleware::logging_middleware;
pub use state::GatewayState;

pub use create_router as build_router;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        rest::health::health_check,
        rest::movies::list_movies,
        rest::movies::create_movie,
        rest::movies::get_movie,
        rest::movies::delete_movie,
        rest::actors::list_actors,
        rest::actors::create_actor,
        rest::actors::get_actor,
    ),
    components(
        schemas(
            rest::health::HealthResponse,
            rest::movies::MovieResponse,
            rest::movies::MovieEnvelope,
            rest::movies::MovieListResponse,
            rest::movies::CreateMovieRequest,
            rest::movies::ListMoviesQuery,
            rest::actors::ActorResponse,
            rest::actors::ActorEnvelope,
            rest::actors::ActorListResponse,
            rest::actors::CreateActorRequest,
            error::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness checks"),
        (name = "Movies", description = "Movie catalog"),
        (name = "Actors", description = "Actors appearing in movies"),
    )
)]
pub struct ApiDoc;

/// Create the main application router with all routes
pub fn create_router(state: GatewayState, allowed_origins: &[String]) -> Router {
    let state = Arc::new(state);

    Router::new()
        .route("/health", get(rest::health::health_check))
        .nest("/api", rest::create_rest_routes())
        .with_state(state)
        .route("/api-docs/openapi.json", get(openapi_document))
        .layer(middleware::create_cors_layer(allowed_origins))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/health",
            "/api/movies",
            "/api/movies/{movie_id}",
            "/api/actors",
            "/api/actors/{actor_id}",
        ] {
            assert!(paths.contains(&expected), "missing {expected}");
        }
    }
}
