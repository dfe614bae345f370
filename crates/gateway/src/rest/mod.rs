//! REST API endpoints for the gateway

pub mod actors;
pub mod health;
pub mod movies;

use axum::Router;
use std::sync::Arc;

use crate::state::GatewayState;

/// Create all REST API routes, mounted under `/api`
pub fn create_rest_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .merge(movies::create_movie_routes())
        .merge(actors::create_actor_routes())
}

pub use actors::*;
pub use health::*;
pub use movies::*;
