//! Actor REST endpoints

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorResponse, GatewayResult};
use crate::state::GatewayState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActorResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorEnvelope {
    pub actor: ActorResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ActorListResponse {
    pub actors: Vec<ActorResponse>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateActorRequest {
    #[serde(default)]
    #[schema(example = "Sigourney Weaver")]
    pub name: String,
}

impl From<cinema_database::Actor> for ActorResponse {
    fn from(actor: cinema_database::Actor) -> Self {
        Self {
            id: actor.public_id,
            name: actor.name,
            created_at: actor.created_at,
        }
    }
}

impl From<CreateActorRequest> for cinema_database::CreateActorRequest {
    fn from(request: CreateActorRequest) -> Self {
        Self { name: request.name }
    }
}

/// Create actor routes
pub fn create_actor_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/actors", axum::routing::get(list_actors).post(create_actor))
        .route("/actors/:actor_id", axum::routing::get(get_actor))
}

#[utoipa::path(
    get,
    path = "/api/actors",
    tag = "Actors",
    responses(
        (status = 200, description = "All actors ordered by name", body = ActorListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_actors(
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<ActorListResponse>> {
    let actors = state.actor_service().list().await?;

    Ok(Json(ActorListResponse {
        actors: actors.into_iter().map(ActorResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/actors",
    tag = "Actors",
    request_body = CreateActorRequest,
    responses(
        (status = 201, description = "Actor created", body = ActorEnvelope),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_actor(
    State(state): State<Arc<GatewayState>>,
    payload: Result<Json<CreateActorRequest>, JsonRejection>,
) -> GatewayResult<impl IntoResponse> {
    let Json(payload) = payload?;

    let actor = state.actor_service().create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(ActorEnvelope {
            actor: actor.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/actors/{actor_id}",
    tag = "Actors",
    params(
        ("actor_id" = String, Path, description = "Public actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = ActorEnvelope),
        (status = 404, description = "Actor not found", body = ErrorResponse)
    )
)]
pub async fn get_actor(
    Path(actor_id): Path<String>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<ActorEnvelope>> {
    let actor = state.actor_service().get(&actor_id).await?;

    Ok(Json(ActorEnvelope {
        actor: actor.into(),
    }))
}
