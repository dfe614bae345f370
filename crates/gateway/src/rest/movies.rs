//! Movie REST endpoints

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json, Router,
};
use chrono::NaiveDate;
use cinema_database::{CensorshipLevel, MovieFilter};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::{IntoParams, ToSchema};

use super::actors::{ActorResponse, CreateActorRequest};
use crate::error::{ErrorResponse, GatewayError, GatewayResult};
use crate::state::GatewayState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: String,
    pub name: String,
    pub release_date: NaiveDate,
    #[schema(value_type = String, example = "not_censored")]
    pub censorship_level: CensorshipLevel,
    pub actors: Vec<ActorResponse>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieEnvelope {
    pub movie: MovieResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListResponse {
    pub movies: Vec<MovieResponse>,
}

/// Movie payload. Dates and levels are checked by the catalog so that
/// every bad field is reported at once.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateMovieRequest {
    #[serde(default)]
    #[schema(example = "Alien")]
    pub name: String,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "1979-05-25")]
    pub release_date: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "censored")]
    pub censorship_level: Option<Value>,
    /// Actors to create along with the movie
    #[serde(default)]
    pub actors: Vec<CreateActorRequest>,
    /// Public IDs of existing actors to cast
    #[serde(default)]
    pub actor_ids: Vec<String>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ListMoviesQuery {
    /// `censored` or `not_censored`; omit to list every movie
    pub censorship_level: Option<String>,
}

impl ListMoviesQuery {
    fn into_filter(self) -> GatewayResult<MovieFilter> {
        match self.censorship_level.as_deref() {
            None | Some("") => Ok(MovieFilter::default()),
            Some(raw) => raw
                .parse::<CensorshipLevel>()
                .map(MovieFilter::by_censorship_level)
                .map_err(|_| {
                    GatewayError::InvalidRequest(format!(
                        "censorship_level must be one of the following values: {}",
                        CensorshipLevel::VALUES.join(", ")
                    ))
                }),
        }
    }
}

impl From<cinema_database::Movie> for MovieResponse {
    fn from(movie: cinema_database::Movie) -> Self {
        Self {
            id: movie.public_id,
            name: movie.name,
            release_date: movie.release_date,
            censorship_level: movie.censorship_level,
            actors: movie.actors.into_iter().map(ActorResponse::from).collect(),
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

impl From<CreateMovieRequest> for cinema_database::CreateMovieRequest {
    fn from(request: CreateMovieRequest) -> Self {
        Self {
            name: request.name,
            release_date: request.release_date,
            censorship_level: request.censorship_level,
            actors: request.actors.into_iter().map(Into::into).collect(),
            actor_ids: request.actor_ids,
        }
    }
}

/// Create movie routes
pub fn create_movie_routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/movies", axum::routing::get(list_movies).post(create_movie))
        .route(
            "/movies/:movie_id",
            axum::routing::get(get_movie).delete(delete_movie),
        )
}

#[utoipa::path(
    get,
    path = "/api/movies",
    tag = "Movies",
    params(ListMoviesQuery),
    responses(
        (status = 200, description = "Movies ordered by name", body = MovieListResponse),
        (status = 400, description = "Unknown censorship level or malformed query", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_movies(
    params: Result<Query<ListMoviesQuery>, QueryRejection>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<MovieListResponse>> {
    let Query(params) = params?;
    let filter = params.into_filter()?;

    let movies = state.movie_service().find(filter).await?;

    Ok(Json(MovieListResponse {
        movies: movies.into_iter().map(MovieResponse::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/api/movies",
    tag = "Movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieEnvelope),
        (status = 400, description = "Malformed body", body = ErrorResponse),
        (status = 404, description = "Unknown actor ID", body = ErrorResponse),
        (status = 409, description = "Movie name already taken", body = ErrorResponse),
        (status = 422, description = "Invalid fields", body = ErrorResponse)
    )
)]
pub async fn create_movie(
    State(state): State<Arc<GatewayState>>,
    payload: Result<Json<CreateMovieRequest>, JsonRejection>,
) -> GatewayResult<impl IntoResponse> {
    let Json(payload) = payload?;

    let movie = state.movie_service().create(payload.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(MovieEnvelope {
            movie: movie.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/movies/{movie_id}",
    tag = "Movies",
    params(
        ("movie_id" = String, Path, description = "Public movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = MovieEnvelope),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    )
)]
pub async fn get_movie(
    Path(movie_id): Path<String>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<Json<MovieEnvelope>> {
    let movie = state.movie_service().get(&movie_id).await?;

    Ok(Json(MovieEnvelope {
        movie: movie.into(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/movies/{movie_id}",
    tag = "Movies",
    params(
        ("movie_id" = String, Path, description = "Public movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 404, description = "Movie not found", body = ErrorResponse)
    )
)]
pub async fn delete_movie(
    Path(movie_id): Path<String>,
    State(state): State<Arc<GatewayState>>,
) -> GatewayResult<StatusCode> {
    state.movie_service().delete(&movie_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
