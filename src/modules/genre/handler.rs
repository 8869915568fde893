use super::dto::{GenreInput, GenreResponse};
use super::service::GenreService;
use crate::common::error::AppError;
use crate::common::json_body::JsonBody;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::extract::{Path, State};
use uuid::Uuid;

type HandlerResult<T> = Result<ApiSuccess<T>, AppError>;

/// List all genres
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "Genres sorted by name", body = ApiResponse<Vec<GenreResponse>>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> HandlerResult<Vec<GenreResponse>> {
    let genres = GenreService::find_all(&state).await?;
    Ok(ApiSuccess::ok(genres, "Genres retrieved successfully"))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre created", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
pub async fn create_genre(
    (State(state), JsonBody(payload)): (State<AppState>, JsonBody<GenreInput>),
) -> HandlerResult<GenreResponse> {
    let genre = GenreService::create(&state, payload).await?;
    Ok(ApiSuccess::ok(genre, "Genre created successfully"))
}

/// Get genre by ID
#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre details", body = ApiResponse<GenreResponse>),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    (State(state), Path(id)): (State<AppState>, Path<String>),
) -> HandlerResult<GenreResponse> {
    let genre = GenreService::find_by_id(&state, &id).await?;
    Ok(ApiSuccess::ok(genre, "Genre retrieved successfully"))
}

/// Update genre
#[utoipa::path(
    put,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    request_body = GenreInput,
    responses(
        (status = 200, description = "Genre updated", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
pub async fn update_genre(
    (State(state), Path(id), JsonBody(payload)): (State<AppState>, Path<String>, JsonBody<GenreInput>),
) -> HandlerResult<GenreResponse> {
    let genre = GenreService::update(&state, &id, payload).await?;
    Ok(ApiSuccess::ok(genre, "Genre updated successfully"))
}

/// Delete genre
#[utoipa::path(
    delete,
    path = "/api/v1/genres/{id}",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Deleted genre", body = ApiResponse<GenreResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden"),
        (status = 404, description = "Genre not found")
    ),
    tag = "Genres",
    security(("bearer_auth" = []))
)]
pub async fn delete_genre(
    (State(state), Path(id)): (State<AppState>, Path<String>),
) -> HandlerResult<GenreResponse> {
    let genre = GenreService::delete(&state, &id).await?;
    Ok(ApiSuccess::ok(genre, "Genre deleted successfully"))
}
