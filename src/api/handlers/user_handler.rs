//! User handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::api::extractors::{QueryParams, ValidatedJson};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::AppResult;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// User display name
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Bob")]
    pub name: String,
}

/// Optional lookup on the collection route
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UserQuery {
    /// Return only the user with this ID
    pub id: Option<String>,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user))
}

/// List users, or fetch one when `id` is given
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(UserQuery),
    responses(
        (status = 200, description = "All users in creation order, or the single user matching `id`", body = Vec<User>),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<UserQuery>,
) -> AppResult<Response> {
    if let Some(id) = query.id {
        let user = state.user_service.get_user(&id).await?;
        return Ok(Json(user).into_response());
    }

    let users = state.user_service.get_users().await?;
    Ok(Json(users).into_response())
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "User not found"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Invalid JSON or empty name")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload.name).await?;
    Ok((StatusCode::CREATED, Json(user)))
}
