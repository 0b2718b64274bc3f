//! User handlers.
//!
//! Maps the five CRUD verbs under `/sgu-api/usuarios` onto `UserService`.
//! Failure bodies are plain text; a missing record on GET or DELETE is an
//! empty 404, while a missing record on PUT is a 400 carrying the message.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::USERS_BASE_PATH;
use crate::domain::{User, UserFields, UserId};
use crate::errors::{AppError, AppResult};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(USERS_BASE_PATH, get(list_users).post(create_user))
        .route(
            &format!("{}/:id", USERS_BASE_PATH),
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/sgu-api/usuarios",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = state.user_service.list_users().await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/sgu-api/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<Json<User>> {
    state
        .user_service
        .get_user(id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(id))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/sgu-api/usuarios",
    tag = "Users",
    request_body = UserFields,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Email already in use or invalid payload", body = String, content_type = "text/plain")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserFields>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.create_user(payload).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Replace a user's name, email and phone
#[utoipa::path(
    put,
    path = "/sgu-api/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserFields,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "User not found, email held by another user, or invalid payload", body = String, content_type = "text/plain")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
    ValidatedJson(payload): ValidatedJson<UserFields>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(id, payload)
        .await
        .map_err(AppError::into_bad_request)?;

    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/sgu-api/usuarios/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<UserId>,
) -> AppResult<StatusCode> {
    state.user_service.delete_user(id).await?;
    Ok(StatusCode::OK)
}
