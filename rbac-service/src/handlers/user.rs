//! User collection handlers.
//!
//! Users are the one resource with input validation: all four fields
//! must be present and non-blank, and deleting an unknown id is a 404.

use anyhow::anyhow;
use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::dtos::CreateUserRequest;
use crate::models::User;
use crate::AppState;
use rbac_core::error::AppError;

/// List all users in insertion order.
///
/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User])
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.stores.users.list().await)
}

/// Create a user.
///
/// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "A required field is missing", body = crate::dtos::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<User>), AppError> {
    req.validate()?;
    let status = req
        .status
        .ok_or_else(|| AppError::BadRequest(anyhow!("All fields are required")))?;

    let user = User::new(req.name, req.email, req.role, status);
    state.stores.users.insert(user.clone()).await;

    tracing::info!(user_id = %user.id, "Created user");
    Ok((StatusCode::CREATED, Json(user)))
}

/// Delete a user by id. Any id that matches no user, malformed ones
/// included, is a 404.
///
/// DELETE /api/users/:id
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(
        ("id" = Uuid, Path, description = "User id")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "No user with that id", body = crate::dtos::ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| AppError::NotFound(anyhow!("User not found")))?;
    let removed = state.stores.users.remove_where(|user| user.id == id).await;
    if removed == 0 {
        return Err(AppError::NotFound(anyhow!("User not found")));
    }

    tracing::info!(user_id = %id, "Deleted user");
    Ok(StatusCode::NO_CONTENT)
}
