//! Role collection handlers.
//!
//! Roles keep the loose dashboard contract: creation accepts any shape
//! with defaults for absent fields, and deleting an unknown id is a
//! silent no-op rather than a 404.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::dtos::CreateRoleRequest;
use crate::models::Role;
use crate::AppState;

/// List all roles in insertion order.
///
/// GET /api/roles
#[utoipa::path(
    get,
    path = "/api/roles",
    responses(
        (status = 200, description = "All roles", body = [Role])
    ),
    tag = "Roles"
)]
pub async fn list_roles(State(state): State<AppState>) -> Json<Vec<Role>> {
    Json(state.stores.roles.list().await)
}

/// Create a role.
///
/// POST /api/roles
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = Role)
    ),
    tag = "Roles"
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(req): Json<CreateRoleRequest>,
) -> (StatusCode, Json<Role>) {
    let role = Role::new(req.name, req.permissions, req.icon);
    state.stores.roles.insert(role.clone()).await;

    tracing::info!(role_id = %role.id, "Created role");
    (StatusCode::CREATED, Json(role))
}

/// Delete a role by id. Any id that matches no role, malformed ones
/// included, is the same silent no-op.
///
/// DELETE /api/roles/:id
#[utoipa::path(
    delete,
    path = "/api/roles/{id}",
    params(
        ("id" = Uuid, Path, description = "Role id")
    ),
    responses(
        (status = 204, description = "Role deleted, or no role with that id")
    ),
    tag = "Roles"
)]
pub async fn delete_role(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if let Ok(id) = Uuid::parse_str(&id) {
        let removed = state.stores.roles.remove_where(|role| role.id == id).await;
        if removed > 0 {
            tracing::info!(role_id = %id, "Deleted role");
        }
    }

    StatusCode::NO_CONTENT
}
