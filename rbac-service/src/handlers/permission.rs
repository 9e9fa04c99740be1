//! Permission collection handlers.
//!
//! Same loose contract as roles, with one addition: deleting a
//! permission cascades, dropping its id from every role's bundle so no
//! role is left referencing a dead permission.

use axum::{
    extract::{Json, Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::dtos::CreatePermissionRequest;
use crate::models::Permission;
use crate::AppState;

/// List all permissions in insertion order.
///
/// GET /api/permissions
#[utoipa::path(
    get,
    path = "/api/permissions",
    responses(
        (status = 200, description = "All permissions", body = [Permission])
    ),
    tag = "Permissions"
)]
pub async fn list_permissions(State(state): State<AppState>) -> Json<Vec<Permission>> {
    Json(state.stores.permissions.list().await)
}

/// Create a permission.
///
/// POST /api/permissions
#[utoipa::path(
    post,
    path = "/api/permissions",
    request_body = CreatePermissionRequest,
    responses(
        (status = 201, description = "Permission created", body = Permission)
    ),
    tag = "Permissions"
)]
pub async fn create_permission(
    State(state): State<AppState>,
    Json(req): Json<CreatePermissionRequest>,
) -> (StatusCode, Json<Permission>) {
    let permission = Permission::new(req.name, req.description);
    state.stores.permissions.insert(permission.clone()).await;

    tracing::info!(permission_id = %permission.id, "Created permission");
    (StatusCode::CREATED, Json(permission))
}

/// Delete a permission by id, cascading into role bundles. Any id that
/// matches no permission, malformed ones included, is the same silent
/// no-op.
///
/// DELETE /api/permissions/:id
#[utoipa::path(
    delete,
    path = "/api/permissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Permission id")
    ),
    responses(
        (status = 204, description = "Permission deleted, or no permission with that id")
    ),
    tag = "Permissions"
)]
pub async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> StatusCode {
    let Ok(id) = Uuid::parse_str(&id) else {
        return StatusCode::NO_CONTENT;
    };

    let removed = state
        .stores
        .permissions
        .remove_where(|permission| permission.id == id)
        .await;

    if removed > 0 {
        state
            .stores
            .roles
            .for_each_mut(|role| role.permissions.retain(|pid| *pid != id))
            .await;
        tracing::info!(permission_id = %id, "Deleted permission and cascaded role references");
    }

    StatusCode::NO_CONTENT
}
