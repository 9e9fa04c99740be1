pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod stores;

use axum::{
    middleware::from_fn,
    routing::{delete, get},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{RbacConfig, SwaggerMode};
use crate::stores::Stores;
use rbac_core::middleware::{request_id_middleware, security_headers_middleware};

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check,
        handlers::user::list_users,
        handlers::user::create_user,
        handlers::user::delete_user,
        handlers::role::list_roles,
        handlers::role::create_role,
        handlers::role::delete_role,
        handlers::permission::list_permissions,
        handlers::permission::create_permission,
        handlers::permission::delete_permission,
    ),
    components(
        schemas(
            dtos::ErrorResponse,
            dtos::CreateUserRequest,
            dtos::CreateRoleRequest,
            dtos::CreatePermissionRequest,
            models::User,
            models::UserStatus,
            models::Role,
            models::RoleIcon,
            models::Permission,
        )
    ),
    tags(
        (name = "Users", description = "User directory management"),
        (name = "Roles", description = "Role bundles and their permissions"),
        (name = "Permissions", description = "Permission catalog"),
        (name = "Observability", description = "Service health"),
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub config: RbacConfig,
    pub stores: Stores,
}

pub fn build_router(state: AppState) -> Router {
    let mut app = Router::new().route("/health", get(health_check));

    let swagger_enabled = match state.config.environment {
        config::Environment::Dev => true,
        config::Environment::Prod => state.config.swagger.enabled == SwaggerMode::Public,
    };

    if swagger_enabled {
        app =
            app.merge(SwaggerUi::new("/docs").url("/.well-known/openapi.json", ApiDoc::openapi()));
    } else {
        // Keep the OpenAPI JSON available for programmatic access.
        app = app.route(
            "/.well-known/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        );
    }

    let cors = cors_layer(&state.config.security.allowed_origins);

    app.route(
        "/api/users",
        get(handlers::user::list_users).post(handlers::user::create_user),
    )
    .route("/api/users/:id", delete(handlers::user::delete_user))
    .route(
        "/api/roles",
        get(handlers::role::list_roles).post(handlers::role::create_role),
    )
    .route("/api/roles/:id", delete(handlers::role::delete_role))
    .route(
        "/api/permissions",
        get(handlers::permission::list_permissions).post(handlers::permission::create_permission),
    )
    .route(
        "/api/permissions/:id",
        delete(handlers::permission::delete_permission),
    )
    .with_state(state)
    // Add tracing layer
    .layer(
        TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
            let request_id = request
                .headers()
                .get(rbac_core::middleware::REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("-");

            tracing::info_span!(
                "http_request",
                request_id = %request_id,
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        }),
    )
    // Add tracing middleware for request_id
    .layer(from_fn(request_id_middleware))
    // Add security headers middleware
    .layer(from_fn(security_headers_middleware))
    // Add CORS layer
    .layer(cors)
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(tower_http::cors::Any)
    } else {
        layer.allow_origin(
            allowed_origins
                .iter()
                .map(|o| {
                    o.parse::<axum::http::HeaderValue>().unwrap_or_else(|e| {
                        tracing::error!("Invalid CORS origin '{}': {}. Using fallback.", o, e);
                        axum::http::HeaderValue::from_static("*")
                    })
                })
                .collect::<Vec<axum::http::HeaderValue>>(),
        )
    }
}

/// Service health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy")
    ),
    tag = "Observability"
)]
pub async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": state.config.service_name,
        "version": state.config.service_version,
        "environment": format!("{:?}", state.config.environment),
        "collections": {
            "users": state.stores.users.len().await,
            "roles": state.stores.roles.len().await,
            "permissions": state.stores.permissions.len().await,
        }
    }))
}
