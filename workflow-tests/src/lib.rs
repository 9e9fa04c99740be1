//! End-to-end test infrastructure for the RBAC admin workspace.
//!
//! Spawns rbac-service in-process on an ephemeral port so tests can
//! drive the admin-console managers against a real HTTP backend with
//! no external setup.

use rbac_service::{
    build_router,
    config::{Environment, RbacConfig, SecurityConfig, SeedConfig, SwaggerConfig, SwaggerMode},
    stores::Stores,
    AppState,
};

/// A running in-process rbac-service.
pub struct TestService {
    pub base_url: String,
    pub state: AppState,
}

/// Spawn rbac-service with empty stores.
pub async fn spawn_service() -> anyhow::Result<TestService> {
    spawn_service_with(false).await
}

/// Spawn rbac-service with the demo catalog seeded.
pub async fn spawn_seeded_service() -> anyhow::Result<TestService> {
    spawn_service_with(true).await
}

async fn spawn_service_with(seed: bool) -> anyhow::Result<TestService> {
    let stores = Stores::new();
    if seed {
        stores.seed_demo_data().await;
    }

    let state = AppState {
        config: test_config(),
        stores,
    };
    let app = build_router(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(TestService {
        base_url: format!("http://{}", addr),
        state,
    })
}

fn test_config() -> RbacConfig {
    RbacConfig {
        common: rbac_core::config::Config { port: 0 },
        environment: Environment::Dev,
        service_name: "rbac-service-e2e".to_string(),
        service_version: "0.1.0".to_string(),
        log_level: "debug".to_string(),
        security: SecurityConfig {
            allowed_origins: vec!["*".to_string()],
        },
        swagger: SwaggerConfig {
            enabled: SwaggerMode::Disabled,
        },
        seed: SeedConfig { demo_data: false },
    }
}
