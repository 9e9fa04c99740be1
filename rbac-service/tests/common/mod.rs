//! Test helper module for rbac-service integration tests.
//!
//! Spawns the full router on an ephemeral port and drives it over HTTP.

#![allow(dead_code)]

use rbac_service::{
    build_router,
    config::{Environment, RbacConfig, SecurityConfig, SeedConfig, SwaggerConfig, SwaggerMode},
    stores::Stores,
    AppState,
};

/// Test application with a running HTTP server.
pub struct TestApp {
    pub address: String,
    pub state: AppState,
}

impl TestApp {
    /// Spawn the test application with empty stores.
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Spawn the test application with the demo catalog seeded.
    pub async fn spawn_seeded() -> Self {
        Self::spawn_with(true).await
    }

    async fn spawn_with(seed: bool) -> Self {
        let config = create_test_config();
        let stores = Stores::new();
        if seed {
            stores.seed_demo_data().await;
        }

        let state = AppState {
            config,
            stores,
        };
        let app = build_router(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        TestApp {
            address: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> reqwest::Client {
        reqwest::Client::new()
    }
}

/// Create a test configuration.
pub fn create_test_config() -> RbacConfig {
    RbacConfig {
        common: rbac_core::config::Config { port: 0 },
        environment: Environment::Dev,
        service_name: "rbac-service-test".to_string(),
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
