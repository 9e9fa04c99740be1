//! Typed HTTP client for the rbac-service REST API.

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Permission, Role, RoleIcon, User, UserStatus};

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewRole {
    pub name: String,
    pub permissions: Vec<Uuid>,
    pub icon: RoleIcon,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPermission {
    pub name: String,
    pub description: String,
}

pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_users(&self) -> Result<Vec<User>, ConsoleError> {
        self.get_json("/api/users").await
    }

    pub async fn create_user(&self, user: &NewUser) -> Result<User, ConsoleError> {
        self.post_json("/api/users", user).await
    }

    pub async fn delete_user(&self, id: Uuid) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/users/{}", id)).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, ConsoleError> {
        self.get_json("/api/roles").await
    }

    pub async fn create_role(&self, role: &NewRole) -> Result<Role, ConsoleError> {
        self.post_json("/api/roles", role).await
    }

    pub async fn delete_role(&self, id: Uuid) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/roles/{}", id)).await
    }

    pub async fn list_permissions(&self) -> Result<Vec<Permission>, ConsoleError> {
        self.get_json("/api/permissions").await
    }

    pub async fn create_permission(
        &self,
        permission: &NewPermission,
    ) -> Result<Permission, ConsoleError> {
        self.post_json("/api/permissions", permission).await
    }

    pub async fn delete_permission(&self, id: Uuid) -> Result<(), ConsoleError> {
        self.delete(&format!("/api/permissions/{}", id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ConsoleError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await?;
        Self::check(response).await?.json().await.map_err(Into::into)
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ConsoleError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.post(&url).json(body).send().await?;
        Self::check(response).await?.json().await.map_err(Into::into)
    }

    async fn delete(&self, path: &str) -> Result<(), ConsoleError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.delete(&url).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Turn a non-success response into an API error carrying the
    /// backend's error message when one is present.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ConsoleError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<serde_json::Value>()
            .await
            .ok()
            .and_then(|body| {
                body.get("error")
                    .and_then(|e| e.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| "unexpected response".to_string());

        Err(ConsoleError::Api { status, message })
    }
}
