//! User model - directory entries managed through the dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Account status shown in the user table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// User entity. `role` is a free-text label, not a foreign key into the
/// roles collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_utc: DateTime<Utc>,
}

impl User {
    /// Create a new user with a fresh server-assigned id.
    pub fn new(name: String, email: String, role: String, status: UserStatus) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            role,
            status,
            created_utc: Utc::now(),
        }
    }
}
