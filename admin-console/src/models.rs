//! Wire models for the rbac-service API, owned by the console so the
//! client stays decoupled from the backend crate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "Active",
            UserStatus::Inactive => "Inactive",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
    pub created_utc: DateTime<Utc>,
}

/// Icon tag for a role. Tags the console does not recognize deserialize
/// as `Unknown` and render with the default glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoleIcon {
    #[default]
    User,
    Shield,
    Key,
    Eye,
    Star,
    #[serde(other)]
    Unknown,
}

impl RoleIcon {
    /// Glyph shown next to the role name.
    pub fn glyph(self) -> &'static str {
        match self {
            RoleIcon::User | RoleIcon::Unknown => "\u{1F464}",
            RoleIcon::Shield => "\u{1F6E1}",
            RoleIcon::Key => "\u{1F511}",
            RoleIcon::Eye => "\u{1F441}",
            RoleIcon::Star => "\u{2B50}",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<Uuid>,
    pub icon: RoleIcon,
    pub created_utc: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_utc: DateTime<Utc>,
}
