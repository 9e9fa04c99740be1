//! Role model - named permission bundles with a display icon.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Icon tag attached to a role. Tags outside the known set deserialize
/// as `Unknown` and render with the default glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ToSchema)]
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

/// Role entity. Permissions are referenced by id so that renaming a
/// permission never orphans the bundle; deletions cascade instead.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub permissions: Vec<Uuid>,
    pub icon: RoleIcon,
    pub created_utc: DateTime<Utc>,
}

impl Role {
    /// Create a new role with a fresh server-assigned id.
    pub fn new(name: String, permissions: Vec<Uuid>, icon: RoleIcon) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            permissions,
            icon,
            created_utc: Utc::now(),
        }
    }
}
