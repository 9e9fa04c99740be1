//! Permission model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Permission entity. Names are not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Permission {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub created_utc: DateTime<Utc>,
}

impl Permission {
    /// Create a new permission with a fresh server-assigned id.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            created_utc: Utc::now(),
        }
    }
}
