use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::RoleIcon;

/// Payload for POST /api/roles. The roles endpoint performs no field
/// validation: absent fields take their defaults instead of failing.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateRoleRequest {
    #[schema(example = "Auditor")]
    pub name: String,

    /// Ids of permissions bundled into this role.
    pub permissions: Vec<Uuid>,

    pub icon: RoleIcon,
}
