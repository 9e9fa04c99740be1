use serde::Deserialize;
use utoipa::ToSchema;

/// Payload for POST /api/permissions. Like roles, no field validation:
/// absent fields default to empty strings.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreatePermissionRequest {
    #[schema(example = "Export")]
    pub name: String,

    #[schema(example = "Allows exporting reports")]
    pub description: String,
}
