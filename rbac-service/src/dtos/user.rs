use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::models::UserStatus;

/// Payload for POST /api/users. All four fields are required; a blank
/// value is rejected the same way as a missing one.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, message = "name is required"))]
    #[schema(example = "Ann")]
    pub name: String,

    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "ann@x.com")]
    pub email: String,

    #[validate(length(min = 1, message = "role is required"))]
    #[schema(example = "Admin")]
    pub role: String,

    pub status: Option<UserStatus>,
}
