pub mod permission;
pub mod role;
pub mod user;

pub use permission::CreatePermissionRequest;
pub use role::CreateRoleRequest;
pub use user::CreateUserRequest;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "All fields are required")]
    pub error: String,
}
