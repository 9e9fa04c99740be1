//! admin-console: client-side state for the RBAC admin dashboard.
//!
//! Mirrors the dashboard's three tabs. Each collection gets a manager
//! owning the fetched set, the in-progress draft, and the local
//! sort/filter configuration. Managers talk to rbac-service through
//! [`ApiClient`] and only mutate local state after a successful
//! response, so a failed request leaves the view unchanged (if stale).

pub mod api;
pub mod models;
pub mod permissions;
pub mod roles;
pub mod users;
pub mod view;

pub use api::{ApiClient, ConsoleError};
pub use permissions::{LoadState, PermissionManager};
pub use roles::RoleManager;
pub use users::UserManager;
