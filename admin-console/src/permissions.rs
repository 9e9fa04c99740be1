//! Permission tab state, including the async catalog load the role
//! manager consumes read-only.

use uuid::Uuid;

use crate::api::{ApiClient, ConsoleError, NewPermission};
use crate::models::Permission;
use crate::view::{matches_substring, sort_view, SortConfig};

/// Catalog load lifecycle: the dashboard shows a spinner for `Pending`,
/// the table for `Ready`, and an empty table for `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Pending,
    Ready,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionSortKey {
    Name,
    Description,
}

/// The in-progress add-permission form.
#[derive(Debug, Clone, Default)]
pub struct PermissionDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Default)]
pub struct PermissionManager {
    permissions: Vec<Permission>,
    state: LoadState,
    pub draft: PermissionDraft,
    pub sort: Option<SortConfig<PermissionSortKey>>,
    pub name_filter: String,
}

impl PermissionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_state(&self) -> LoadState {
        self.state
    }

    /// The full catalog, shared read-only with the role manager.
    pub fn catalog(&self) -> &[Permission] {
        &self.permissions
    }

    /// Load the catalog from the backend. On failure the manager is
    /// marked `Failed` and previously loaded data is kept as-is.
    pub async fn load(&mut self, api: &ApiClient) -> Result<(), ConsoleError> {
        match api.list_permissions().await {
            Ok(permissions) => {
                self.permissions = permissions;
                self.state = LoadState::Ready;
                Ok(())
            }
            Err(err) => {
                self.state = LoadState::Failed;
                tracing::error!(error = %err, "Failed to fetch permissions");
                Err(err)
            }
        }
    }

    /// Submit the draft. A blank name is a local no-op. Returns whether
    /// a permission was added.
    pub async fn submit_draft(&mut self, api: &ApiClient) -> Result<bool, ConsoleError> {
        if self.draft.name.trim().is_empty() {
            return Ok(false);
        }

        let new_permission = NewPermission {
            name: self.draft.name.clone(),
            description: self.draft.description.clone(),
        };

        match api.create_permission(&new_permission).await {
            Ok(permission) => {
                self.permissions.push(permission);
                self.draft = PermissionDraft::default();
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to add permission");
                Err(err)
            }
        }
    }

    /// Delete a permission on the backend, then locally.
    pub async fn delete(&mut self, api: &ApiClient, id: Uuid) -> Result<(), ConsoleError> {
        match api.delete_permission(id).await {
            Ok(()) => {
                self.permissions.retain(|permission| permission.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, permission_id = %id, "Failed to delete permission");
                Err(err)
            }
        }
    }

    /// Select a sort column; re-selecting the active one flips direction.
    pub fn sort_by(&mut self, key: PermissionSortKey) {
        self.sort = Some(SortConfig::toggle(self.sort, key));
    }

    /// Recompute the visible table from the full set.
    pub fn visible(&self) -> Vec<Permission> {
        let mut view: Vec<Permission> = self
            .permissions
            .iter()
            .filter(|permission| matches_substring(&permission.name, &self.name_filter))
            .cloned()
            .collect();

        if let Some(config) = self.sort {
            sort_view(&mut view, config.direction, |permission| match config.key {
                PermissionSortKey::Name => permission.name.clone(),
                PermissionSortKey::Description => permission.description.clone(),
            });
        }

        view
    }
}
