//! Role tab state: the role collection, the add-role draft with its
//! permission checklist, and icon glyph resolution.

use uuid::Uuid;

use crate::api::{ApiClient, ConsoleError, NewRole};
use crate::models::{Permission, Role, RoleIcon};

/// The in-progress add-role form. Permissions are ticked by id against
/// the catalog shared from the permission manager.
#[derive(Debug, Clone, Default)]
pub struct RoleDraft {
    pub name: String,
    pub permissions: Vec<Uuid>,
    pub icon: RoleIcon,
}

impl RoleDraft {
    /// Toggle a permission in the draft: added when absent, removed
    /// when present. Applying it twice restores the original membership.
    pub fn toggle_permission(&mut self, id: Uuid) {
        if let Some(position) = self.permissions.iter().position(|p| *p == id) {
            self.permissions.remove(position);
        } else {
            self.permissions.push(id);
        }
    }
}

#[derive(Debug, Default)]
pub struct RoleManager {
    roles: Vec<Role>,
    pub draft: RoleDraft,
}

impl RoleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    /// Replace local state with the backend's current collection.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ConsoleError> {
        match api.list_roles().await {
            Ok(roles) => {
                self.roles = roles;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch roles");
                Err(err)
            }
        }
    }

    /// Submit the draft. A blank name is a local no-op. Returns whether
    /// a role was added.
    pub async fn submit_draft(&mut self, api: &ApiClient) -> Result<bool, ConsoleError> {
        if self.draft.name.trim().is_empty() {
            return Ok(false);
        }

        let new_role = NewRole {
            name: self.draft.name.clone(),
            permissions: self.draft.permissions.clone(),
            icon: self.draft.icon,
        };

        match api.create_role(&new_role).await {
            Ok(role) => {
                self.roles.push(role);
                self.draft = RoleDraft::default();
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to add role");
                Err(err)
            }
        }
    }

    /// Delete a role on the backend, then locally. The backend treats
    /// unknown ids as a no-op, so this never fails on a stale view.
    pub async fn delete(&mut self, api: &ApiClient, id: Uuid) -> Result<(), ConsoleError> {
        match api.delete_role(id).await {
            Ok(()) => {
                self.roles.retain(|role| role.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, role_id = %id, "Failed to delete role");
                Err(err)
            }
        }
    }

    /// Resolve a role's permission ids to display names against the
    /// shared catalog. Ids missing from the catalog are skipped.
    pub fn permission_names(role: &Role, catalog: &[Permission]) -> Vec<String> {
        role.permissions
            .iter()
            .filter_map(|id| {
                catalog
                    .iter()
                    .find(|permission| permission.id == *id)
                    .map(|permission| permission.name.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn toggle_permission_twice_round_trips_membership() {
        let read = Uuid::new_v4();
        let write = Uuid::new_v4();
        let mut draft = RoleDraft {
            name: "Editor".to_string(),
            permissions: vec![read],
            icon: RoleIcon::Key,
        };

        draft.toggle_permission(write);
        assert!(draft.permissions.contains(&read));
        assert!(draft.permissions.contains(&write));

        draft.toggle_permission(write);
        assert_eq!(draft.permissions, vec![read]);
    }

    #[test]
    fn permission_names_skip_dangling_ids() {
        let read = Permission {
            id: Uuid::new_v4(),
            name: "Read".to_string(),
            description: "Allows reading data".to_string(),
            created_utc: Utc::now(),
        };
        let role = Role {
            id: Uuid::new_v4(),
            name: "Reader".to_string(),
            permissions: vec![read.id, Uuid::new_v4()],
            icon: RoleIcon::User,
            created_utc: Utc::now(),
        };

        let names = RoleManager::permission_names(&role, &[read]);
        assert_eq!(names, vec!["Read"]);
    }

    #[test]
    fn unknown_icon_renders_the_default_glyph() {
        assert_eq!(RoleIcon::Unknown.glyph(), RoleIcon::User.glyph());
        assert_ne!(RoleIcon::Shield.glyph(), RoleIcon::User.glyph());
    }

    #[tokio::test]
    async fn blank_name_draft_is_a_local_no_op() {
        let api = ApiClient::new("http://127.0.0.1:9");
        let mut manager = RoleManager::new();
        manager.draft.name = "  ".to_string();

        let added = manager
            .submit_draft(&api)
            .await
            .expect("blank draft must not hit the network");
        assert!(!added);
        assert!(manager.roles().is_empty());
    }
}
