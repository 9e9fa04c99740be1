//! User tab state: the backend-synchronized collection plus the local
//! add-user draft and sort/filter view.

use uuid::Uuid;

use crate::api::{ApiClient, ConsoleError, NewUser};
use crate::models::{User, UserStatus};
use crate::view::{matches_substring, sort_view, SortConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSortKey {
    Name,
    Email,
    Role,
    Status,
}

/// Filter values for the user table. A `role` or `status` of `None`
/// means "all".
#[derive(Debug, Clone, Default)]
pub struct UserFilter {
    pub name: String,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
}

/// The in-progress add-user form.
#[derive(Debug, Clone, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: UserStatus,
}

#[derive(Debug, Default)]
pub struct UserManager {
    users: Vec<User>,
    pub draft: UserDraft,
    pub sort: Option<SortConfig<UserSortKey>>,
    pub filter: UserFilter,
}

impl UserManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full fetched collection, unsorted and unfiltered.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Replace local state with the backend's current collection.
    pub async fn refresh(&mut self, api: &ApiClient) -> Result<(), ConsoleError> {
        match api.list_users().await {
            Ok(users) => {
                self.users = users;
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to fetch users");
                Err(err)
            }
        }
    }

    /// Submit the draft. A blank name, email, or role is a local no-op
    /// (the form guard); otherwise the backend's echoed record is
    /// appended and the draft reset. Returns whether a user was added.
    pub async fn submit_draft(&mut self, api: &ApiClient) -> Result<bool, ConsoleError> {
        if self.draft.name.trim().is_empty()
            || self.draft.email.trim().is_empty()
            || self.draft.role.trim().is_empty()
        {
            return Ok(false);
        }

        let new_user = NewUser {
            name: self.draft.name.clone(),
            email: self.draft.email.clone(),
            role: self.draft.role.clone(),
            status: self.draft.status,
        };

        match api.create_user(&new_user).await {
            Ok(user) => {
                self.users.push(user);
                self.draft = UserDraft::default();
                Ok(true)
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to add user");
                Err(err)
            }
        }
    }

    /// Delete a user on the backend, then locally.
    pub async fn delete(&mut self, api: &ApiClient, id: Uuid) -> Result<(), ConsoleError> {
        match api.delete_user(id).await {
            Ok(()) => {
                self.users.retain(|user| user.id != id);
                Ok(())
            }
            Err(err) => {
                tracing::error!(error = %err, user_id = %id, "Failed to delete user");
                Err(err)
            }
        }
    }

    /// Select a sort column; re-selecting the active one flips direction.
    pub fn sort_by(&mut self, key: UserSortKey) {
        self.sort = Some(SortConfig::toggle(self.sort, key));
    }

    /// Recompute the visible table from the full set.
    pub fn visible(&self) -> Vec<User> {
        let mut view: Vec<User> = self
            .users
            .iter()
            .filter(|user| {
                matches_substring(&user.name, &self.filter.name)
                    && self
                        .filter
                        .role
                        .as_deref()
                        .map_or(true, |role| user.role == role)
                    && self
                        .filter
                        .status
                        .map_or(true, |status| user.status == status)
            })
            .cloned()
            .collect();

        if let Some(config) = self.sort {
            sort_view(&mut view, config.direction, |user| match config.key {
                UserSortKey::Name => user.name.clone(),
                UserSortKey::Email => user.email.clone(),
                UserSortKey::Role => user.role.clone(),
                UserSortKey::Status => user.status.as_str().to_string(),
            });
        }

        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn user(name: &str, email: &str, role: &str, status: UserStatus) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            role: role.to_string(),
            status,
            created_utc: Utc::now(),
        }
    }

    fn manager_with_users() -> UserManager {
        let mut manager = UserManager::new();
        manager.users = vec![
            user("Alice", "alice@x.com", "Admin", UserStatus::Active),
            user("Bob", "bob@x.com", "User", UserStatus::Inactive),
            user("Salima", "salima@x.com", "Admin", UserStatus::Active),
        ];
        manager
    }

    #[test]
    fn name_filter_is_case_insensitive_and_preserves_order() {
        let mut manager = manager_with_users();
        manager.filter.name = "ali".to_string();

        let visible = manager.visible();
        let names: Vec<&str> = visible.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Salima"]);
    }

    #[test]
    fn role_and_status_filters_compose() {
        let mut manager = manager_with_users();
        manager.filter.role = Some("Admin".to_string());
        manager.filter.status = Some(UserStatus::Active);

        assert_eq!(manager.visible().len(), 2);

        manager.filter.status = Some(UserStatus::Inactive);
        assert!(manager.visible().is_empty());
    }

    #[test]
    fn clearing_the_filter_restores_the_full_view() {
        let mut manager = manager_with_users();
        manager.filter.name = "nobody".to_string();
        assert!(manager.visible().is_empty());

        manager.filter = UserFilter::default();
        assert_eq!(manager.visible().len(), 3);
    }

    #[test]
    fn sorting_twice_toggles_direction() {
        let mut manager = manager_with_users();

        manager.sort_by(UserSortKey::Name);
        let ascending: Vec<String> = manager.visible().iter().map(|u| u.name.clone()).collect();
        assert_eq!(ascending, vec!["Alice", "Bob", "Salima"]);

        manager.sort_by(UserSortKey::Name);
        let descending: Vec<String> = manager.visible().iter().map(|u| u.name.clone()).collect();
        assert_eq!(descending, vec!["Salima", "Bob", "Alice"]);
    }

    #[test]
    fn sorting_never_mutates_the_full_collection() {
        let mut manager = manager_with_users();
        manager.sort_by(UserSortKey::Email);
        manager.sort_by(UserSortKey::Email);

        let names: Vec<&str> = manager.users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Salima"]);
    }

    #[tokio::test]
    async fn blank_draft_is_a_local_no_op() {
        // Port 9 is discard; nothing should ever be sent anyway.
        let api = ApiClient::new("http://127.0.0.1:9");
        let mut manager = manager_with_users();
        manager.draft.name = "   ".to_string();
        manager.draft.email = "ann@x.com".to_string();
        manager.draft.role = "Admin".to_string();

        let added = manager
            .submit_draft(&api)
            .await
            .expect("blank draft must not hit the network");
        assert!(!added);
        assert_eq!(manager.users().len(), 3);
    }
}
