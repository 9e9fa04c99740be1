//! In-memory collection stores.
//!
//! Each resource lives in one process-lifetime list behind an async
//! RwLock: initialized empty, dropped on shutdown, never persisted.
//! Stores are injected into handlers through `AppState` rather than
//! held as module globals, so every mutation path is explicit.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Permission, Role, RoleIcon, User};

/// An in-memory ordered list of entities of one kind.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Arc<RwLock<Vec<T>>>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the full collection in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.items.read().await.clone()
    }

    pub async fn insert(&self, item: T) {
        self.items.write().await.push(item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }

    /// Remove all entries matching the predicate under one write lock;
    /// returns how many were removed.
    pub async fn remove_where<F>(&self, pred: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut items = self.items.write().await;
        let before = items.len();
        items.retain(|item| !pred(item));
        before - items.len()
    }

    /// Apply a mutation to every entry under one write lock.
    pub async fn for_each_mut<F>(&self, mut f: F)
    where
        F: FnMut(&mut T),
    {
        let mut items = self.items.write().await;
        for item in items.iter_mut() {
            f(item);
        }
    }
}

/// The three resource collections, grouped for injection into handlers.
#[derive(Debug, Clone, Default)]
pub struct Stores {
    pub users: Collection<User>,
    pub roles: Collection<Role>,
    pub permissions: Collection<Permission>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the starter catalog a fresh install of the dashboard shows:
    /// four permissions and the Admin/User roles wired to them. Skipped
    /// when either collection already holds data.
    pub async fn seed_demo_data(&self) {
        if !self.permissions.is_empty().await || !self.roles.is_empty().await {
            return;
        }

        let read = Permission::new("Read", "Allows reading data");
        let write = Permission::new("Write", "Allows writing data");
        let delete = Permission::new("Delete", "Allows deleting data");
        let approve = Permission::new("Approve", "Allows approving actions");

        let admin = Role::new(
            "Admin".to_string(),
            vec![read.id, write.id, delete.id],
            RoleIcon::Shield,
        );
        let user = Role::new("User".to_string(), vec![read.id], RoleIcon::User);

        for permission in [read, write, delete, approve] {
            self.permissions.insert(permission).await;
        }
        self.roles.insert(admin).await;
        self.roles.insert(user).await;

        tracing::info!(
            permissions = self.permissions.len().await,
            roles = self.roles.len().await,
            "Seeded demo catalog"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserStatus;

    #[tokio::test]
    async fn remove_where_reports_removed_count() {
        let users = Collection::new();
        let ann = User::new(
            "Ann".into(),
            "ann@x.com".into(),
            "Admin".into(),
            UserStatus::Active,
        );
        let bob = User::new(
            "Bob".into(),
            "bob@x.com".into(),
            "User".into(),
            UserStatus::Inactive,
        );
        users.insert(ann.clone()).await;
        users.insert(bob).await;

        assert_eq!(users.remove_where(|u| u.id == ann.id).await, 1);
        assert_eq!(users.remove_where(|u| u.id == ann.id).await, 0);
        assert_eq!(users.len().await, 1);
    }

    #[tokio::test]
    async fn seed_is_idempotent() {
        let stores = Stores::new();
        stores.seed_demo_data().await;
        stores.seed_demo_data().await;

        assert_eq!(stores.permissions.len().await, 4);
        assert_eq!(stores.roles.len().await, 2);
    }

    #[tokio::test]
    async fn seeded_roles_reference_seeded_permission_ids() {
        let stores = Stores::new();
        stores.seed_demo_data().await;

        let catalog = stores.permissions.list().await;
        for role in stores.roles.list().await {
            for id in &role.permissions {
                assert!(catalog.iter().any(|p| p.id == *id));
            }
        }
    }
}
