use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

#[cfg(test)]
use mockall::automock;

use crate::models::User;

/// Storage contract for users.
///
/// None of the operations can fail: a lookup that finds nothing is reported
/// as `None` / `false`, never as an error.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, assigning its id and creation time.
    async fn create_user(&self, user: User) -> User;
    /// All users in insertion order.
    async fn get_all_users(&self) -> Vec<User>;
    async fn get_user_by_id(&self, id: i32) -> Option<User>;
    /// Overwrite the mutable fields of the user with `id`.
    async fn update_user(&self, id: i32, changes: User) -> Option<User>;
    async fn delete_user(&self, id: i32) -> bool;
}

struct UserStore {
    users: Vec<User>,
    next_id: i32,
}

/// In-memory repository. The list and the id counter sit behind one lock,
/// held for the whole of each operation.
pub struct InMemoryUserRepository {
    store: Mutex<UserStore>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(UserStore {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, mut user: User) -> User {
        let mut store = self.store.lock().await;

        user.id = store.next_id;
        store.next_id += 1;
        user.created_at = Utc::now();

        store.users.push(user.clone());
        tracing::debug!("Stored user {} ({} total)", user.id, store.users.len());

        user
    }

    async fn get_all_users(&self) -> Vec<User> {
        let store = self.store.lock().await;
        store.users.clone()
    }

    async fn get_user_by_id(&self, id: i32) -> Option<User> {
        let store = self.store.lock().await;
        store.users.iter().find(|u| u.id == id).cloned()
    }

    async fn update_user(&self, id: i32, changes: User) -> Option<User> {
        let mut store = self.store.lock().await;

        let existing_user = store.users.iter_mut().find(|u| u.id == id)?;
        existing_user.apply_changes(&changes);

        Some(existing_user.clone())
    }

    async fn delete_user(&self, id: i32) -> bool {
        let mut store = self.store.lock().await;

        match store.users.iter().position(|u| u.id == id) {
            Some(index) => {
                store.users.remove(index);
                tracing::debug!("Removed user {}", id);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_user(username: &str) -> User {
        User::new(
            username.to_string(),
            format!("{}@example.com", username),
            None,
            None,
            None,
        )
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids_starting_at_one() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create_user(new_user("user1")).await;
        let second = repo.create_user(new_user("user2")).await;
        let third = repo.create_user(new_user("user3")).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(third.id, 3);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.create_user(new_user("user1")).await;
        assert!(repo.delete_user(first.id).await);

        let second = repo.create_user(new_user("user2")).await;
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn create_sets_creation_time() {
        let repo = InMemoryUserRepository::new();
        let before = Utc::now();

        let user = repo.create_user(new_user("user1")).await;

        assert!(user.created_at >= before);
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.get_all_users().await.is_empty());

        repo.create_user(new_user("user1")).await;
        repo.create_user(new_user("user2")).await;

        let users = repo.get_all_users().await;
        let names: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(names, vec!["user1", "user2"]);
    }

    #[tokio::test]
    async fn get_by_id_returns_none_for_unknown_id() {
        let repo = InMemoryUserRepository::new();
        repo.create_user(new_user("user1")).await;

        assert!(repo.get_user_by_id(1).await.is_some());
        assert!(repo.get_user_by_id(999).await.is_none());
    }

    #[tokio::test]
    async fn update_overwrites_fields_in_place() {
        let repo = InMemoryUserRepository::new();
        let created = repo.create_user(new_user("olduser")).await;

        let mut changes = new_user("updateduser");
        changes.first_name = Some("Updated".to_string());
        changes.last_name = Some("User".to_string());
        changes.is_active = false;

        let updated = repo.update_user(created.id, changes).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.username, "updateduser");
        assert!(!updated.is_active);

        let stored = repo.get_user_by_id(created.id).await.unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_leaves_collection_untouched() {
        let repo = InMemoryUserRepository::new();
        repo.create_user(new_user("user1")).await;

        assert!(repo.update_user(999, new_user("ghost")).await.is_none());

        let users = repo.get_all_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "user1");
    }

    #[tokio::test]
    async fn delete_reports_whether_user_existed() {
        let repo = InMemoryUserRepository::new();
        let user = repo.create_user(new_user("user1")).await;

        assert!(repo.delete_user(user.id).await);
        assert!(!repo.delete_user(user.id).await);
        assert!(repo.get_user_by_id(user.id).await.is_none());
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_ids() {
        let repo = Arc::new(InMemoryUserRepository::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.create_user(new_user(&format!("user{}", i))).await.id })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (1..=50).collect::<Vec<i32>>());
        assert_eq!(repo.get_all_users().await.len(), 50);
    }
}
