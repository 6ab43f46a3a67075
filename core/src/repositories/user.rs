//! User store trait and in-memory implementation

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Store contract for [`User`] entities.
///
/// Users are never updated or deleted; the collection only grows for the
/// lifetime of the store.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, assigning the next sequential id and the
    /// creation timestamp. Id assignment and insert are one atomic step.
    async fn insert(&self, new: NewUser) -> Result<User, DomainError>;

    /// Exact-match lookup by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Lookup by sequential id
    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}

/// Process-lifetime in-memory user store
#[derive(Clone, Default)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn insert(&self, new: NewUser) -> Result<User, DomainError> {
        // Single write guard covers id assignment and push, so concurrent
        // creates cannot receive the same id.
        let mut users = self.users.write().await;
        let user = User {
            id: users.len() as u64 + 1,
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            created_at: Utc::now(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.users.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "digest".to_string(),
            name: String::new(),
        }
    }

    #[tokio::test]
    async fn insert_assigns_sequential_ids() {
        let store = InMemoryUserStore::new();
        for n in 1..=5u64 {
            let user = store.insert(new_user(&format!("u{}@b.com", n))).await.unwrap();
            assert_eq!(user.id, n);
        }
        assert_eq!(store.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn concurrent_inserts_never_share_an_id() {
        let store = InMemoryUserStore::new();
        let mut handles = Vec::new();
        for n in 0..20 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.insert(new_user(&format!("c{}@b.com", n))).await.unwrap().id
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=20).collect::<Vec<u64>>());
    }

    #[tokio::test]
    async fn find_by_email_is_exact_match() {
        let store = InMemoryUserStore::new();
        store.insert(new_user("a@b.com")).await.unwrap();

        assert!(store.find_by_email("a@b.com").await.unwrap().is_some());
        assert!(store.find_by_email("A@B.COM").await.unwrap().is_none());
        assert!(store.find_by_email("other@b.com").await.unwrap().is_none());
    }
}
