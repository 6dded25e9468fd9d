//! In-memory user registry
//!
//! The registry keeps users in a `Vec` in insertion order. Lookups scan
//! front to back and take the first match; ids are unique, so that is the
//! only match. Every read-check-mutate sequence runs under a single lock
//! guard, so concurrent writers cannot violate the id uniqueness invariant.

use async_trait::async_trait;
use chrono::NaiveDate;
use roster_core::{Result, RosterError, User, UserStore, UserUpdate};
use tokio::sync::RwLock;

/// Ordered in-memory user collection guarded by a read-write lock
///
/// State lives only for the lifetime of the process; there is no
/// persistence.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    users: RwLock<Vec<User>>,
}

impl MemoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry pre-populated with the given users, in order
    ///
    /// Callers are responsible for passing unique ids; duplicates in the
    /// initial set are not checked here.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a registry holding the two startup seed records
    pub fn seeded() -> Self {
        Self::with_users(vec![
            User {
                id: 1,
                username: "user1".to_string(),
                wallet: 100.0,
                birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid seed date"),
            },
            User {
                id: 2,
                username: "user2".to_string(),
                wallet: 200.0,
                birthdate: NaiveDate::from_ymd_opt(1995, 5, 15).expect("valid seed date"),
            },
        ])
    }

    /// Number of users currently in the registry
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether the registry holds no users
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryRegistry {
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(self.users.read().await.clone())
    }

    async fn get_user(&self, id: i64) -> Result<User> {
        let users = self.users.read().await;
        users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| RosterError::UserNotFound(id))
    }

    async fn create_user(&self, user: User) -> Result<User> {
        // Duplicate check and append share one write guard
        let mut users = self.users.write().await;
        if users.iter().any(|existing| existing.id == user.id) {
            return Err(RosterError::DuplicateUser(user.id));
        }
        users.push(user.clone());
        Ok(user)
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User> {
        let mut users = self.users.write().await;
        let user = users
            .iter_mut()
            .find(|user| user.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id))?;
        user.apply(update);
        Ok(user.clone())
    }

    async fn delete_user(&self, id: i64) -> Result<User> {
        let mut users = self.users.write().await;
        let position = users
            .iter()
            .position(|user| user.id == id)
            .ok_or_else(|| RosterError::UserNotFound(id))?;
        Ok(users.remove(position))
    }
}
