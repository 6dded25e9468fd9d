//! Storage trait for the user registry

use crate::error::Result;
use crate::types::{User, UserUpdate};
use async_trait::async_trait;

/// Registry storage operations
///
/// This trait abstracts the user collection so the in-memory registry can
/// be swapped for a persistent backend without touching the HTTP layer.
/// Implementations must be safe to share across request handlers.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get all users in insertion order
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get the user with the given id
    ///
    /// Fails with [`RosterError::UserNotFound`](crate::RosterError) if no
    /// user matches.
    async fn get_user(&self, id: i64) -> Result<User>;

    /// Append a new user to the collection
    ///
    /// Fails with [`RosterError::DuplicateUser`](crate::RosterError) if the
    /// id is already taken. Field values are not validated.
    async fn create_user(&self, user: User) -> Result<User>;

    /// Apply a partial update to the user with the given id
    ///
    /// Only fields present in `update` are overwritten. Returns the mutated
    /// record.
    async fn update_user(&self, id: i64, update: UserUpdate) -> Result<User>;

    /// Remove the user with the given id
    ///
    /// Returns the removed record.
    async fn delete_user(&self, id: i64) -> Result<User>;
}
