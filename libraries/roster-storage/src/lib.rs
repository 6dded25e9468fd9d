//! Roster Storage
//!
//! In-memory storage layer for the Roster user registry.
//!
//! The crate provides [`MemoryRegistry`], an ordered user collection
//! guarded by a read-write lock. It implements the `UserStore` trait from
//! `roster-core`, so the HTTP layer never depends on the storage strategy
//! directly and a persistent backend can be swapped in later.
//!
//! # Example
//!
//! ```rust
//! use roster_core::UserStore;
//! use roster_storage::MemoryRegistry;
//!
//! # async fn example() -> roster_core::Result<()> {
//! // Registry holding the two startup seed records
//! let registry = MemoryRegistry::seeded();
//!
//! let users = registry.list_users().await?;
//! assert_eq!(users.len(), 2);
//! # Ok(())
//! # }
//! ```

pub mod registry;

pub use registry::MemoryRegistry;
