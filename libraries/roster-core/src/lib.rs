//! Roster Core
//!
//! Domain types, traits, and error handling for the Roster user registry.
//!
//! This crate provides the foundational building blocks shared by the
//! storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User` and its partial-update shape `UserUpdate`
//! - **Store Trait**: `UserStore`, the seam between handlers and storage
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_core::{User, UserUpdate};
//!
//! let mut user = User {
//!     id: 1,
//!     username: "alice".to_string(),
//!     wallet: 25.0,
//!     birthdate: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
//! };
//!
//! // Overwrite only the wallet, leaving the other fields untouched
//! user.apply(UserUpdate {
//!     wallet: Some(40.0),
//!     ..UserUpdate::default()
//! });
//! assert_eq!(user.wallet, 40.0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RosterError};
pub use store::UserStore;
pub use types::{User, UserUpdate};
