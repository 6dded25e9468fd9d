//! Roster Server Library
//!
//! In-memory user registry exposed over HTTP.
//!
//! This library exposes the server components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
