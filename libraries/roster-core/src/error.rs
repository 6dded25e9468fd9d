/// Core error types for Roster
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Core error type for the user registry
///
/// The registry has exactly two failure modes: a referenced user id does
/// not exist, or a create names an id that is already taken.
#[derive(Error, Debug)]
pub enum RosterError {
    /// Referenced user id does not exist
    #[error("User not found: {0}")]
    UserNotFound(i64),

    /// Create with an id that is already present
    #[error("User ID already exists: {0}")]
    DuplicateUser(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_carries_the_missing_id() {
        let err = RosterError::UserNotFound(42);
        assert_eq!(err.to_string(), "User not found: 42");
    }

    #[test]
    fn duplicate_carries_the_taken_id() {
        let err = RosterError::DuplicateUser(1);
        assert_eq!(err.to_string(), "User ID already exists: 1");
    }
}
