//! Error types for panel store operations.
//!
//! The two domain conditions (duplicate username, protected account) get
//! their own variants so callers can match on them; everything else is a
//! storage or serialization failure surfaced from the backend.

use thiserror::Error;

/// Result type alias for panel store operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Core error type for panel store operations.
#[derive(Debug, Error)]
pub enum PanelError {
    /// A user with this username already exists
    #[error("Username \"{0}\" already exists")]
    DuplicateUsername(String),

    /// A user with this id already exists
    #[error("User id \"{0}\" already exists")]
    DuplicateId(String),

    /// The bootstrap admin account cannot be deleted
    #[error("Account \"{0}\" is protected and cannot be deleted")]
    ProtectedAccount(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Invalid caller input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<std::io::Error> for PanelError {
    fn from(err: std::io::Error) -> Self {
        PanelError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for PanelError {
    fn from(err: serde_json::Error) -> Self {
        PanelError::Serialization(err.to_string())
    }
}

impl From<rusqlite::Error> for PanelError {
    fn from(err: rusqlite::Error) -> Self {
        PanelError::Storage(format!("SQLite: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_messages_name_the_subject() {
        let err = PanelError::DuplicateUsername("alice".to_string());
        assert_eq!(err.to_string(), "Username \"alice\" already exists");

        let err = PanelError::ProtectedAccount("admin-001".to_string());
        assert!(err.to_string().contains("admin-001"));
    }

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: PanelError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, PanelError::Serialization(_)));
    }
}
