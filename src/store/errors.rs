//! Storage gateway errors.

use thiserror::Error;

/// Result type for gateway operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage gateway errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Could not reach the store at startup. Fatal; the process does not
    /// retry.
    #[error("failed to connect to store: {0}")]
    Connect(String),

    /// The store rejected a write (constraint or format violation).
    #[error("{0}")]
    Invalid(String),

    /// Any other storage failure.
    #[error("{0}")]
    Backend(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // SQLSTATE class 22 (data exception) and 23 (integrity
            // violation) mean the store refused the supplied values.
            sqlx::Error::Database(db) => match db.code() {
                Some(code) if code.starts_with("22") || code.starts_with("23") => {
                    StoreError::Invalid(db.message().to_string())
                }
                _ => StoreError::Backend(err.to_string()),
            },
            _ => StoreError::Backend(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_message() {
        let err = StoreError::Backend("connection reset".to_string());
        assert_eq!(err.to_string(), "connection reset");

        let err = StoreError::Connect("refused".to_string());
        assert_eq!(err.to_string(), "failed to connect to store: refused");
    }
}
