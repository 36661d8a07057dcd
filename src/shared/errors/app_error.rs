use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::InvalidInput(format!("Invalid identifier: {}", err))
    }
}

impl AppError {
    /// Errors raised while talking to the document store, as opposed to
    /// rejected input.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, AppError::DatabaseError(_))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_json_error_converts_to_serialization_error() {
        let err = serde_json::from_str::<u32>("not a number").unwrap_err();
        let app_err: AppError = err.into();

        assert!(matches!(app_err, AppError::SerializationError(_)));
        assert!(!app_err.is_store_failure());
    }

    #[test]
    fn test_error_serializes_with_type_tag() {
        let err = AppError::InvalidInput("bad cat".to_string());
        let json = serde_json::to_value(&err).unwrap();

        assert_eq!(json["type"], "InvalidInput");
        assert_eq!(json["message"], "bad cat");
    }
}
