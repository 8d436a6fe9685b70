//! Error types for the mangashelf CLI
//!
//! The search engine itself is total and never fails; errors only arise at
//! the edges (arguments, library file loading).

use std::fmt;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    InvalidInput(String),
    LibraryLoad(String),
    Parse(String),
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AppError::LibraryLoad(msg) => write!(f, "Library load failed: {}", msg),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl AppError {
    /// Stable code for machine-readable output
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::LibraryLoad(_) => "library_load_failed",
            AppError::Parse(_) => "parse_error",
            AppError::Internal(_) => "internal_error",
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::LibraryLoad(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

/// Reject absurdly long queries before they reach the scoring loop. Empty
/// queries are fine; the engine treats them as a pass-through.
pub fn validate_query(query: &str) -> Result<(), AppError> {
    if query.chars().count() > 500 {
        return Err(AppError::InvalidInput(
            "Query too long, maximum 500 characters".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = AppError::InvalidInput("query too long".to_string());
        assert_eq!(err.to_string(), "Invalid input: query too long");

        let err = AppError::LibraryLoad("no such file".to_string());
        assert_eq!(err.to_string(), "Library load failed: no such file");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::InvalidInput(String::new()).error_code(),
            "invalid_input"
        );
        assert_eq!(
            AppError::LibraryLoad(String::new()).error_code(),
            "library_load_failed"
        );
        assert_eq!(AppError::Parse(String::new()).error_code(), "parse_error");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "internal_error"
        );
    }

    #[test]
    fn test_validate_query() {
        assert!(validate_query("").is_ok());
        assert!(validate_query("naruto").is_ok());
        assert!(validate_query(&"x".repeat(500)).is_ok());
        assert!(validate_query(&"x".repeat(501)).is_err());
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: AppError = json_err.into();
        assert_eq!(err.error_code(), "parse_error");
    }
}
