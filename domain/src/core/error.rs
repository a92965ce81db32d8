//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// All variants are local and synchronous: the caller has to supply
/// different input, retrying the same call yields the same error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("No analyzable user messages found in conversation")]
    NoAnalyzableContent,

    #[error("Invalid sentiment thresholds: {0}")]
    InvalidThresholds(String),
}

impl DomainError {
    /// Check if this error was caused by the content handed to the engine
    /// (as opposed to a configuration problem)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidInput(_) | DomainError::NoAnalyzableContent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_content_error_display() {
        let error = DomainError::NoAnalyzableContent;
        assert_eq!(
            error.to_string(),
            "No analyzable user messages found in conversation"
        );
    }

    #[test]
    fn test_invalid_input_display() {
        let error = DomainError::InvalidInput("text cannot be empty".to_string());
        assert_eq!(error.to_string(), "Invalid input: text cannot be empty");
    }

    #[test]
    fn test_is_input_error_check() {
        assert!(DomainError::NoAnalyzableContent.is_input_error());
        assert!(DomainError::InvalidInput("x".to_string()).is_input_error());
        assert!(!DomainError::InvalidThresholds("x".to_string()).is_input_error());
    }
}
