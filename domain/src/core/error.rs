//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid project idea: {0}")]
    InvalidIdea(String),

    #[error("Invalid token data: {0}")]
    InvalidTokenData(String),

    /// A fallback chain ran out of strategies. The chains are built to be
    /// total, so reaching this is a defect rather than a runtime condition.
    #[error("Synthesis exhausted: {0}")]
    SynthesisExhausted(String),
}

impl DomainError {
    /// Whether this error was caused by caller input (as opposed to a defect)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidIdea(_) | DomainError::InvalidTokenData(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_idea_display() {
        let error = DomainError::InvalidIdea("Project idea cannot be empty".to_string());
        assert_eq!(
            error.to_string(),
            "Invalid project idea: Project idea cannot be empty"
        );
    }

    #[test]
    fn test_is_input_error_check() {
        assert!(DomainError::InvalidIdea("x".to_string()).is_input_error());
        assert!(DomainError::InvalidTokenData("x".to_string()).is_input_error());
        assert!(!DomainError::SynthesisExhausted("symbol".to_string()).is_input_error());
    }
}
