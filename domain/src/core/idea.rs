//! Project idea value object

use super::error::DomainError;
use serde::{Deserialize, Serialize};

/// A free-text project description to brand (Value Object)
///
/// The only invariant enforced here is non-emptiness. Length bounds are a
/// caller policy and are checked by the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectIdea {
    content: String,
}

impl ProjectIdea {
    /// Create a new project idea, rejecting empty or whitespace-only text
    pub fn new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidIdea(
                "Project idea cannot be empty".to_string(),
            ));
        }
        Ok(Self { content })
    }

    /// Try to create a new project idea, returning None if invalid
    pub fn try_new(content: impl Into<String>) -> Option<Self> {
        Self::new(content).ok()
    }

    /// Get the idea text
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Lower-cased copy of the idea text, used for keyword matching
    pub fn lowercase(&self) -> String {
        self.content.to_lowercase()
    }

    /// Length of the idea in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Consume and return the inner content
    pub fn into_content(self) -> String {
        self.content
    }
}

impl std::fmt::Display for ProjectIdea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}

impl TryFrom<String> for ProjectIdea {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        ProjectIdea::new(s)
    }
}

impl TryFrom<&str> for ProjectIdea {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        ProjectIdea::new(s)
    }
}

impl From<ProjectIdea> for String {
    fn from(idea: ProjectIdea) -> Self {
        idea.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idea_creation() {
        let idea = ProjectIdea::new("A lending protocol").unwrap();
        assert_eq!(idea.content(), "A lending protocol");
        assert_eq!(idea.lowercase(), "a lending protocol");
    }

    #[test]
    fn test_empty_idea_rejected() {
        let err = ProjectIdea::new("").unwrap_err();
        assert!(err.is_input_error());
        assert!(ProjectIdea::try_new("   \n\t").is_none());
    }

    #[test]
    fn test_char_len_counts_characters() {
        let idea = ProjectIdea::new("café").unwrap();
        assert_eq!(idea.char_len(), 4);
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        let ok: ProjectIdea = serde_json::from_str("\"NFT art\"").unwrap();
        assert_eq!(ok.content(), "NFT art");
        assert!(serde_json::from_str::<ProjectIdea>("\"  \"").is_err());
    }
}
