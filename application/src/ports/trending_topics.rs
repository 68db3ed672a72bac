//! Trending topics port
//!
//! Source of short "what is hot right now" titles attached to a branding
//! record as external signals. Strictly best-effort.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TrendsError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Feed returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed feed: {0}")]
    InvalidResponse(String),
}

#[async_trait]
pub trait TrendingTopics: Send + Sync {
    /// Up to `limit` titles, most relevant first
    async fn top_titles(&self, limit: usize) -> Result<Vec<String>, TrendsError>;
}

/// No-op source for offline runs and tests
pub struct NoTrendingTopics;

#[async_trait]
impl TrendingTopics for NoTrendingTopics {
    async fn top_titles(&self, _limit: usize) -> Result<Vec<String>, TrendsError> {
        Ok(Vec::new())
    }
}
