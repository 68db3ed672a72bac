//! Generation parameters: use case behavior control.
//!
//! [`GenerationParams`] groups the static knobs used by
//! [`GenerateBrandingUseCase`](crate::use_cases::generate_branding::GenerateBrandingUseCase)
//! and the lookup use cases. Built from the file config by the CLI.

use ideator_domain::DEFAULT_CONFIDENCE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default minimum idea length in characters
pub const DEFAULT_MIN_IDEA_LEN: usize = 10;
/// Default maximum idea length in characters
pub const DEFAULT_MAX_IDEA_LEN: usize = 5000;
/// Default number of trending titles attached to a record
pub const DEFAULT_TRENDING_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub min_idea_len: usize,
    pub max_idea_len: usize,
    /// Confidence stamped on every record
    pub confidence: f64,
    /// Upper bound for one registry call
    pub registry_timeout: Duration,
    /// Upper bound for one trending-feed call
    pub trends_timeout: Duration,
    pub trending_limit: usize,
    pub trends_enabled: bool,
    /// Fixed seed for reproducible catalog draws
    pub seed: Option<u64>,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            min_idea_len: DEFAULT_MIN_IDEA_LEN,
            max_idea_len: DEFAULT_MAX_IDEA_LEN,
            confidence: DEFAULT_CONFIDENCE,
            registry_timeout: Duration::from_secs(5),
            trends_timeout: Duration::from_secs(5),
            trending_limit: DEFAULT_TRENDING_LIMIT,
            trends_enabled: true,
            seed: None,
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_idea_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_idea_len = min;
        self.max_idea_len = max;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_registry_timeout(mut self, timeout: Duration) -> Self {
        self.registry_timeout = timeout;
        self
    }

    pub fn with_trends_timeout(mut self, timeout: Duration) -> Self {
        self.trends_timeout = timeout;
        self
    }

    pub fn with_trending_limit(mut self, limit: usize) -> Self {
        self.trending_limit = limit;
        self
    }

    pub fn with_trends_enabled(mut self, enabled: bool) -> Self {
        self.trends_enabled = enabled;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }
}
