//! Generation configuration from TOML (`[generation]` section)

use ideator_application::config::generation_params::{DEFAULT_MAX_IDEA_LEN, DEFAULT_MIN_IDEA_LEN};
use ideator_domain::DEFAULT_CONFIDENCE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    pub min_idea_length: usize,
    pub max_idea_length: usize,
    pub confidence: f64,
    /// Fixed seed; `--seed` takes precedence
    pub seed: Option<u64>,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            min_idea_length: DEFAULT_MIN_IDEA_LEN,
            max_idea_length: DEFAULT_MAX_IDEA_LEN,
            confidence: DEFAULT_CONFIDENCE,
            seed: None,
        }
    }
}
