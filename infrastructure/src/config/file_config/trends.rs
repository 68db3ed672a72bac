//! Trending feed configuration from TOML (`[trends]` section)

use crate::trends::DEFAULT_TRENDS_URL;
use ideator_application::config::generation_params::DEFAULT_TRENDING_LIMIT;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTrendsConfig {
    /// Set to false to skip the feed entirely
    pub enabled: bool,
    pub url: String,
    pub timeout_seconds: u64,
    /// Titles attached per record
    pub limit: usize,
}

impl Default for FileTrendsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            url: DEFAULT_TRENDS_URL.to_string(),
            timeout_seconds: 5,
            limit: DEFAULT_TRENDING_LIMIT,
        }
    }
}
