//! Registry configuration from TOML (`[registry]` section)

use crate::registry::DEFAULT_COINGECKO_URL;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    /// API root; `/search` is appended
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileRegistryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_COINGECKO_URL.to_string(),
            timeout_seconds: 5,
        }
    }
}
