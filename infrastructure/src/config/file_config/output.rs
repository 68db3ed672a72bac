//! `[output]`: how results are printed

use ideator_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Printing preferences; `--output` and `-q` on the command line win
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full`, `summary` or `json`; unset falls back to `summary`
    pub format: Option<OutputFormat>,
    /// ANSI colors in console output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
