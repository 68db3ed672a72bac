//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generation;
mod logging;
mod output;
mod registry;
mod trends;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use registry::FileRegistryConfig;
pub use trends::FileTrendsConfig;

use ideator_application::GenerationParams;
use ideator_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Token registry (uniqueness checks, metadata)
    pub registry: FileRegistryConfig,
    /// Trending feed used for external signals
    pub trends: FileTrendsConfig,
    /// Idea bounds, confidence, seed
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Generation log
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks zero timeouts, inverted idea bounds, confidence outside
    /// `[0, 1]` and non-HTTP URLs.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Timeouts
        for (field, seconds) in [
            ("registry.timeout_seconds", self.registry.timeout_seconds),
            ("trends.timeout_seconds", self.trends.timeout_seconds),
        ] {
            if seconds == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroTimeout {
                        field: field.to_string(),
                    },
                    format!("{} cannot be 0", field),
                ));
            }
        }

        // 2. Idea bounds
        if self.generation.min_idea_length > self.generation.max_idea_length {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvertedBounds {
                    min_field: "generation.min_idea_length".to_string(),
                    max_field: "generation.max_idea_length".to_string(),
                },
                format!(
                    "generation.min_idea_length ({}) exceeds generation.max_idea_length ({})",
                    self.generation.min_idea_length, self.generation.max_idea_length
                ),
            ));
        }

        // 3. Confidence (clamped when applied)
        if !(0.0..=1.0).contains(&self.generation.confidence) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "generation.confidence".to_string(),
                    value: self.generation.confidence.to_string(),
                },
                format!(
                    "generation.confidence {} is outside [0, 1] and will be clamped",
                    self.generation.confidence
                ),
            ));
        }

        // 4. URLs
        for (field, url) in [
            ("registry.base_url", &self.registry.base_url),
            ("trends.url", &self.trends.url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidUrl {
                        field: field.to_string(),
                        value: url.clone(),
                    },
                    format!("{} must be an http(s) URL, got '{}'", field, url),
                ));
            }
        }

        issues
    }

    /// Build use case parameters from the loaded file values.
    pub fn generation_params(&self) -> GenerationParams {
        GenerationParams::default()
            .with_idea_bounds(
                self.generation.min_idea_length,
                self.generation.max_idea_length,
            )
            .with_confidence(self.generation.confidence)
            .with_registry_timeout(Duration::from_secs(self.registry.timeout_seconds))
            .with_trends_timeout(Duration::from_secs(self.trends.timeout_seconds))
            .with_trending_limit(self.trends.limit)
            .with_trends_enabled(self.trends.enabled)
            .with_seed(self.generation.seed)
    }
}
