//! Configuration file loading for token-ideator
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IDEATOR_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./ideator.toml` or `./.ideator.toml`
//! 4. Global: `$XDG_CONFIG_HOME/token-ideator/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileGenerationConfig, FileLoggingConfig, FileOutputConfig, FileRegistryConfig,
    FileTrendsConfig,
};
pub use loader::ConfigLoader;
