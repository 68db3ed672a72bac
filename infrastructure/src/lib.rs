//! Infrastructure layer for token-ideator
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
mod http;
pub mod logging;
pub mod registry;
pub mod trends;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGenerationConfig, FileLoggingConfig, FileOutputConfig,
    FileRegistryConfig, FileTrendsConfig,
};
pub use http::USER_AGENT;
pub use logging::JsonlGenerationLogger;
pub use registry::{CoinGeckoRegistry, DEFAULT_COINGECKO_URL};
pub use trends::{DEFAULT_TRENDS_URL, RedditTrendingTopics};
