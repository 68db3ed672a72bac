//! Token registry port
//!
//! Defines the interface for searching an external token registry
//! (CoinGecko in production).

use async_trait::async_trait;
use ideator_domain::RegistryEntry;
use thiserror::Error;

/// Errors that can occur while querying the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Registry returned HTTP {0}")]
    HttpStatus(u16),

    #[error("Malformed registry response: {0}")]
    InvalidResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Registry unavailable: {0}")]
    Unavailable(String),
}

/// Searchable token registry
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait TokenRegistry: Send + Sync {
    /// Search tokens by free-text query (name or symbol)
    async fn search(&self, query: &str) -> Result<Vec<RegistryEntry>, RegistryError>;
}

/// Registry used with `--offline`: every search fails, so every verdict
/// built on it is degraded.
pub struct OfflineRegistry;

#[async_trait]
impl TokenRegistry for OfflineRegistry {
    async fn search(&self, _query: &str) -> Result<Vec<RegistryEntry>, RegistryError> {
        Err(RegistryError::Unavailable("offline mode".to_string()))
    }
}
