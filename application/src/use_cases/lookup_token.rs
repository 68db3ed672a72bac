//! Lookup Token use case
//!
//! Registry lookups keyed by ticker: metadata for a single ticker, and
//! available variants of a taken ticker.

use crate::ports::token_registry::TokenRegistry;
use crate::use_cases::shared::bounded_call;
use ideator_domain::{
    DomainError, SymbolSuggestion, TokenMetadata, symbol_variants, validate_symbol_query,
    validate_token_data,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// At most this many ticker variants are suggested
pub const MAX_SYMBOL_SUGGESTIONS: usize = 3;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Ticker variants offered for a taken ticker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolSuggestions {
    pub original_symbol: String,
    pub alternatives: Vec<SymbolSuggestion>,
}

pub struct LookupTokenUseCase {
    registry: Arc<dyn TokenRegistry>,
    timeout: Duration,
    cancellation_token: Option<CancellationToken>,
}

impl LookupTokenUseCase {
    pub fn new(registry: Arc<dyn TokenRegistry>, timeout: Duration) -> Self {
        Self {
            registry,
            timeout,
            cancellation_token: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Look up registry metadata for `symbol`.
    ///
    /// Registry failures are reported inside [`TokenMetadata::error`], never
    /// as `Err`.
    pub async fn metadata(&self, symbol: &str) -> Result<TokenMetadata, LookupError> {
        validate_symbol_query(symbol)?;
        Ok(self.fetch(symbol).await)
    }

    /// Suggest up to [`MAX_SYMBOL_SUGGESTIONS`] free variants of `symbol`.
    ///
    /// Variants are looked up concurrently. A variant whose lookup failed is
    /// left out: its availability is unknown.
    pub async fn suggest_symbols(
        &self,
        name: &str,
        symbol: &str,
    ) -> Result<SymbolSuggestions, LookupError> {
        validate_token_data(name, symbol)?;

        let candidates = symbol_variants(symbol);
        debug!("Looking up {} ticker variants of {}", candidates.len(), symbol);

        let lookups = candidates.iter().map(|candidate| self.fetch(candidate));
        let results = futures::future::join_all(lookups).await;

        let alternatives: Vec<SymbolSuggestion> = candidates
            .into_iter()
            .zip(results)
            .filter(|(_, meta)| !meta.found && meta.error.is_none())
            .map(|(symbol, _)| SymbolSuggestion {
                symbol,
                available: true,
            })
            .take(MAX_SYMBOL_SUGGESTIONS)
            .collect();

        info!(
            "{} free ticker variant(s) found for {}",
            alternatives.len(),
            symbol
        );

        Ok(SymbolSuggestions {
            original_symbol: symbol.to_string(),
            alternatives,
        })
    }

    async fn fetch(&self, symbol: &str) -> TokenMetadata {
        match bounded_call(
            self.registry.search(symbol),
            self.timeout,
            self.cancellation_token.as_ref(),
        )
        .await
        {
            Ok(entries) => TokenMetadata::from_search(symbol, entries),
            Err(failure) => {
                warn!("Metadata lookup for {} failed: {}", symbol, failure);
                TokenMetadata::unavailable(failure.to_string())
            }
        }
    }
}
