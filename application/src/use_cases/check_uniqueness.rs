//! Check Uniqueness use case
//!
//! Searches the registry for a name and classifies the results. Registry
//! failures never surface as errors: they produce a degraded verdict.

use crate::ports::token_registry::TokenRegistry;
use crate::use_cases::shared::bounded_call;
use ideator_domain::{DomainError, UniquenessVerdict, validate_token_data};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum CheckUniquenessError {
    #[error(transparent)]
    InvalidInput(#[from] DomainError),
}

/// Use case for checking a caller-supplied name/ticker pair
pub struct CheckUniquenessUseCase {
    registry: Arc<dyn TokenRegistry>,
    timeout: Duration,
    cancellation_token: Option<CancellationToken>,
}

impl Clone for CheckUniquenessUseCase {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
            timeout: self.timeout,
            cancellation_token: self.cancellation_token.clone(),
        }
    }
}

impl CheckUniquenessUseCase {
    pub fn new(registry: Arc<dyn TokenRegistry>, timeout: Duration) -> Self {
        Self {
            registry,
            timeout,
            cancellation_token: None,
        }
    }

    /// Abort the registry call (yielding a degraded verdict) when `token` fires.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Validate the pair, then resolve it against the registry.
    pub async fn execute(
        &self,
        name: &str,
        symbol: &str,
    ) -> Result<UniquenessVerdict, CheckUniquenessError> {
        validate_token_data(name, symbol)?;
        Ok(self.resolve(name, symbol).await)
    }

    /// Resolve without input validation (for generated names).
    pub async fn resolve(&self, name: &str, symbol: &str) -> UniquenessVerdict {
        debug!("Checking uniqueness of {} ({})", name, symbol);

        match bounded_call(
            self.registry.search(name),
            self.timeout,
            self.cancellation_token.as_ref(),
        )
        .await
        {
            Ok(entries) => {
                let verdict = UniquenessVerdict::classify(name, symbol, &entries);
                info!(
                    "Uniqueness of {} ({}): unique={}, {} conflict(s) among {} result(s)",
                    name,
                    symbol,
                    verdict.is_unique,
                    verdict.conflicts.len(),
                    entries.len()
                );
                verdict
            }
            Err(failure) => {
                warn!("Registry check for {} failed: {}", name, failure);
                UniquenessVerdict::unverified(failure.reason())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::token_registry::{OfflineRegistry, RegistryError};
    use async_trait::async_trait;
    use ideator_domain::RegistryEntry;
    use std::sync::Mutex;

    struct MockRegistry {
        entries: Vec<RegistryEntry>,
        queries: Mutex<Vec<String>>,
    }

    impl MockRegistry {
        fn new(entries: Vec<RegistryEntry>) -> Self {
            Self {
                entries,
                queries: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TokenRegistry for MockRegistry {
        async fn search(&self, query: &str) -> Result<Vec<RegistryEntry>, RegistryError> {
            self.queries.lock().unwrap().push(query.to_string());
            Ok(self.entries.clone())
        }
    }

    struct HangingRegistry;

    #[async_trait]
    impl TokenRegistry for HangingRegistry {
        async fn search(&self, _query: &str) -> Result<Vec<RegistryEntry>, RegistryError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_btc_conflict() {
        let registry = Arc::new(MockRegistry::new(vec![RegistryEntry::new(
            "bitcoin", "Bitcoin", "btc",
        )]));
        let use_case = CheckUniquenessUseCase::new(registry.clone(), Duration::from_secs(5));

        let verdict = use_case.execute("Bitcoin Two", "BTC").await.unwrap();
        assert!(!verdict.is_unique);
        assert_eq!(verdict.conflicts[0].external_id, "bitcoin");
        assert_eq!(*registry.queries.lock().unwrap(), vec!["Bitcoin Two"]);
    }

    #[tokio::test]
    async fn test_invalid_input_is_rejected_before_search() {
        let registry = Arc::new(MockRegistry::new(vec![]));
        let use_case = CheckUniquenessUseCase::new(registry.clone(), Duration::from_secs(5));

        let result = use_case.execute("Bitcoin", "btc").await;
        assert!(matches!(
            result,
            Err(CheckUniquenessError::InvalidInput(DomainError::InvalidTokenData(_)))
        ));
        assert!(registry.queries.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_registry_failure_degrades() {
        let use_case = CheckUniquenessUseCase::new(Arc::new(OfflineRegistry), Duration::from_secs(5));
        let verdict = use_case.execute("Nova Labs", "NOVA").await.unwrap();
        assert!(verdict.is_unique);
        assert!(verdict.degraded);
        assert!(verdict.message.contains("API unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_degrades() {
        let use_case =
            CheckUniquenessUseCase::new(Arc::new(HangingRegistry), Duration::from_millis(50));
        let verdict = use_case.resolve("NovaLabs", "NLB").await;
        assert!(verdict.degraded);
        assert!(verdict.message.contains("timed out"));
    }

    #[tokio::test]
    async fn test_cancellation_degrades() {
        let token = CancellationToken::new();
        token.cancel();
        let use_case = CheckUniquenessUseCase::new(Arc::new(HangingRegistry), Duration::from_secs(60))
            .with_cancellation(token);
        let verdict = use_case.resolve("NovaLabs", "NLB").await;
        assert!(verdict.degraded);
        assert!(!verdict.is_verified_unique());
    }
}
