//! CoinGecko `/search` adapter.
//!
//! Only the `coins` array of the response is used:
//!
//! ```json
//! { "coins": [ { "id": "bitcoin", "name": "Bitcoin", "symbol": "BTC",
//!                "large": "https://…/bitcoin.png", "market_cap_rank": 1 } ] }
//! ```

use crate::http::build_client;
use async_trait::async_trait;
use ideator_application::{RegistryError, TokenRegistry};
use ideator_domain::RegistryEntry;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Public CoinGecko API root (no key required)
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    coins: Vec<SearchCoin>,
}

#[derive(Debug, Deserialize)]
struct SearchCoin {
    id: String,
    name: String,
    symbol: String,
    #[serde(default)]
    large: Option<String>,
    #[serde(default)]
    market_cap_rank: Option<u32>,
}

impl From<SearchCoin> for RegistryEntry {
    fn from(coin: SearchCoin) -> Self {
        RegistryEntry {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            image: coin.large,
            market_cap_rank: coin.market_cap_rank,
        }
    }
}

/// [`TokenRegistry`] backed by CoinGecko's search endpoint
pub struct CoinGeckoRegistry {
    client: reqwest::Client,
    base_url: String,
}

impl CoinGeckoRegistry {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RegistryError> {
        let client =
            build_client(timeout).map_err(|e| RegistryError::ConnectionError(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TokenRegistry for CoinGeckoRegistry {
    async fn search(&self, query: &str) -> Result<Vec<RegistryEntry>, RegistryError> {
        let url = format!("{}/search", self.base_url);
        debug!("GET {} query={}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RegistryError::Timeout
                } else {
                    RegistryError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RegistryError::HttpStatus(status.as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| RegistryError::InvalidResponse(e.to_string()))?;

        debug!("CoinGecko returned {} coin(s) for {}", body.coins.len(), query);
        Ok(body.coins.into_iter().map(RegistryEntry::from).collect())
    }
}
