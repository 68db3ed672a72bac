//! Token registry adapters
//!
//! Implements the [`TokenRegistry`](ideator_application::TokenRegistry) port.

mod coingecko;

pub use coingecko::{CoinGeckoRegistry, DEFAULT_COINGECKO_URL};
