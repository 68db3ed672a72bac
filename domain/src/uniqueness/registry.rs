//! Registry records as seen by the domain

use serde::{Deserialize, Serialize};

/// One token returned by a registry search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryEntry {
    /// Registry-specific identifier (e.g. `"bitcoin"`)
    pub id: String,
    pub name: String,
    pub symbol: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap_rank: Option<u32>,
}

impl RegistryEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            symbol: symbol.into(),
            image: None,
            market_cap_rank: None,
        }
    }

    /// Case-insensitive exact symbol match
    pub fn matches_symbol(&self, symbol: &str) -> bool {
        self.symbol.to_uppercase() == symbol.to_uppercase()
    }

    /// Case-insensitive exact name match
    pub fn matches_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Result of looking a ticker up in the registry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenMetadata {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<RegistryEntry>,
    /// Set when the registry could not be queried
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TokenMetadata {
    pub fn found(entry: RegistryEntry) -> Self {
        Self {
            found: true,
            data: Some(entry),
            error: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            data: None,
            error: None,
        }
    }

    pub fn unavailable(error: impl Into<String>) -> Self {
        Self {
            found: false,
            data: None,
            error: Some(error.into()),
        }
    }

    /// Pick the first entry whose symbol matches `symbol`
    pub fn from_search(symbol: &str, entries: Vec<RegistryEntry>) -> Self {
        entries
            .into_iter()
            .find(|e| e.matches_symbol(symbol))
            .map(Self::found)
            .unwrap_or_else(Self::not_found)
    }
}
