//! Uniqueness verdict and classification policy

use super::registry::RegistryEntry;
use serde::Serialize;

/// An existing registry token that collides with the candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Conflict {
    pub existing_name: String,
    pub existing_symbol: String,
    pub external_id: String,
}

impl From<&RegistryEntry> for Conflict {
    fn from(entry: &RegistryEntry) -> Self {
        Self {
            existing_name: entry.name.clone(),
            existing_symbol: entry.symbol.clone(),
            external_id: entry.id.clone(),
        }
    }
}

/// Outcome of a uniqueness check.
///
/// `degraded == true` means the registry could not be consulted. Such a
/// verdict reports `is_unique == true` so generation is never blocked, but
/// [`is_verified_unique`](Self::is_verified_unique) stays false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UniquenessVerdict {
    pub is_unique: bool,
    pub conflicts: Vec<Conflict>,
    pub message: String,
    pub degraded: bool,
}

impl UniquenessVerdict {
    /// Classify registry search results for `name` / `symbol`.
    ///
    /// 1. First entry matching the symbol or the name → that one conflict.
    /// 2. Otherwise every entry matching the symbol → all of them.
    /// 3. Otherwise unique.
    pub fn classify(name: &str, symbol: &str, entries: &[RegistryEntry]) -> Self {
        if let Some(exact) = entries
            .iter()
            .find(|e| e.matches_symbol(symbol) || e.matches_name(name))
        {
            return Self {
                is_unique: false,
                conflicts: vec![Conflict::from(exact)],
                message: format!(
                    "Token name or symbol already exists: {} ({})",
                    exact.name, exact.symbol
                ),
                degraded: false,
            };
        }

        let same_symbol: Vec<&RegistryEntry> =
            entries.iter().filter(|e| e.matches_symbol(symbol)).collect();
        if !same_symbol.is_empty() {
            let names: Vec<&str> = same_symbol.iter().map(|e| e.name.as_str()).collect();
            return Self {
                is_unique: false,
                conflicts: same_symbol.into_iter().map(Conflict::from).collect(),
                message: format!("Symbol already in use by: {}", names.join(", ")),
                degraded: false,
            };
        }

        Self::unique()
    }

    /// No conflicts found in a successful registry search
    pub fn unique() -> Self {
        Self {
            is_unique: true,
            conflicts: Vec::new(),
            message: "Token name and symbol are unique!".to_string(),
            degraded: false,
        }
    }

    /// Registry unavailable: fail open, flagged as degraded
    pub fn unverified(reason: impl AsRef<str>) -> Self {
        Self {
            is_unique: true,
            conflicts: Vec::new(),
            message: format!(
                "Could not verify uniqueness ({}), but proceeding with generation",
                reason.as_ref()
            ),
            degraded: true,
        }
    }

    /// Unique according to a registry that actually answered
    pub fn is_verified_unique(&self) -> bool {
        self.is_unique && !self.degraded
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btc() -> RegistryEntry {
        RegistryEntry::new("bitcoin", "Bitcoin", "btc")
    }

    #[test]
    fn test_symbol_match_with_different_name_conflicts() {
        let verdict = UniquenessVerdict::classify("BitVault", "BTC", &[btc()]);
        assert!(!verdict.is_unique);
        assert_eq!(verdict.conflicts.len(), 1);
        assert_eq!(verdict.conflicts[0].external_id, "bitcoin");
        assert!(!verdict.degraded);
        assert!(verdict.message.contains("Bitcoin (btc)"));
    }

    #[test]
    fn test_name_match_conflicts() {
        let verdict = UniquenessVerdict::classify("bitcoin", "XYZ", &[btc()]);
        assert!(!verdict.is_unique);
        assert_eq!(verdict.conflicts[0].existing_name, "Bitcoin");
    }

    #[test]
    fn test_first_exact_match_only() {
        let entries = vec![
            RegistryEntry::new("a", "Alpha", "LNDNG"),
            RegistryEntry::new("b", "Beta", "lndng"),
        ];
        let verdict = UniquenessVerdict::classify("LendingVault", "LNDNG", &entries);
        assert_eq!(verdict.conflicts.len(), 1);
        assert_eq!(verdict.conflicts[0].external_id, "a");
    }

    #[test]
    fn test_unique_when_nothing_matches() {
        let entries = vec![RegistryEntry::new("lending", "Lending Finance", "LEND")];
        let verdict = UniquenessVerdict::classify("LendingVault", "LNDNG", &entries);
        assert!(verdict.is_verified_unique());
        assert!(!verdict.has_conflicts());
    }

    #[test]
    fn test_unique_on_empty_results() {
        assert_eq!(
            UniquenessVerdict::classify("X", "Y", &[]),
            UniquenessVerdict::unique()
        );
    }

    #[test]
    fn test_unverified_fails_open_but_is_flagged() {
        let verdict = UniquenessVerdict::unverified("API unavailable");
        assert!(verdict.is_unique);
        assert!(verdict.degraded);
        assert!(!verdict.is_verified_unique());
        assert!(verdict.message.contains("API unavailable"));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(UniquenessVerdict::classify("x", "btc", &[btc()])).unwrap();
        assert_eq!(json["isUnique"], false);
        assert_eq!(json["conflicts"][0]["existingSymbol"], "btc");
        assert_eq!(json["degraded"], false);
    }
}
