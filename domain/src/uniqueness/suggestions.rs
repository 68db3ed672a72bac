//! Ticker variants offered when a symbol is taken

use crate::core::string::take_chars;
use serde::Serialize;

/// Suffixes appended to the 3-character base of a taken ticker
pub const SYMBOL_VARIANT_SUFFIXES: &[&str] = &["X", "AI", "PRO", "DAO", "FI"];

/// A candidate ticker and whether the registry already lists it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolSuggestion {
    pub symbol: String,
    pub available: bool,
}

/// Variants of `symbol`: its first three characters plus each suffix
pub fn symbol_variants(symbol: &str) -> Vec<String> {
    let base = take_chars(symbol, 3);
    SYMBOL_VARIANT_SUFFIXES
        .iter()
        .map(|suffix| format!("{}{}", base, suffix))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variants() {
        assert_eq!(
            symbol_variants("LNDNG"),
            vec!["LNDX", "LNDAI", "LNDPRO", "LNDDAO", "LNDFI"]
        );
    }

    #[test]
    fn test_short_symbol_keeps_whole_base() {
        assert_eq!(symbol_variants("AI")[0], "AIX");
    }
}
