//! Ticker symbol synthesizer

use crate::core::error::DomainError;
use crate::core::string::take_chars;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Preferred minimum ticker length
pub const MIN_SYMBOL_LEN: usize = 3;

/// Ticker ceiling; no link of the chain produces anything longer
pub const MAX_SYMBOL_LEN: usize = 5;

/// Upper-case ticker symbol (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One link of the symbol fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolStrategy {
    /// First letter of each capitalized segment
    Initials,
    /// Consonants of the name
    VowelStrip,
    /// First characters of the name
    Prefix,
}

impl SymbolStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolStrategy::Initials => "initials",
            SymbolStrategy::VowelStrip => "vowel_strip",
            SymbolStrategy::Prefix => "prefix",
        }
    }
}

/// A derived symbol and the link that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolDerivation {
    pub symbol: Symbol,
    pub strategy: SymbolStrategy,
}

/// Split a name before every ASCII upper-case letter.
///
/// `"LendingVault"` → `["Lending", "Vault"]`, `"DEX"` → `["D", "E", "X"]`.
pub fn split_capitalized(name: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in name.char_indices() {
        if c.is_ascii_uppercase() && i > start {
            segments.push(&name[start..i]);
            start = i;
        }
    }
    if start < name.len() {
        segments.push(&name[start..]);
    }
    segments
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Upper-case `text` and keep only `A-Z0-9`
fn ticker_chars(text: &str) -> String {
    text.to_uppercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

fn initials(name: &str) -> Option<String> {
    let segments = split_capitalized(name);
    if segments.len() < 2 {
        return None;
    }
    let firsts: String = segments.iter().filter_map(|s| s.chars().next()).collect();
    let symbol = ticker_chars(&firsts);
    let len = symbol.chars().count();
    (MIN_SYMBOL_LEN..=MAX_SYMBOL_LEN)
        .contains(&len)
        .then_some(symbol)
}

fn vowel_strip(name: &str) -> Option<String> {
    let consonants: String = ticker_chars(name).chars().filter(|c| !is_vowel(*c)).collect();
    let symbol = take_chars(&consonants, MAX_SYMBOL_LEN);
    (symbol.chars().count() >= MIN_SYMBOL_LEN).then_some(symbol)
}

fn prefix(name: &str) -> Option<String> {
    let symbol = take_chars(&ticker_chars(name), MAX_SYMBOL_LEN);
    (!symbol.is_empty()).then_some(symbol)
}

/// Derive a ticker from a token name.
///
/// # Example
///
/// ```
/// use ideator_domain::naming::{SymbolStrategy, derive_symbol};
///
/// // "LV" is too short, so the consonants are used
/// let derived = derive_symbol("LendingVault").unwrap();
/// assert_eq!(derived.symbol.as_str(), "LNDNG");
/// assert_eq!(derived.strategy, SymbolStrategy::VowelStrip);
/// ```
pub fn derive_symbol(name: &str) -> Result<SymbolDerivation, DomainError> {
    let chain: [(SymbolStrategy, fn(&str) -> Option<String>); 3] = [
        (SymbolStrategy::Initials, initials),
        (SymbolStrategy::VowelStrip, vowel_strip),
        (SymbolStrategy::Prefix, prefix),
    ];

    chain
        .into_iter()
        .find_map(|(strategy, link)| {
            link(name).map(|symbol| SymbolDerivation {
                symbol: Symbol(symbol),
                strategy,
            })
        })
        .ok_or_else(|| {
            DomainError::SynthesisExhausted(
                "name has no letters or digits to derive a symbol from".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validation::validate_ticker;

    fn symbol_of(name: &str) -> (String, SymbolStrategy) {
        let d = derive_symbol(name).unwrap();
        (d.symbol.into_inner(), d.strategy)
    }

    #[test]
    fn test_split_capitalized() {
        assert_eq!(split_capitalized("LendingVault"), vec!["Lending", "Vault"]);
        assert_eq!(split_capitalized("DEX"), vec!["D", "E", "X"]);
        assert_eq!(split_capitalized("vault"), vec!["vault"]);
        assert!(split_capitalized("").is_empty());
    }

    #[test]
    fn test_two_segment_name_uses_consonants() {
        assert_eq!(
            symbol_of("CyberForge"),
            ("CYBRF".to_string(), SymbolStrategy::VowelStrip)
        );
        assert_eq!(
            symbol_of("LendingVault"),
            ("LNDNG".to_string(), SymbolStrategy::VowelStrip)
        );
    }

    #[test]
    fn test_three_segments_use_initials() {
        assert_eq!(
            symbol_of("NovaLabsHub"),
            ("NLH".to_string(), SymbolStrategy::Initials)
        );
    }

    #[test]
    fn test_initials_too_long_falls_back() {
        // six segments → six initials, outside [3,5]
        let (symbol, strategy) = symbol_of("ABCDEF");
        assert_eq!(strategy, SymbolStrategy::VowelStrip);
        assert_eq!(symbol, "BCDF");
    }

    #[test]
    fn test_short_name_uses_prefix() {
        assert_eq!(symbol_of("Ai"), ("AI".to_string(), SymbolStrategy::Prefix));
        assert_eq!(symbol_of("Oui"), ("OUI".to_string(), SymbolStrategy::Prefix));
    }

    #[test]
    fn test_empty_name_is_exhaustion() {
        let err = derive_symbol("").unwrap_err();
        assert!(matches!(err, DomainError::SynthesisExhausted(_)));
    }

    #[test]
    fn test_punctuation_never_reaches_ticker() {
        assert_eq!(
            symbol_of("Hello,Mint"),
            ("HLLMN".to_string(), SymbolStrategy::VowelStrip)
        );
        assert_eq!(symbol_of("$Ai"), ("AI".to_string(), SymbolStrategy::Prefix));
        assert_eq!(symbol_of("Café.Hub"), ("CFHB".to_string(), SymbolStrategy::VowelStrip));
    }

    #[test]
    fn test_name_without_ticker_chars_is_exhaustion() {
        let err = derive_symbol("...").unwrap_err();
        assert!(matches!(err, DomainError::SynthesisExhausted(_)));
    }

    #[test]
    fn test_always_upper_and_bounded() {
        for name in [
            "QuantumVault",
            "x",
            "decentralizedlending",
            "Fx",
            "ZenithMint",
            "Web3-Forge",
            "Ünïcode",
        ] {
            let d = derive_symbol(name).unwrap();
            assert!(!d.symbol.is_empty());
            assert!(d.symbol.len() <= MAX_SYMBOL_LEN);
            assert!(validate_ticker(d.symbol.as_str()).is_ok(), "{name} -> {}", d.symbol);
        }
    }
}
