//! Token name synthesizer

use crate::catalog::{ADJECTIVES, PREFIXES, SUFFIXES};
use crate::core::error::DomainError;
use crate::core::random::pick;
use crate::core::string::capitalize;
use crate::theme::Theme;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One link of the name fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameStrategy {
    /// First keyword, capitalized, plus a random suffix
    KeywordSuffix,
    /// Random prefix plus a random keyword, capitalized
    PrefixKeyword,
    /// Random adjective plus a random keyword, capitalized
    AdjectiveKeyword,
    /// Random prefix plus random suffix; the only link that needs no keywords
    PrefixSuffix,
}

impl NameStrategy {
    /// The chain, in the order it is tried
    pub const CHAIN: [NameStrategy; 4] = [
        NameStrategy::KeywordSuffix,
        NameStrategy::PrefixKeyword,
        NameStrategy::AdjectiveKeyword,
        NameStrategy::PrefixSuffix,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameStrategy::KeywordSuffix => "keyword_suffix",
            NameStrategy::PrefixKeyword => "prefix_keyword",
            NameStrategy::AdjectiveKeyword => "adjective_keyword",
            NameStrategy::PrefixSuffix => "prefix_suffix",
        }
    }

    /// Run this link. Keyword-based links yield `None` without keywords.
    pub fn attempt<R: Rng + ?Sized>(self, keywords: &[String], rng: &mut R) -> Option<String> {
        match self {
            NameStrategy::KeywordSuffix => {
                let word = keywords.first()?;
                let suffix = pick(rng, SUFFIXES);
                Some(format!("{}{}", capitalize(word), suffix))
            }
            NameStrategy::PrefixKeyword => {
                if keywords.is_empty() {
                    return None;
                }
                let prefix = pick(rng, PREFIXES);
                let word = pick(rng, keywords);
                Some(format!("{}{}", prefix, capitalize(word)))
            }
            NameStrategy::AdjectiveKeyword => {
                if keywords.is_empty() {
                    return None;
                }
                let adjective = pick(rng, ADJECTIVES);
                let word = pick(rng, keywords);
                Some(format!("{}{}", adjective, capitalize(word)))
            }
            NameStrategy::PrefixSuffix => {
                let prefix = pick(rng, PREFIXES);
                let suffix = pick(rng, SUFFIXES);
                Some(format!("{}{}", prefix, suffix))
            }
        }
    }
}

/// A generated token display name and the link that produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    pub name: String,
    pub strategy: NameStrategy,
}

/// Synthesize a token name from extracted keywords.
///
/// `theme` is part of the contract but does not currently steer fragment
/// choice.
pub fn synthesize_name<R: Rng + ?Sized>(
    keywords: &[String],
    _theme: Theme,
    rng: &mut R,
) -> Result<NameCandidate, DomainError> {
    for strategy in NameStrategy::CHAIN {
        if let Some(name) = strategy.attempt(keywords, rng)
            && !name.is_empty()
        {
            return Ok(NameCandidate { name, strategy });
        }
    }

    Err(DomainError::SynthesisExhausted(
        "no name strategy produced a result".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::rng_from_seed;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_keywords_fire_first_strategy() {
        let mut rng = rng_from_seed(Some(1));
        let candidate = synthesize_name(&words(&["lending", "protocol"]), Theme::DeFi, &mut rng)
            .unwrap();
        assert_eq!(candidate.strategy, NameStrategy::KeywordSuffix);
        assert!(candidate.name.starts_with("Lending"));
        let suffix = &candidate.name["Lending".len()..];
        assert!(SUFFIXES.contains(&suffix));
    }

    #[test]
    fn test_no_keywords_falls_through_to_prefix_suffix() {
        let mut rng = rng_from_seed(Some(1));
        let candidate = synthesize_name(&[], Theme::DeFi, &mut rng).unwrap();
        assert_eq!(candidate.strategy, NameStrategy::PrefixSuffix);
        assert!(PREFIXES.iter().any(|p| candidate.name.starts_with(p)));
        assert!(SUFFIXES.iter().any(|s| candidate.name.ends_with(s)));
    }

    #[test]
    fn test_keyword_links_decline_without_keywords() {
        let mut rng = rng_from_seed(Some(4));
        assert!(NameStrategy::KeywordSuffix.attempt(&[], &mut rng).is_none());
        assert!(NameStrategy::PrefixKeyword.attempt(&[], &mut rng).is_none());
        assert!(NameStrategy::AdjectiveKeyword.attempt(&[], &mut rng).is_none());
    }

    #[test]
    fn test_adjective_keyword_link() {
        let mut rng = rng_from_seed(Some(8));
        let name = NameStrategy::AdjectiveKeyword
            .attempt(&words(&["oracle"]), &mut rng)
            .unwrap();
        assert!(name.ends_with("Oracle"));
        assert!(ADJECTIVES.iter().any(|a| name.starts_with(a)));
    }

    #[test]
    fn test_total_for_many_seeds() {
        for seed in 0..50 {
            let mut rng = rng_from_seed(Some(seed));
            let candidate = synthesize_name(&[], Theme::Meme, &mut rng).unwrap();
            assert!(!candidate.name.is_empty());
        }
    }

    #[test]
    fn test_same_seed_same_name() {
        let keywords = words(&["vault", "staking"]);
        let a = synthesize_name(&keywords, Theme::Staking, &mut rng_from_seed(Some(99))).unwrap();
        let b = synthesize_name(&keywords, Theme::Staking, &mut rng_from_seed(Some(99))).unwrap();
        assert_eq!(a, b);
    }
}
