//! Keyword-scoring theme classifier

use super::entities::Theme;

/// Theme → substring triggers. Row order is the tie-break: the first row
/// reaching the best score wins.
///
/// [`Theme::Dao`] has no row and is reachable only through the theme-name
/// pass.
pub const THEME_TRIGGERS: &[(Theme, &[&str])] = &[
    (
        Theme::DeFi,
        &[
            "lending", "borrow", "yield", "swap", "liquidity", "protocol", "finance", "trading",
            "pool", "farm",
        ],
    ),
    (
        Theme::Nft,
        &[
            "nft", "digital", "art", "collectible", "token", "ownership", "marketplace", "mint",
        ],
    ),
    (
        Theme::Gaming,
        &[
            "game", "play", "reward", "player", "quest", "battle", "metaverse", "virtual",
        ],
    ),
    (
        Theme::Metaverse,
        &["metaverse", "virtual", "world", "avatar", "immersive", "vr", "ar"],
    ),
    (
        Theme::Ai,
        &[
            "ai", "artificial", "intelligence", "machine", "learning", "neural", "model",
            "autonomous",
        ],
    ),
    (
        Theme::Layer2,
        &["layer2", "scaling", "rollup", "sidechain", "fast", "cheap"],
    ),
    (
        Theme::Privacy,
        &["privacy", "anonymous", "confidential", "secret", "encrypted", "hidden"],
    ),
    (
        Theme::Staking,
        &["staking", "stake", "validator", "earn", "reward", "delegate"],
    ),
    (
        Theme::Governance,
        &["governance", "vote", "dao", "proposal", "community", "decision"],
    ),
    (
        Theme::Bridge,
        &["bridge", "cross-chain", "interop", "connect", "transfer"],
    ),
    (
        Theme::Oracle,
        &["oracle", "data", "feed", "price", "information"],
    ),
    (Theme::Dex, &["dex", "exchange", "decentralized", "swap", "trade"]),
    (
        Theme::Lending,
        &["lending", "loan", "credit", "borrow", "collateral"],
    ),
    (
        Theme::Derivatives,
        &["derivative", "futures", "options", "leverage", "short"],
    ),
    (Theme::Synthetic, &["synthetic", "synth", "asset", "mirror"]),
    (Theme::Meme, &["meme", "fun", "joke", "community", "viral"]),
    (
        Theme::Social,
        &["social", "community", "creator", "content", "network"],
    ),
    (
        Theme::Yield,
        &["yield", "apy", "return", "farming", "interest"],
    ),
];

/// Count how many of `triggers` occur as substrings of `text_lower`
pub fn score(text_lower: &str, triggers: &[&str]) -> usize {
    triggers.iter().filter(|kw| text_lower.contains(*kw)).count()
}

/// Classify an idea into exactly one [`Theme`].
///
/// Matching is plain substring search on the lower-cased text, so short
/// triggers like `"ai"` also fire inside longer words.
///
/// # Example
///
/// ```
/// use ideator_domain::theme::{Theme, classify};
///
/// let theme = classify("A lending protocol that lets users borrow against staked assets");
/// assert_eq!(theme, Theme::DeFi);
/// assert_eq!(classify(""), Theme::DeFi);
/// ```
pub fn classify(idea: &str) -> Theme {
    let text = idea.to_lowercase();

    let mut best = Theme::default();
    let mut best_score = 0;
    for (theme, triggers) in THEME_TRIGGERS {
        let s = score(&text, triggers);
        if s > best_score {
            best_score = s;
            best = *theme;
        }
    }

    if best_score > 0 {
        return best;
    }

    Theme::ALL
        .iter()
        .copied()
        .find(|theme| text.contains(&theme.lowercase()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lending_idea_is_defi() {
        // DeFi: lending, borrow, protocol (3) beats Lending: lending, borrow (2)
        let idea = "A lending protocol that lets users borrow against staked assets";
        assert_eq!(classify(idea), Theme::DeFi);
    }

    #[test]
    fn test_empty_text_defaults() {
        assert_eq!(classify(""), Theme::DeFi);
        assert_eq!(classify("   "), Theme::DeFi);
    }

    #[test]
    fn test_no_matches_defaults() {
        assert_eq!(classify("zzz qqq"), Theme::DeFi);
    }

    #[test]
    fn test_first_row_wins_ties() {
        // "metaverse" and "virtual" score 2 for both Gaming and Metaverse
        assert_eq!(classify("metaverse virtual"), Theme::Gaming);
    }

    #[test]
    fn test_strictly_highest_wins() {
        let idea = "privacy first anonymous encrypted messaging";
        assert_eq!(classify(idea), Theme::Privacy);
    }

    #[test]
    fn test_theme_name_fallback() {
        // "gaming" contains no trigger ("game" does not match), only the name
        assert_eq!(classify("a gaming guild"), Theme::Gaming);
    }

    #[test]
    fn test_deterministic() {
        let idea = "A social network for meme creators with community rewards";
        let first = classify(idea);
        for _ in 0..10 {
            assert_eq!(classify(idea), first);
        }
    }

    #[test]
    fn test_every_triggered_theme_is_in_catalog() {
        for (theme, triggers) in THEME_TRIGGERS {
            assert!(Theme::ALL.contains(theme));
            assert!(!triggers.is_empty());
        }
    }
}
