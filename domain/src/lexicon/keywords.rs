//! Keyword extraction from project ideas.

/// Tokens must be strictly longer than this (in characters) to survive
pub const MIN_KEYWORD_LEN: usize = 3;

/// At most this many keywords are kept
pub const MAX_KEYWORDS: usize = 5;

/// Function words that never make a useful token name fragment
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "do", "does", "did", "will", "would", "could", "should", "may", "might", "must", "can", "for",
    "and", "or", "but", "in", "on", "at", "to", "of", "by", "with", "from", "as", "that", "this",
    "which", "who", "what", "where", "when", "why", "how",
];

/// Extract up to [`MAX_KEYWORDS`] candidate keywords from `text`.
///
/// Tokens are lower-cased and split on whitespace; punctuation is kept as
/// part of the token. Order follows first occurrence and repeated tokens are
/// dropped.
///
/// # Example
///
/// ```
/// use ideator_domain::lexicon::extract_keywords;
///
/// let words = extract_keywords("A lending protocol that lets users borrow");
/// assert_eq!(words, vec!["lending", "protocol", "lets", "users", "borrow"]);
/// ```
pub fn extract_keywords(text: &str) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::with_capacity(MAX_KEYWORDS);

    for token in text.to_lowercase().split_whitespace() {
        if keywords.len() == MAX_KEYWORDS {
            break;
        }
        if token.chars().count() <= MIN_KEYWORD_LEN || STOP_WORDS.contains(&token) {
            continue;
        }
        if keywords.iter().any(|k| k == token) {
            continue;
        }
        keywords.push(token.to_string());
    }

    keywords
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
    }

    #[test]
    fn test_filters_short_and_stop_words() {
        let words = extract_keywords("This is the best game for all of them");
        assert_eq!(words, vec!["best", "game", "them"]);
    }

    #[test]
    fn test_truncates_to_five() {
        let words = extract_keywords("alpha bravo charlie delta echoes foxtrot golf");
        assert_eq!(words.len(), MAX_KEYWORDS);
        assert_eq!(words.last().unwrap(), "echoes");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let words = extract_keywords("Vault vault VAULT staking");
        assert_eq!(words, vec!["vault", "staking"]);
    }

    #[test]
    fn test_lowercases_tokens() {
        assert_eq!(extract_keywords("NFT LENDING"), vec!["lending"]);
    }

    #[test]
    fn test_keeps_punctuation() {
        assert_eq!(extract_keywords("staked assets."), vec!["staked", "assets."]);
    }
}
