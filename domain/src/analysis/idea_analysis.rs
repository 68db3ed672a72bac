use crate::catalog::knowledge::USE_CASES;
use crate::theme::Theme;
use rand::Rng;
use serde::Serialize;

/// Ideas with more words than this are considered complex
pub const COMPLEX_WORD_THRESHOLD: usize = 10;

/// Reported when no theme name appears in the idea
pub const FALLBACK_THEME_LABEL: &str = "General Crypto";

/// Reported when no catalogued use case appears in the idea
pub const FALLBACK_USE_CASE_LABEL: &str = "Custom Use Case";

/// Coarse size of an idea description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Complexity {
    Simple,
    Complex,
}

/// Lightweight summary of a project idea
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaAnalysis {
    pub detected_themes: Vec<String>,
    pub detected_use_cases: Vec<String>,
    /// Length in characters
    pub idea_length: usize,
    pub complexity: Complexity,
    /// Heuristic score in `[0.7, 1.0)`
    pub viability: f64,
}

/// Analyze `text` without touching the network.
///
/// Themes and use cases are detected by case-insensitive substring match of
/// their display names. Only the viability score draws from `rng`.
pub fn analyze_idea<R: Rng + ?Sized>(text: &str, rng: &mut R) -> IdeaAnalysis {
    let lower = text.to_lowercase();

    let mut detected_themes: Vec<String> = Theme::ALL
        .iter()
        .filter(|theme| lower.contains(&theme.lowercase()))
        .map(|theme| theme.to_string())
        .collect();
    if detected_themes.is_empty() {
        detected_themes.push(FALLBACK_THEME_LABEL.to_string());
    }

    let mut detected_use_cases: Vec<String> = USE_CASES
        .iter()
        .filter(|use_case| lower.contains(&use_case.to_lowercase()))
        .map(|use_case| use_case.to_string())
        .collect();
    if detected_use_cases.is_empty() {
        detected_use_cases.push(FALLBACK_USE_CASE_LABEL.to_string());
    }

    let complexity = if text.split_whitespace().count() > COMPLEX_WORD_THRESHOLD {
        Complexity::Complex
    } else {
        Complexity::Simple
    };

    IdeaAnalysis {
        detected_themes,
        detected_use_cases,
        idea_length: text.chars().count(),
        complexity,
        viability: rng.gen_range(0.7..1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_detects_theme_names() {
        let analysis = analyze_idea("An NFT marketplace for Gaming guilds", &mut rng());
        assert_eq!(analysis.detected_themes, vec!["NFT", "Gaming"]);
        assert_eq!(analysis.complexity, Complexity::Simple);
    }

    #[test]
    fn test_detects_use_cases() {
        let analysis = analyze_idea(
            "We are building lending protocols for Synthetic Assets",
            &mut rng(),
        );
        assert!(
            analysis
                .detected_use_cases
                .contains(&"Lending Protocols".to_string())
        );
        assert!(
            analysis
                .detected_use_cases
                .contains(&"Synthetic Assets".to_string())
        );
    }

    #[test]
    fn test_fallback_labels() {
        let analysis = analyze_idea("hello world", &mut rng());
        assert_eq!(analysis.detected_themes, vec![FALLBACK_THEME_LABEL]);
        assert_eq!(analysis.detected_use_cases, vec![FALLBACK_USE_CASE_LABEL]);
        assert_eq!(analysis.idea_length, 11);
    }

    #[test]
    fn test_complexity_threshold() {
        let ten = "one two three four five six seven eight nine ten";
        let eleven = "one two three four five six seven eight nine ten eleven";
        assert_eq!(analyze_idea(ten, &mut rng()).complexity, Complexity::Simple);
        assert_eq!(
            analyze_idea(eleven, &mut rng()).complexity,
            Complexity::Complex
        );
    }

    #[test]
    fn test_viability_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let v = analyze_idea("x", &mut rng).viability;
            assert!((0.7..1.0).contains(&v));
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(analyze_idea("dao tooling", &mut rng())).unwrap();
        assert_eq!(json["detectedThemes"][0], "DAO");
        assert_eq!(json["complexity"], "Simple");
        assert_eq!(json["ideaLength"], 11);
    }
}
