//! Branding assembler: pure composition of catalog lookups

use super::record::{BrandingRecord, Provenance};
use crate::catalog::{copy, palette_for, visual_style_for};
use crate::core::error::DomainError;
use crate::core::idea::ProjectIdea;
use crate::lexicon::extract_keywords;
use crate::naming::{NameCandidate, SymbolDerivation, derive_symbol, synthesize_name};
use crate::theme::{Theme, classify};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Composes a [`BrandingRecord`] from a chosen theme, name and symbol.
///
/// Performs no I/O. Catalog draws happen in a fixed order (palette, tagline,
/// visual style, logo prompt, description) so a seeded generator always
/// yields the same record.
pub struct BrandingAssembler;

impl BrandingAssembler {
    pub fn assemble<R: Rng + ?Sized>(
        idea: &ProjectIdea,
        theme: Theme,
        name: NameCandidate,
        symbol: SymbolDerivation,
        generated_at: DateTime<Utc>,
        rng: &mut R,
    ) -> BrandingRecord {
        let palette = palette_for(theme, rng);
        let tagline = copy::tagline(theme, rng);
        let visual_style = visual_style_for(theme, rng).to_string();
        let logo_prompt = copy::logo_prompt(&name.name, theme, &palette, rng);
        let description = copy::description(&name.name, theme, idea.content(), rng);

        BrandingRecord::new(
            theme,
            name.name,
            symbol.symbol,
            tagline,
            visual_style,
            palette,
            logo_prompt,
            description,
            generated_at,
            Provenance {
                name_strategy: name.strategy,
                symbol_strategy: symbol.strategy,
            },
        )
    }
}

/// Run the offline pipeline: keywords → theme → name → symbol → record.
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use ideator_domain::branding::synthesize_branding;
/// use ideator_domain::core::{idea::ProjectIdea, random::rng_from_seed};
/// use ideator_domain::theme::Theme;
///
/// let idea = ProjectIdea::new("A lending protocol that lets users borrow against staked assets").unwrap();
/// let record = synthesize_branding(&idea, Utc::now(), &mut rng_from_seed(Some(42))).unwrap();
/// assert_eq!(record.theme(), Theme::DeFi);
/// assert!(record.token_name().starts_with("Lending"));
/// ```
pub fn synthesize_branding<R: Rng + ?Sized>(
    idea: &ProjectIdea,
    generated_at: DateTime<Utc>,
    rng: &mut R,
) -> Result<BrandingRecord, DomainError> {
    let keywords = extract_keywords(idea.content());
    let theme = classify(idea.content());
    let name = synthesize_name(&keywords, theme, rng)?;
    let symbol = derive_symbol(&name.name)?;

    Ok(BrandingAssembler::assemble(
        idea,
        theme,
        name,
        symbol,
        generated_at,
        rng,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branding::DEFAULT_CONFIDENCE;
    use crate::catalog::COLOR_PALETTES;
    use crate::core::random::rng_from_seed;
    use crate::core::validation::validate_ticker;
    use crate::naming::{MAX_SYMBOL_LEN, NameStrategy, SymbolStrategy};
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
    }

    fn lending_idea() -> ProjectIdea {
        ProjectIdea::new("A lending protocol that lets users borrow against staked assets")
            .unwrap()
    }

    #[test]
    fn test_lending_scenario() {
        let record = synthesize_branding(&lending_idea(), fixed_time(), &mut rng_from_seed(Some(7)))
            .unwrap();

        assert_eq!(record.theme(), Theme::DeFi);
        assert_eq!(record.provenance().name_strategy, NameStrategy::KeywordSuffix);
        assert!(record.token_name().starts_with("Lending"));
        assert_eq!(record.color_palette().name, "Cyberpunk");
        assert_eq!(
            record.visual_style(),
            "Geometric and minimalist with financial elements"
        );
        assert!(record.description().contains(record.token_name()));
        assert!(record.description().contains(lending_idea().content()));
        assert!(record.tagline().contains("defi"));
        assert_eq!(record.confidence(), DEFAULT_CONFIDENCE);
        assert!(record.external_signals().is_empty());
    }

    #[test]
    fn test_lending_vault_symbol() {
        let name = NameCandidate {
            name: "LendingVault".to_string(),
            strategy: NameStrategy::KeywordSuffix,
        };
        let symbol = derive_symbol(&name.name).unwrap();
        assert_eq!(symbol.symbol.as_str(), "LNDNG");

        let record = BrandingAssembler::assemble(
            &lending_idea(),
            Theme::DeFi,
            name,
            symbol,
            fixed_time(),
            &mut rng_from_seed(Some(1)),
        );
        assert_eq!(record.symbol().as_str(), "LNDNG");
        assert_eq!(record.provenance().symbol_strategy, SymbolStrategy::VowelStrip);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let idea = ProjectIdea::new("An oracle network feeding price data to games").unwrap();
        let a = synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(1234))).unwrap();
        let b = synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(1234))).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_keyword_idea_uses_prefix_suffix() {
        // every token is a stop word or too short
        let idea = ProjectIdea::new("a b c to do it").unwrap();
        let record = synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(3))).unwrap();
        assert_eq!(record.theme(), Theme::DeFi);
        assert_eq!(record.provenance().name_strategy, NameStrategy::PrefixSuffix);
        assert!(!record.symbol().is_empty());
    }

    #[test]
    fn test_punctuated_idea_yields_valid_ticker() {
        let idea = ProjectIdea::new("Hello, builders of the future").unwrap();
        let record = synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(1))).unwrap();
        assert!(record.token_name().starts_with("Hello,"));
        assert_eq!(validate_ticker(record.symbol().as_str()), Ok(()));
    }

    #[test]
    fn test_every_generated_ticker_passes_validation() {
        let ideas = [
            "A lending protocol that lets users borrow against staked assets",
            "Hello, builders of the future!",
            "web3 gaming guild: play2earn, 100% on-chain",
            "$$$ moon!!! ??? ...",
            "блокчейн кошелек для всех",
            "Décentralisé échange über schnell",
            "🚀🚀🚀 rocket emoji coin 🚀",
            "a b c to do it",
            "1234 5678 90210",
        ];
        for text in ideas {
            let idea = ProjectIdea::new(text).unwrap();
            for seed in 0..50 {
                let record =
                    synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(seed)))
                        .unwrap();
                let symbol = record.symbol().as_str();
                assert!(
                    validate_ticker(symbol).is_ok(),
                    "idea {text:?} seed {seed}: name {} -> symbol {symbol:?}",
                    record.token_name()
                );
                assert!(symbol.chars().count() <= MAX_SYMBOL_LEN);
            }
        }
    }

    #[test]
    fn test_fallback_palette_for_undedicated_theme() {
        let idea = ProjectIdea::new("meme viral joke").unwrap();
        let record = synthesize_branding(&idea, fixed_time(), &mut rng_from_seed(Some(5))).unwrap();
        assert_eq!(record.theme(), Theme::Meme);
        assert!(COLOR_PALETTES.contains(record.color_palette()));
    }

    #[test]
    fn test_builders_return_new_values() {
        let record = synthesize_branding(&lending_idea(), fixed_time(), &mut rng_from_seed(Some(2)))
            .unwrap()
            .with_external_signals(vec!["ETH ETF approved".to_string()])
            .with_confidence(2.0);
        assert_eq!(record.external_signals(), ["ETH ETF approved".to_string()]);
        assert_eq!(record.confidence(), 1.0);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = synthesize_branding(&lending_idea(), fixed_time(), &mut rng_from_seed(Some(2)))
            .unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["theme"], "DeFi");
        assert!(json["tokenName"].is_string());
        assert!(json["colorPalette"]["colors"].is_array());
        assert_eq!(json["provenance"]["nameStrategy"], "keyword_suffix");
    }
}
