//! Branding record entity

use crate::catalog::ColorPalette;
use crate::naming::{NameStrategy, Symbol, SymbolStrategy};
use crate::theme::Theme;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Confidence attached to catalog-generated branding
pub const DEFAULT_CONFIDENCE: f64 = 0.95;

/// Which fallback links produced the name and symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub name_strategy: NameStrategy,
    pub symbol_strategy: SymbolStrategy,
}

/// Complete branding for one idea.
///
/// Built once by [`BrandingAssembler`](super::BrandingAssembler); the
/// consuming `with_*` methods return a new record rather than mutating a
/// shared one.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingRecord {
    theme: Theme,
    token_name: String,
    symbol: Symbol,
    tagline: String,
    visual_style: String,
    color_palette: ColorPalette,
    logo_prompt: String,
    description: String,
    external_signals: Vec<String>,
    generated_at: DateTime<Utc>,
    confidence: f64,
    provenance: Provenance,
}

impl BrandingRecord {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        theme: Theme,
        token_name: String,
        symbol: Symbol,
        tagline: String,
        visual_style: String,
        color_palette: ColorPalette,
        logo_prompt: String,
        description: String,
        generated_at: DateTime<Utc>,
        provenance: Provenance,
    ) -> Self {
        Self {
            theme,
            token_name,
            symbol,
            tagline,
            visual_style,
            color_palette,
            logo_prompt,
            description,
            external_signals: Vec::new(),
            generated_at,
            confidence: DEFAULT_CONFIDENCE,
            provenance,
        }
    }

    /// Attach externally sourced signals (e.g. trending topic titles)
    pub fn with_external_signals(mut self, signals: Vec<String>) -> Self {
        self.external_signals = signals;
        self
    }

    /// Override the confidence score (clamped to 0.0..=1.0)
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn token_name(&self) -> &str {
        &self.token_name
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    pub fn visual_style(&self) -> &str {
        &self.visual_style
    }

    pub fn color_palette(&self) -> &ColorPalette {
        &self.color_palette
    }

    pub fn logo_prompt(&self) -> &str {
        &self.logo_prompt
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn external_signals(&self) -> &[String] {
        &self.external_signals
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}
