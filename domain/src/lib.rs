//! Domain layer for token-ideator
//!
//! This crate contains the branding engine: catalogs, classifiers,
//! synthesizers and the uniqueness policy. It performs no I/O; every
//! randomized step takes an injected [`rand::Rng`].
//!
//! # Core Concepts
//!
//! ## Branding pipeline
//!
//! ```text
//! ProjectIdea ─► extract_keywords ─► classify ─► synthesize_name ─► derive_symbol
//!                                                                      │
//!                                   BrandingRecord ◄─ BrandingAssembler ◄┘
//! ```
//!
//! ## Uniqueness
//!
//! Registry search results are classified into a [`UniquenessVerdict`]. A
//! verdict built without registry access is *degraded*: it never blocks
//! generation, but it is not a guarantee either.

pub mod analysis;
pub mod branding;
pub mod catalog;
pub mod config;
pub mod core;
pub mod lexicon;
pub mod naming;
pub mod theme;
pub mod uniqueness;

// Re-export commonly used types
pub use analysis::{Complexity, IdeaAnalysis, TrendingIdeas, analyze_idea, trending_ideas};
pub use branding::{
    BrandingAssembler, BrandingRecord, DEFAULT_CONFIDENCE, Provenance, synthesize_branding,
};
pub use catalog::ColorPalette;
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::{
    error::DomainError,
    idea::ProjectIdea,
    random::rng_from_seed,
    validation::{validate_symbol_query, validate_ticker, validate_token_data},
};
pub use lexicon::extract_keywords;
pub use naming::{
    AlternativeName, DEFAULT_ALTERNATIVE_COUNT, NameCandidate, NameStrategy, Symbol,
    SymbolDerivation, SymbolStrategy, derive_symbol, generate_alternatives, synthesize_name,
};
pub use theme::{Theme, classify};
pub use uniqueness::{
    Conflict, RegistryEntry, SymbolSuggestion, TokenMetadata, UniquenessVerdict, symbol_variants,
};
