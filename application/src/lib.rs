//! Application layer for token-ideator
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    generation_logger::{GenerationEvent, GenerationLogger, NoGenerationLogger},
    progress::{GenerationProgress, GenerationStage, NoProgress},
    token_registry::{OfflineRegistry, RegistryError, TokenRegistry},
    trending_topics::{NoTrendingTopics, TrendingTopics, TrendsError},
};
pub use use_cases::check_uniqueness::{CheckUniquenessError, CheckUniquenessUseCase};
pub use use_cases::generate_branding::{
    GenerateBrandingError, GenerateBrandingInput, GenerateBrandingUseCase, GenerationOutput,
};
pub use use_cases::lookup_token::{
    LookupError, LookupTokenUseCase, MAX_SYMBOL_SUGGESTIONS, SymbolSuggestions,
};
