//! Uniqueness policy
//!
//! Classifies registry search results against a candidate name/ticker. The
//! check is advisory: when the registry cannot be reached the verdict is
//! [`UniquenessVerdict::unverified`], which callers must treat as "unknown",
//! never as "verified unique".

mod registry;
mod suggestions;
mod verdict;

pub use registry::{RegistryEntry, TokenMetadata};
pub use suggestions::{SYMBOL_VARIANT_SUFFIXES, SymbolSuggestion, symbol_variants};
pub use verdict::{Conflict, UniquenessVerdict};
