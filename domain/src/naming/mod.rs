//! Name and ticker synthesis
//!
//! Both synthesizers are ordered fallback chains whose last link cannot
//! fail, so a non-empty result is guaranteed for any input the pipeline can
//! produce.
//!
//! ```text
//! Name:   keyword+suffix → prefix+keyword → adjective+keyword → prefix+suffix
//! Symbol: segment initials [3,5] → vowel-stripped (≥3, ≤5) → first 5 chars
//! ```

mod alternatives;
mod name;
mod symbol;

pub use alternatives::{AlternativeName, DEFAULT_ALTERNATIVE_COUNT, generate_alternatives};
pub use name::{NameCandidate, NameStrategy, synthesize_name};
pub use symbol::{
    MAX_SYMBOL_LEN, MIN_SYMBOL_LEN, Symbol, SymbolDerivation, SymbolStrategy, derive_symbol,
    split_capitalized,
};
