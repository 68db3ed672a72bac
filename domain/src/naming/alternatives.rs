//! Alternative name suggestions

use super::name::NameStrategy;
use super::symbol::{Symbol, derive_symbol};
use crate::core::error::DomainError;
use crate::core::random::pick;
use crate::theme::Theme;
use rand::Rng;
use serde::Serialize;

/// Number of alternatives offered when the caller does not ask for a count
pub const DEFAULT_ALTERNATIVE_COUNT: usize = 5;

/// A catalog-only name/ticker pair with a randomly assigned theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlternativeName {
    pub name: String,
    pub symbol: Symbol,
    pub theme: Theme,
}

/// Generate `count` prefix+suffix alternatives.
///
/// These ignore the idea text entirely; they are quick inspiration, not a
/// replacement for the main pipeline.
pub fn generate_alternatives<R: Rng + ?Sized>(
    count: usize,
    rng: &mut R,
) -> Result<Vec<AlternativeName>, DomainError> {
    (0..count)
        .map(|_| {
            let name = NameStrategy::PrefixSuffix
                .attempt(&[], rng)
                .unwrap_or_default();
            let symbol = derive_symbol(&name)?.symbol;
            let theme = *pick(rng, &Theme::ALL[..]);
            Ok(AlternativeName {
                name,
                symbol,
                theme,
            })
        })
        .collect()
}
