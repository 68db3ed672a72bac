//! Static asset catalogs
//!
//! Read-only tables the synthesizers and assembler select from. Lookups keyed
//! by [`Theme`](crate::theme::Theme) are exhaustive `match`es with a single
//! random-fallback arm for themes without a dedicated entry.

pub mod copy;
pub mod fragments;
pub mod knowledge;
pub mod palette;
pub mod style;

pub use fragments::{ADJECTIVES, PREFIXES, SUFFIXES};
pub use palette::{COLOR_PALETTES, ColorPalette, palette_for};
pub use style::{VISUAL_STYLES, visual_style_for};
