//! Theme classification
//!
//! A [`Theme`] is the thematic category an idea is branded under. Exactly one
//! theme is selected per idea by [`classify`], which is pure and
//! deterministic: the trigger table's order is the tie-break.
//!
//! ```text
//! idea text ──► keyword scoring ──► best score > 0? ──yes──► theme
//!                                        │ no
//!                                        ▼
//!                          theme name appears in text? ──yes──► theme
//!                                        │ no
//!                                        ▼
//!                                  Theme::default() (DeFi)
//! ```

mod classifier;
mod entities;

pub use classifier::{THEME_TRIGGERS, classify, score};
pub use entities::Theme;
