//! Branding records and their assembly
//!
//! [`synthesize_branding`] is the pure, offline half of the pipeline:
//!
//! ```text
//! idea ─► keywords ─► theme ─► name ─► symbol ─► BrandingAssembler ─► BrandingRecord
//! ```
//!
//! The network-dependent half (uniqueness, trending signals) lives in the
//! application layer.

mod assembler;
mod record;

pub use assembler::{BrandingAssembler, synthesize_branding};
pub use record::{BrandingRecord, DEFAULT_CONFIDENCE, Provenance};
