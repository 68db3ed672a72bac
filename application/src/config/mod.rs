//! Application-level configuration.
//!
//! - [`GenerationParams`]: idea bounds, confidence, network timeouts

pub mod generation_params;

pub use generation_params::GenerationParams;
