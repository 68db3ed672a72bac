//! Core domain concepts shared across all subdomains.
//!
//! - [`idea::ProjectIdea`]: a validated free-text project description
//! - [`random`]: helpers for seedable catalog selection
//! - [`validation`]: rules for caller-supplied names and tickers
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod idea;
pub mod random;
pub mod string;
pub mod validation;
