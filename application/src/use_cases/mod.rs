//! Use cases (application services)
//!
//! Each use case orchestrates domain logic and ports for one user-facing
//! operation.

pub mod check_uniqueness;
pub mod generate_branding;
pub mod lookup_token;
pub(crate) mod shared;
