//! # Configuration Module
//!
//! Centralizes the crate's tunable constants. Values that depend on each
//! other live side by side with their relationships documented and, where
//! possible, enforced through compile-time assertions.
//!
//! ## Module Organization
//!
//! - [`constants`]: all numeric configuration values with dependency notes

pub mod constants;
pub use constants::*;
