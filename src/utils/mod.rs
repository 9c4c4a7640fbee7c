//! Utility functions shared across the crate.
//!
//! - [`base62`] - Base-62 identifier codec and seed source

pub mod base62;
