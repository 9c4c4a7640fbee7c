//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure; repository traits
//! define contracts implemented by [`crate::infrastructure::persistence`] and
//! by mockall doubles in service tests.

pub mod entities;
pub mod repositories;
