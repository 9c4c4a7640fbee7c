//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer. The crate ships an
//! in-memory store; production deployments supply their own implementations
//! of the repository traits over whatever store they run.
//!
//! # Modules
//!
//! - [`persistence`] - Repository trait implementations

pub mod persistence;
