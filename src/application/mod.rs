//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository
//! calls, validation, and business rules. Services consume repository traits
//! and stay agnostic of how those traits are implemented.
//!
//! # Available Services
//!
//! - [`services::short_url_service::ShortUrlService`] - Short key allocation
//!   and record retrieval

pub mod services;
