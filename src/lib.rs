//! # Shortener Core
//!
//! The short-key allocation core of a URL shortening service: given a long
//! URL it produces a short, unique, fixed-length key that maps back to the
//! original, optionally under a caller-chosen alias, optionally tagged with a
//! snapshot of the owning user, with a bounded expiration.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Core entities and repository traits
//! - **Application Layer** ([`application`]) - The short-key allocator service
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository
//!   implementations
//!
//! Transport, serialization, and the concrete storage schema are deliberately
//! out of scope: the crate consumes a key-value store and a user directory
//! purely through the traits in [`domain::repositories`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use shortener_core::config;
//! use shortener_core::prelude::*;
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = config::load_from_env()?;
//! let store = Arc::new(InMemoryShortUrlStore::new());
//! let users = Arc::new(InMemoryUserDirectory::new());
//! let service = ShortUrlService::new(store, users, config);
//!
//! let record = service
//!     .create_short_url("https://example.com/some/long/path", None, None, None)
//!     .await?;
//! assert_eq!(record.short_key.len(), 7);
//! # Ok(())
//! # }
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use config::Config;
pub use error::AppError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::ShortUrlService;
    pub use crate::config::Config;
    pub use crate::domain::entities::{ShortUrl, UserProfile, UserSnapshot};
    pub use crate::domain::repositories::{ShortUrlRepository, UserDirectory};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{InMemoryShortUrlStore, InMemoryUserDirectory};
}
