//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`, and mock implementations are
//! auto-generated via `mockall` for testing.
//!
//! # Available Repositories
//!
//! - [`ShortUrlRepository`] - Short URL record persistence
//! - [`UserDirectory`] - Read-only user profile lookups

pub mod short_url_repository;
pub mod user_directory;

pub use short_url_repository::ShortUrlRepository;
pub use user_directory::UserDirectory;

#[cfg(test)]
pub use short_url_repository::MockShortUrlRepository;
#[cfg(test)]
pub use user_directory::MockUserDirectory;
