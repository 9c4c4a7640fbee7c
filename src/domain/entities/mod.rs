//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`ShortUrl`] - A shortened URL record
//! - [`UserProfile`] - A user as served by the external directory
//! - [`UserSnapshot`] - Profile fields frozen into a record at creation

pub mod short_url;
pub mod user;

pub use short_url::ShortUrl;
pub use user::{UserProfile, UserSnapshot};
