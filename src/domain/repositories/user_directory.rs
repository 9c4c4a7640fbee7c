//! Lookup trait for the external user directory.

use crate::domain::entities::UserProfile;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to user profiles.
///
/// The allocator only ever looks users up to snapshot their fields into a
/// record; it never creates or mutates them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Finds a profile by username.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UserProfile))` if found
    /// - `Ok(None)` if not found - an absent user is not an error
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the directory cannot answer.
    async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>, AppError>;
}
