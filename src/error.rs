//! Error taxonomy shared across the crate.
//!
//! Every fallible operation in the domain, application, and infrastructure
//! layers returns [`AppError`]. The variants are deliberately coarse: each one
//! maps to a distinct caller-visible outcome, so a boundary layer (HTTP, CLI,
//! queue consumer) can translate them without inspecting message strings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied input was rejected before any store access.
    ///
    /// Covers an empty original URL, an empty lookup key, and a custom alias
    /// longer than the configured short-key length. Never retried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested custom alias is already taken.
    ///
    /// Custom aliases are caller-owned, so there is nothing to retry; the
    /// caller must pick a different alias.
    #[error("custom alias '{0}' is already in use")]
    AliasConflict(String),

    /// Generated-key allocation ran out of attempts.
    ///
    /// Each attempt drew a fresh candidate and found it taken. Surfaced as a
    /// distinct kind so the boundary layer can map it to a specific response.
    #[error("failed to allocate a unique short key after {attempts} attempts")]
    RetryExhausted { attempts: u32 },

    /// The store rejected an insert because the key already exists.
    ///
    /// This is the narrow race window between the uniqueness check and the
    /// write. The allocator folds it back into alias-conflict or retry
    /// handling; it only escapes to callers of the repository directly.
    #[error("storage conflict: key '{0}' already exists")]
    StorageConflict(String),

    /// The store could not serve the request at all.
    ///
    /// Passed through as a terminal error; outage retries are the store
    /// implementation's responsibility, not the allocator's.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
