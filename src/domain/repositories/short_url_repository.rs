//! Repository trait for short URL persistence.

use crate::domain::entities::ShortUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Key-value persistence contract for short URL records.
///
/// The store is the single point of shared mutability in the system. The
/// allocator relies entirely on its consistency guarantees; the minimum bar
/// is that [`insert`](ShortUrlRepository::insert) rejects a second write for
/// a key that already exists.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryShortUrlStore`]
/// - Test mocks generated with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortUrlRepository: Send + Sync {
    /// Returns whether a record with the given key exists.
    ///
    /// Expiration is not considered: an expired record still occupies its key.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the store cannot answer.
    async fn exists_by_key(&self, key: &str) -> Result<bool, AppError>;

    /// Finds a record by its short key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the store cannot answer.
    async fn find_by_key(&self, key: &str) -> Result<Option<ShortUrl>, AppError>;

    /// Inserts a new record, returning the persisted copy.
    ///
    /// This is an insert-if-absent write: it must never overwrite an
    /// existing record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageConflict`] if the key is already taken,
    /// [`AppError::StorageUnavailable`] if the store cannot answer.
    async fn insert(&self, record: ShortUrl) -> Result<ShortUrl, AppError>;
}
