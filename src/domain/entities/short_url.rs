//! Short URL entity mapping a fixed-length key to its original URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::UserSnapshot;

/// A shortened URL record.
///
/// The record is written exactly once; none of its fields mutate afterwards.
/// `expires_at` is advisory metadata for an external reaper or redirect
/// layer, not an existence filter: uniqueness checks and lookups treat
/// expired records the same as live ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShortUrl {
    /// The unique fixed-length lookup key, generated or caller-supplied.
    pub short_key: String,
    /// The redirect target.
    pub original_url: String,
    /// Equals `short_key` when the caller supplied an alias, else `None`.
    pub custom_alias: Option<String>,
    /// Snapshot of the owning user taken at creation time, if any.
    pub user: Option<UserSnapshot>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl ShortUrl {
    /// Returns true if the record has passed its expiry time.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
