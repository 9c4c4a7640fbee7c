//! In-memory implementations of the repository traits.
//!
//! The reference store for tests and embedded use. Both maps live behind an
//! `RwLock`; [`InMemoryShortUrlStore::insert`] performs its presence check
//! and write under one write-lock acquisition, so it is a true
//! insert-if-absent: of two racing writers of the same key, exactly one
//! succeeds and the other sees [`AppError::StorageConflict`].

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::entities::{ShortUrl, UserProfile};
use crate::domain::repositories::{ShortUrlRepository, UserDirectory};
use crate::error::AppError;

/// In-memory short URL store keyed by short key.
#[derive(Debug, Default)]
pub struct InMemoryShortUrlStore {
    records: RwLock<HashMap<String, ShortUrl>>,
}

impl InMemoryShortUrlStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.read().map(|map| map.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(what: &str) -> AppError {
    AppError::StorageUnavailable(format!("{} lock poisoned", what))
}

#[async_trait]
impl ShortUrlRepository for InMemoryShortUrlStore {
    async fn exists_by_key(&self, key: &str) -> Result<bool, AppError> {
        let records = self.records.read().map_err(|_| poisoned("record"))?;
        Ok(records.contains_key(key))
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<ShortUrl>, AppError> {
        let records = self.records.read().map_err(|_| poisoned("record"))?;
        Ok(records.get(key).cloned())
    }

    async fn insert(&self, record: ShortUrl) -> Result<ShortUrl, AppError> {
        let mut records = self.records.write().map_err(|_| poisoned("record"))?;

        if records.contains_key(&record.short_key) {
            tracing::debug!(key = %record.short_key, "insert rejected, key taken");
            return Err(AppError::StorageConflict(record.short_key));
        }

        tracing::debug!(key = %record.short_key, "record inserted");
        records.insert(record.short_key.clone(), record.clone());
        Ok(record)
    }
}

/// In-memory user directory keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<String, UserProfile>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a profile, replacing any previous one for the username.
    pub fn add_user(&self, profile: UserProfile) {
        if let Ok(mut users) = self.users.write() {
            users.insert(profile.username.clone(), profile);
        }
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>, AppError> {
        let users = self.users.read().map_err(|_| poisoned("user"))?;
        Ok(users.get(username).cloned())
    }
}
