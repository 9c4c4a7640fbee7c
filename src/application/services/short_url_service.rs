//! Short URL creation and retrieval service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::config::Config;
use crate::domain::entities::{ShortUrl, UserSnapshot};
use crate::domain::repositories::{ShortUrlRepository, UserDirectory};
use crate::error::AppError;
use crate::utils::base62;

/// Allocates short keys and assembles short URL records.
///
/// Each call is independent: the service holds no mutable state, only the
/// immutable [`Config`] and handles to its collaborators, so it can be shared
/// freely across concurrent callers. The store's insert-if-absent contract is
/// the only uniqueness guarantee relied upon.
pub struct ShortUrlService<S: ShortUrlRepository, U: UserDirectory> {
    store: Arc<S>,
    users: Arc<U>,
    config: Config,
}

impl<S: ShortUrlRepository, U: UserDirectory> ShortUrlService<S, U> {
    /// Creates a new service.
    pub fn new(store: Arc<S>, users: Arc<U>, config: Config) -> Self {
        Self {
            store,
            users,
            config,
        }
    }

    /// Creates a short URL record for `original_url`.
    ///
    /// An empty `custom_alias` or `username` is treated as absent. When an
    /// alias is supplied it is used verbatim as the key after a uniqueness
    /// check; otherwise a key is generated with up to
    /// [`Config::max_short_url_retry`] attempts.
    ///
    /// The requested lifetime is `expiration_seconds` if supplied, else the
    /// configured default in days, and is clamped to the configured maximum
    /// in days.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidArgument`] - empty `original_url`, or an alias
    ///   longer than the configured key length
    /// - [`AppError::AliasConflict`] - the alias is already taken
    /// - [`AppError::RetryExhausted`] - every generated candidate collided
    /// - [`AppError::StorageUnavailable`] - the store or directory failed
    pub async fn create_short_url(
        &self,
        original_url: &str,
        custom_alias: Option<&str>,
        username: Option<&str>,
        expiration_seconds: Option<i64>,
    ) -> Result<ShortUrl, AppError> {
        if original_url.is_empty() {
            return Err(AppError::invalid_argument(
                "original url must not be empty",
            ));
        }

        let alias = custom_alias.filter(|a| !a.is_empty());
        if let Some(alias) = alias {
            if alias.len() > self.config.short_key_length {
                return Err(AppError::invalid_argument(format!(
                    "custom alias '{}' exceeds the short key length of {}",
                    alias, self.config.short_key_length
                )));
            }
            // Aliases are caller-owned: reject a taken one before doing any
            // further work.
            if self.store.exists_by_key(alias).await? {
                return Err(AppError::AliasConflict(alias.to_string()));
            }
        }

        let user = self.snapshot_user(username).await?;
        let created_at = Utc::now();
        let expires_at = created_at + self.clamped_lifetime(expiration_seconds);

        match alias {
            Some(alias) => {
                self.create_with_alias(original_url, alias, user, created_at, expires_at)
                    .await
            }
            None => {
                self.create_with_generated_key(original_url, user, created_at, expires_at)
                    .await
            }
        }
    }

    /// Retrieves a record by its short key.
    ///
    /// A pure lookup with no side effects. Expiration is not enforced here:
    /// an expired-but-present record is returned unchanged, leaving the
    /// redirect decision to the caller.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidArgument`] - empty `short_key`
    /// - [`AppError::StorageUnavailable`] - the store failed
    pub async fn get_short_url(&self, short_key: &str) -> Result<Option<ShortUrl>, AppError> {
        if short_key.is_empty() {
            return Err(AppError::invalid_argument("short key must not be empty"));
        }

        self.store.find_by_key(short_key).await
    }

    /// Persists a record under a caller-owned alias, already checked free.
    ///
    /// No retry: the alias is not ours to vary, so a late insert conflict
    /// surfaces as [`AppError::AliasConflict`] just like the pre-check.
    async fn create_with_alias(
        &self,
        original_url: &str,
        alias: &str,
        user: Option<UserSnapshot>,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<ShortUrl, AppError> {
        let record = ShortUrl {
            short_key: alias.to_string(),
            original_url: original_url.to_string(),
            custom_alias: Some(alias.to_string()),
            user,
            created_at,
            expires_at,
        };

        self.store.insert(record).await.map_err(|e| match e {
            AppError::StorageConflict(_) => AppError::AliasConflict(alias.to_string()),
            other => other,
        })
    }

    /// Allocates a generated key and persists the record.
    ///
    /// Each attempt draws a fresh seed, encodes it, and checks the store;
    /// the first free candidate is inserted. A conflict surfacing at insert
    /// time (the check-then-write race) consumes an attempt from the same
    /// budget instead of failing the call.
    async fn create_with_generated_key(
        &self,
        original_url: &str,
        user: Option<UserSnapshot>,
        created_at: DateTime<Utc>,
        expires_at: DateTime<Utc>,
    ) -> Result<ShortUrl, AppError> {
        let max_retry = self.config.max_short_url_retry;

        for _ in 0..max_retry {
            let short_key =
                base62::encode(base62::time_ordered_seed(), self.config.short_key_length);

            if self.store.exists_by_key(&short_key).await? {
                continue;
            }

            let record = ShortUrl {
                short_key,
                original_url: original_url.to_string(),
                custom_alias: None,
                user: user.clone(),
                created_at,
                expires_at,
            };

            match self.store.insert(record).await {
                Ok(saved) => return Ok(saved),
                Err(AppError::StorageConflict(_)) => continue,
                Err(other) => return Err(other),
            }
        }

        Err(AppError::RetryExhausted {
            attempts: max_retry,
        })
    }

    /// Looks up the user and freezes their fields, if a username was given.
    ///
    /// An unknown user is not an error; the snapshot is simply absent.
    async fn snapshot_user(
        &self,
        username: Option<&str>,
    ) -> Result<Option<UserSnapshot>, AppError> {
        let Some(username) = username.filter(|u| !u.is_empty()) else {
            return Ok(None);
        };

        let profile = self.users.find_by_username(username).await?;
        Ok(profile.as_ref().map(UserSnapshot::from))
    }

    /// Resolves the requested lifetime against the configured bounds.
    fn clamped_lifetime(&self, expiration_seconds: Option<i64>) -> Duration {
        let requested = match expiration_seconds {
            Some(seconds) => Duration::seconds(seconds),
            None => Duration::days(self.config.default_url_expiration_days),
        };

        if requested.num_days() > self.config.max_url_expiration_days {
            Duration::days(self.config.max_url_expiration_days)
        } else {
            requested
        }
    }
}
