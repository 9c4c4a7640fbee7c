//! User profile and the denormalized snapshot embedded in short URL records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user profile as served by the external user directory.
///
/// Read-only from this crate's perspective: profiles are looked up, never
/// created or mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    pub last_login_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// An immutable copy of user profile fields taken when a record is created.
///
/// Deliberately a value, not a reference: later changes to the user's
/// profile never propagate into existing records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub username: String,
    pub email: String,
    pub last_login_date: Option<DateTime<Utc>>,
}

impl From<&UserProfile> for UserSnapshot {
    fn from(profile: &UserProfile) -> Self {
        Self {
            username: profile.username.clone(),
            email: profile.email.clone(),
            last_login_date: profile.last_login_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_copies_profile_fields() {
        let profile = UserProfile {
            username: "testuser".to_string(),
            email: "testuser@example.com".to_string(),
            last_login_date: Some(Utc::now()),
            created_at: Utc::now(),
        };

        let snapshot = UserSnapshot::from(&profile);

        assert_eq!(snapshot.username, profile.username);
        assert_eq!(snapshot.email, profile.email);
        assert_eq!(snapshot.last_login_date, profile.last_login_date);
    }
}
