use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use userdesk_core::{DomainError, DomainResult, Entity, UserId};

/// A persisted user record.
///
/// Identity is assigned by the repository on creation and never changes.
/// The password is stored only as its hash; the plaintext never gets here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &UserId {
        &self.id
    }
}

/// Raw creation request as it arrives at the service boundary.
///
/// Carries the plaintext password, so it is never persisted verbatim and its
/// `Debug` output redacts the sensitive field.
#[derive(Clone, Deserialize)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl core::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CreateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// What the repository receives: creation data with the password already
/// transformed. Required-field validation lives here and is enforced at the
/// repository boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    /// Check required attributes. `create` refuses to persist on failure.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name is required"));
        }
        if self.email.trim().is_empty() {
            return Err(DomainError::validation("email is required"));
        }
        if !self.email.contains('@') {
            return Err(DomainError::validation("email is malformed"));
        }
        if self.password_hash.is_empty() {
            return Err(DomainError::validation("password is required"));
        }
        Ok(())
    }
}

/// Partial change set for an existing user. `None` fields are left untouched;
/// an all-`None` update is a no-op that still reports success for an existing
/// id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password_hash: Option<String>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password_hash.is_none()
    }

    /// Apply the change set to a user in place, refreshing `updated_at`.
    ///
    /// An empty change set leaves the record untouched, timestamps included.
    pub fn apply_to(&self, user: &mut User, now: DateTime<Utc>) {
        if self.is_empty() {
            return;
        }
        if let Some(name) = &self.name {
            user.name = name.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(hash) = &self.password_hash {
            user.password_hash = hash.clone();
        }
        user.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::hash_password;

    fn valid_new_user() -> NewUser {
        NewUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: hash_password("pw"),
        }
    }

    #[test]
    fn validate_accepts_complete_data() {
        assert!(valid_new_user().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_name() {
        let mut new = valid_new_user();
        new.name = "   ".to_string();
        let err = new.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_rejects_malformed_email() {
        let mut new = valid_new_user();
        new.email = "not-an-email".to_string();
        assert!(new.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_password_hash() {
        let mut new = valid_new_user();
        new.password_hash = String::new();
        assert!(new.validate().is_err());
    }

    #[test]
    fn update_applies_only_present_fields() {
        let now = Utc::now();
        let mut user = User {
            id: UserId::new(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: hash_password("pw"),
            created_at: now,
            updated_at: now,
        };

        let later = now + chrono::Duration::seconds(5);
        let update = UserUpdate {
            name: Some("Anna".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut user, later);

        assert_eq!(user.name, "Anna");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.updated_at, later);
        assert_eq!(user.created_at, now);
    }

    #[test]
    fn empty_update_leaves_the_record_untouched() {
        let now = Utc::now();
        let mut user = User {
            id: UserId::new(),
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password_hash: hash_password("pw"),
            created_at: now,
            updated_at: now,
        };
        let before = user.clone();

        let later = now + chrono::Duration::seconds(5);
        UserUpdate::default().apply_to(&mut user, later);

        assert_eq!(user, before);
        assert_eq!(user.updated_at, now);
    }

    #[test]
    fn create_user_debug_redacts_password() {
        let req = CreateUser {
            name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            password: "pw".to_string(),
        };
        let rendered = format!("{req:?}");
        assert!(!rendered.contains("pw"));
        assert!(rendered.contains("<redacted>"));
    }
}
