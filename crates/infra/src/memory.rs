//! In-memory user store for dev/test and as the reference backing store.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use userdesk_core::{DomainError, DomainResult, UserId};
use userdesk_users::{NewUser, User, UserUpdate};

use crate::repository::UserRepository;

/// In-memory repository backed by a `RwLock<HashMap>`.
///
/// Each call takes the lock once; nothing spans calls, so there are no
/// transaction semantics to honor. A poisoned lock surfaces as a storage
/// failure rather than a panic.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    inner: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn poisoned() -> DomainError {
        DomainError::storage("user store lock poisoned")
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new: NewUser) -> DomainResult<User> {
        new.validate()?;

        let now = Utc::now();
        let user = User {
            id: UserId::new(),
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
            created_at: now,
            updated_at: now,
        };

        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        map.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        Ok(map.get(&id).cloned())
    }

    async fn get_all(&self) -> DomainResult<Vec<User>> {
        let map = self.inner.read().map_err(|_| Self::poisoned())?;
        let mut users: Vec<User> = map.values().cloned().collect();
        // UUIDv7 ids are time-ordered, so this is creation order.
        users.sort_by_key(|u| u.id);
        Ok(users)
    }

    async fn update(&self, id: UserId, update: UserUpdate) -> DomainResult<bool> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        match map.get_mut(&id) {
            Some(user) => {
                update.apply_to(user, Utc::now());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: UserId) -> DomainResult<bool> {
        let mut map = self.inner.write().map_err(|_| Self::poisoned())?;
        Ok(map.remove(&id).is_some())
    }
}
