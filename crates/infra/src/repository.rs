//! Persistence port between the domain layer and the backing store.

use userdesk_core::{DomainResult, UserId};
use userdesk_users::{NewUser, User, UserUpdate};

/// Port for user persistence.
///
/// The service layer holds this trait object and never a concrete store.
/// Absence is not an error: reads answer with `Option`, mutations with a
/// `bool` that is `false` when the id does not exist. The `Err` channel is
/// reserved for validation failures on `create` and for backing-store
/// failures, which propagate untouched.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    /// Validate, assign a fresh identity, and persist.
    async fn create(&self, new: NewUser) -> DomainResult<User>;

    /// Look up one user. `Ok(None)` when the id was never created or was
    /// deleted.
    async fn get_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// Snapshot of all users at call time, ordered by id (creation order).
    async fn get_all(&self) -> DomainResult<Vec<User>>;

    /// Apply a partial change set. `Ok(false)` leaves state untouched.
    async fn update(&self, id: UserId, update: UserUpdate) -> DomainResult<bool>;

    /// Remove a user. Second delete of the same id answers `Ok(false)`.
    async fn delete(&self, id: UserId) -> DomainResult<bool>;
}
