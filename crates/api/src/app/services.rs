use std::sync::Arc;

use userdesk_core::{DomainResult, UserId};
use userdesk_infra::{
    InMemoryUserRepository, MessageTemplate, Notifier, TracingNotifier, UserRepository,
};
use userdesk_users::{password, CreateUser, NewUser, User, UserUpdate};

/// Partial update as the service accepts it: a plaintext password here is
/// transformed before anything reaches the repository.
#[derive(Clone, Default)]
pub struct UpdateUser {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl core::fmt::Debug for UpdateUser {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UpdateUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Use-case orchestration over one repository instance.
///
/// Both collaborators are supplied at construction and held by trait, so the
/// service never knows which store or delivery channel is behind them.
pub struct UserService {
    repo: Arc<dyn UserRepository>,
    notifier: Arc<dyn Notifier>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    /// Transform the sensitive field, persist, then fire the welcome
    /// notification. Delivery failure never fails the creation.
    pub async fn create_user(&self, req: CreateUser) -> DomainResult<User> {
        if req.password.is_empty() {
            return Err(userdesk_core::DomainError::validation(
                "password is required",
            ));
        }

        let new = NewUser {
            name: req.name,
            email: req.email,
            password_hash: password::hash_password(&req.password),
        };
        let user = self.repo.create(new).await?;
        tracing::info!(user_id = %user.id, "user created");

        if let Err(e) = self
            .notifier
            .send(&user.email, MessageTemplate::Welcome)
            .await
        {
            tracing::warn!(user_id = %user.id, error = %e, "welcome notification failed");
        }

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        self.repo.get_by_id(id).await
    }

    pub async fn get_all_users(&self) -> DomainResult<Vec<User>> {
        self.repo.get_all().await
    }

    pub async fn update_user(&self, id: UserId, update: UpdateUser) -> DomainResult<bool> {
        let update = UserUpdate {
            name: update.name,
            email: update.email,
            password_hash: update.password.as_deref().map(password::hash_password),
        };
        let updated = self.repo.update(id, update).await?;
        if updated {
            tracing::info!(user_id = %id, "user updated");
        }
        Ok(updated)
    }

    pub async fn delete_user(&self, id: UserId) -> DomainResult<bool> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!(user_id = %id, "user deleted");
        }
        Ok(deleted)
    }
}

/// Services shared across handlers via `Extension`.
pub struct AppServices {
    pub users: UserService,
}

/// In-process wiring: in-memory store + logging notifier.
pub fn build_services() -> AppServices {
    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);

    AppServices {
        users: UserService::new(repo, notifier),
    }
}
