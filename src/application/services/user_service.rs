//! User lookups and administration.

use std::sync::Arc;

use crate::domain::entities::{Role, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for querying and administering user accounts.
///
/// The admin gate calls [`is_admin`] on every request; nothing here caches
/// role lookups, so a revocation applies to the very next request.
///
/// [`is_admin`]: UserService::is_admin
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(email).await
    }

    /// Returns whether the identity currently holds the admin role.
    ///
    /// A missing record reads as non-admin.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn is_admin(&self, email: &str) -> Result<bool, AppError> {
        let user = self.users.find_by_email(email).await?;
        Ok(user.is_some_and(|u| u.is_admin()))
    }

    /// Lists all users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn list(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Deletes a user by store-native id. Returns `false` on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        self.users.delete(id).await
    }

    /// Sets a user's role. Returns `false` if the email is unknown.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn set_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        let updated = self.users.update_role(email, role).await?;
        if updated {
            tracing::info!(email = %email, role = %role, "Role updated");
        }
        Ok(updated)
    }

    /// Checks store connectivity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.users.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn user_with_role(role: Role) -> User {
        User {
            id: 1,
            email: "alice@example.com".to_string(),
            name: None,
            photo_url: None,
            sequential_id: 1,
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_is_admin_true_for_admin_role() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Ok(Some(user_with_role(Role::Admin))));

        let service = UserService::new(Arc::new(mock_repo));
        assert!(service.is_admin("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_false_for_user_role() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_find_by_email()
            .returning(|_| Ok(Some(user_with_role(Role::User))));

        let service = UserService::new(Arc::new(mock_repo));
        assert!(!service.is_admin("alice@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_false_for_unknown_identity() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_find_by_email().returning(|_| Ok(None));

        let service = UserService::new(Arc::new(mock_repo));
        assert!(!service.is_admin("ghost@example.com").await.unwrap());
    }
}
