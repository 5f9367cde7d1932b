//! Idempotent user registration.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Result of a registration attempt.
///
/// `AlreadyRegistered` is a normal outcome, not an error: repeating a
/// registration with the same email is a no-op by contract.
#[derive(Debug)]
pub enum RegisterOutcome {
    Created(User),
    AlreadyRegistered,
}

/// Service for creating user accounts.
///
/// Every account starts with role `user` and receives the next value of a
/// monotonic sequence as its customer-facing id. Uniqueness is enforced by
/// the store, not by the lookup here: the lookup is only a fast path, and a
/// concurrent registration that wins the race surfaces as the same
/// `AlreadyRegistered` outcome.
pub struct RegistrationService {
    users: Arc<dyn UserRepository>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Registers a user, or reports that the email is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn register(&self, new_user: NewUser) -> Result<RegisterOutcome, AppError> {
        if self.users.find_by_email(&new_user.email).await?.is_some() {
            return Ok(RegisterOutcome::AlreadyRegistered);
        }

        match self.users.create(new_user).await? {
            Some(user) => {
                tracing::info!(
                    email = %user.email,
                    sequential_id = user.sequential_id,
                    "User registered"
                );
                Ok(RegisterOutcome::Created(user))
            }
            // Another registration for the same email won the race.
            None => Ok(RegisterOutcome::AlreadyRegistered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::MockUserRepository;
    use chrono::Utc;

    fn sample_user(email: &str, sequential_id: i64) -> User {
        User {
            id: sequential_id,
            email: email.to_string(),
            name: Some("Alice".to_string()),
            photo_url: None,
            sequential_id,
            role: Role::User,
            created_at: Utc::now(),
        }
    }

    fn sample_new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            name: Some("Alice".to_string()),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .times(1)
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Ok(Some(sample_user("alice@example.com", 1))));

        let service = RegistrationService::new(Arc::new(mock_repo));

        let outcome = service
            .register(sample_new_user("alice@example.com"))
            .await
            .unwrap();

        match outcome {
            RegisterOutcome::Created(user) => {
                assert_eq!(user.email, "alice@example.com");
                assert_eq!(user.role, Role::User);
            }
            RegisterOutcome::AlreadyRegistered => panic!("expected creation"),
        }
    }

    #[tokio::test]
    async fn test_register_existing_is_noop() {
        let mut mock_repo = MockUserRepository::new();

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user("alice@example.com", 1))));
        // No create call: the fast path short-circuits without mutation.
        mock_repo.expect_create().times(0);

        let service = RegistrationService::new(Arc::new(mock_repo));

        let outcome = service
            .register(sample_new_user("alice@example.com"))
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::AlreadyRegistered));
    }

    #[tokio::test]
    async fn test_register_lost_race_reports_existing() {
        let mut mock_repo = MockUserRepository::new();

        // The lookup misses but the insert hits the unique constraint.
        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        mock_repo.expect_create().times(1).returning(|_| Ok(None));

        let service = RegistrationService::new(Arc::new(mock_repo));

        let outcome = service
            .register(sample_new_user("alice@example.com"))
            .await
            .unwrap();

        assert!(matches!(outcome, RegisterOutcome::AlreadyRegistered));
    }
}
