//! Cart collection operations with ownership scoping.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{CartEntry, NewCartEntry};
use crate::domain::repositories::CartRepository;
use crate::error::AppError;

/// Service for the cart collection.
///
/// The scope of every operation is the authenticated identity. A caller may
/// echo their own email in the list query for compatibility, but a scope
/// that names anyone else is rejected outright rather than silently
/// rebound.
pub struct CartService {
    carts: Arc<dyn CartRepository>,
}

impl CartService {
    /// Creates a new cart service.
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    /// Lists the caller's cart entries.
    ///
    /// `requested_scope` is the optional `?email=` query value; it must
    /// match `claim_email` when present.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] when the requested scope is another
    /// identity, [`AppError::Internal`] on store errors.
    pub async fn list_for(
        &self,
        claim_email: &str,
        requested_scope: Option<&str>,
    ) -> Result<Vec<CartEntry>, AppError> {
        if let Some(requested) = requested_scope {
            if requested != claim_email {
                tracing::warn!(
                    claim = %claim_email,
                    requested = %requested,
                    "Cart list scope mismatch"
                );
                return Err(AppError::forbidden(
                    "Cart entries are only visible to their owner",
                    json!({}),
                ));
            }
        }

        self.carts.list_by_owner(claim_email).await
    }

    /// Adds an entry to the caller's cart.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn add(
        &self,
        owner_email: &str,
        menu_item_id: Option<i64>,
        name: String,
        image: String,
        price: f64,
    ) -> Result<CartEntry, AppError> {
        self.carts
            .create(NewCartEntry {
                owner_email: owner_email.to_string(),
                menu_item_id,
                name,
                image,
                price,
            })
            .await
    }

    /// Removes an entry from the caller's cart. Returns `false` when the
    /// entry does not exist or belongs to someone else.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on store errors.
    pub async fn remove(&self, id: i64, owner_email: &str) -> Result<bool, AppError> {
        self.carts.delete(id, owner_email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockCartRepository;

    #[tokio::test]
    async fn test_list_rejects_foreign_scope() {
        let mut mock_repo = MockCartRepository::new();
        // The store is never consulted for a rejected scope.
        mock_repo.expect_list_by_owner().times(0);

        let service = CartService::new(Arc::new(mock_repo));

        let result = service
            .list_for("alice@example.com", Some("bob@example.com"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_list_accepts_own_scope() {
        let mut mock_repo = MockCartRepository::new();
        mock_repo
            .expect_list_by_owner()
            .withf(|owner| owner == "alice@example.com")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CartService::new(Arc::new(mock_repo));

        let entries = service
            .list_for("alice@example.com", Some("alice@example.com"))
            .await
            .unwrap();
        assert!(entries.is_empty());
    }

    #[tokio::test]
    async fn test_list_defaults_to_claim_scope() {
        let mut mock_repo = MockCartRepository::new();
        mock_repo
            .expect_list_by_owner()
            .withf(|owner| owner == "alice@example.com")
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = CartService::new(Arc::new(mock_repo));

        service.list_for("alice@example.com", None).await.unwrap();
    }
}
