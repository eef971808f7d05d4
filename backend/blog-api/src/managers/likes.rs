//! Like management

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::PersistenceGateway;
use crate::models::Like;
use crate::response::Envelope;

/// Coordinates like and unlike operations.
///
/// There is no validation tier here: identifiers pass through as-is, and
/// both mutations are idempotent at the store, so every call that reaches
/// the backend reports success.
#[derive(Clone)]
pub struct LikeManager {
    gateway: Arc<dyn PersistenceGateway>,
}

impl LikeManager {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn like_post(&self, post_id: &str, user_id: &str) -> Result<Envelope> {
        self.gateway.like_post(post_id, user_id).await?;
        Ok(Envelope::ok("Post liked successfully"))
    }

    pub async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<Envelope> {
        self.gateway.unlike_post(post_id, user_id).await?;
        Ok(Envelope::ok("Like removed successfully"))
    }

    pub async fn list_likes_for_post(&self, post_id: &str) -> Result<Envelope<Like>> {
        let likes = self.gateway.get_likes_by_post(post_id).await?;
        Ok(Envelope::ok_with_data("Likes fetched successfully", likes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::gateway::MockPersistenceGateway;
    use chrono::Utc;

    #[tokio::test]
    async fn like_post_passes_ids_to_gateway() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_like_post()
            .withf(|post_id, user_id| post_id == "post1" && user_id == "user1")
            .times(1)
            .returning(|_, _| Ok(()));

        let likes = LikeManager::new(Arc::new(gateway));
        let envelope = likes.like_post("post1", "user1").await.unwrap();

        assert!(envelope.success());
        assert_eq!(envelope.message(), "Post liked successfully");
    }

    #[tokio::test]
    async fn unlike_post_reports_success_even_without_a_like() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_unlike_post()
            .withf(|post_id, user_id| post_id == "post1" && user_id == "never-liked")
            .times(1)
            .returning(|_, _| Ok(()));

        let likes = LikeManager::new(Arc::new(gateway));
        let envelope = likes.unlike_post("post1", "never-liked").await.unwrap();

        assert!(envelope.success());
        assert_eq!(envelope.message(), "Like removed successfully");
    }

    #[tokio::test]
    async fn list_likes_wraps_rows_in_envelope() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_get_likes_by_post()
            .withf(|post_id| post_id == "post1")
            .times(1)
            .returning(|_| {
                Ok(vec![Like {
                    post_id: "post1".to_string(),
                    user_id: "user1".to_string(),
                    created_at: Utc::now(),
                }])
            });

        let likes = LikeManager::new(Arc::new(gateway));
        let envelope = likes.list_likes_for_post("post1").await.unwrap();

        assert!(envelope.success());
        assert_eq!(envelope.message(), "Likes fetched successfully");
        assert_eq!(envelope.data().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn like_post_propagates_gateway_faults() {
        let mut gateway = MockPersistenceGateway::new();
        gateway
            .expect_like_post()
            .times(1)
            .returning(|_, _| Err(AppError::Gateway("connection refused".to_string())));

        let likes = LikeManager::new(Arc::new(gateway));
        let err = likes.like_post("post1", "user1").await.unwrap_err();

        assert!(matches!(err, AppError::Gateway(_)));
    }
}
