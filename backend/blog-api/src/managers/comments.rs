//! Comment management

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::{NewComment, PersistenceGateway};
use crate::models::Comment;
use crate::response::Envelope;

/// Coordinates comment CRUD through the persistence gateway.
///
/// Only the content field is validated; `post_id` and `user_id` pass
/// through untouched.
#[derive(Clone)]
pub struct CommentManager {
    gateway: Arc<dyn PersistenceGateway>,
}

impl CommentManager {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    pub async fn add_comment(
        &self,
        post_id: &str,
        user_id: &str,
        content: &str,
    ) -> Result<Envelope> {
        if content.is_empty() {
            return Ok(Envelope::fail("Comment content is required"));
        }

        self.gateway
            .create_comment(NewComment {
                post_id: post_id.to_string(),
                user_id: user_id.to_string(),
                content: content.to_string(),
            })
            .await?;
        Ok(Envelope::ok("Comment added successfully"))
    }

    pub async fn edit_comment(&self, comment_id: &str, content: &str) -> Result<Envelope> {
        if content.is_empty() {
            return Ok(Envelope::fail("Content is required to update comment"));
        }

        self.gateway.update_comment(comment_id, content).await?;
        Ok(Envelope::ok("Comment updated successfully"))
    }

    pub async fn remove_comment(&self, comment_id: &str) -> Result<Envelope> {
        self.gateway.delete_comment(comment_id).await?;
        Ok(Envelope::ok("Comment deleted successfully"))
    }

    pub async fn list_comments_for_post(&self, post_id: &str) -> Result<Envelope<Comment>> {
        let comments = self.gateway.get_comments_by_post(post_id).await?;
        Ok(Envelope::ok_with_data(
            "Comments fetched successfully",
            comments,
        ))
    }
}
