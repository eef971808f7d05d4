//! Post management

use std::sync::Arc;

use crate::error::Result;
use crate::gateway::{NewPost, PersistenceGateway, PostPatch};
use crate::models::Post;
use crate::response::Envelope;

/// Coordinates blog post CRUD through the persistence gateway.
#[derive(Clone)]
pub struct PostManager {
    gateway: Arc<dyn PersistenceGateway>,
}

impl PostManager {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self { gateway }
    }

    /// `author_id` is not validated against the users table; referential
    /// integrity is the store's concern.
    pub async fn add_post(&self, title: &str, content: &str, author_id: &str) -> Result<Envelope> {
        if title.is_empty() || content.is_empty() {
            return Ok(Envelope::fail("Title and content are required"));
        }

        self.gateway
            .create_post(NewPost {
                title: title.to_string(),
                content: content.to_string(),
                author_id: author_id.to_string(),
            })
            .await?;
        Ok(Envelope::ok("Post added successfully"))
    }

    /// Apply a partial update to a post.
    ///
    /// Empty strings count as absent, so a blank title cannot overwrite an
    /// existing one; at least one real change is required.
    pub async fn edit_post(
        &self,
        post_id: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> Result<Envelope> {
        let title = title.filter(|title| !title.is_empty());
        let content = content.filter(|content| !content.is_empty());

        if title.is_none() && content.is_none() {
            return Ok(Envelope::fail("Title or content required for update"));
        }

        let patch = PostPatch {
            title: title.map(|title| title.to_string()),
            content: content.map(|content| content.to_string()),
        };
        self.gateway.update_post(post_id, patch).await?;
        Ok(Envelope::ok("Post updated successfully"))
    }

    pub async fn remove_post(&self, post_id: &str) -> Result<Envelope> {
        self.gateway.delete_post(post_id).await?;
        Ok(Envelope::ok("Post deleted successfully"))
    }

    pub async fn list_posts(&self) -> Result<Envelope<Post>> {
        let posts = self.gateway.get_all_posts().await?;
        Ok(Envelope::ok_with_data("Posts fetched successfully", posts))
    }

    /// Unknown authors are not an error; the filter just matches nothing.
    pub async fn list_posts_by_author(&self, author_id: &str) -> Result<Envelope<Post>> {
        let posts = self.gateway.get_posts_by_author(author_id).await?;
        Ok(Envelope::ok_with_data(
            "Posts by author fetched successfully",
            posts,
        ))
    }
}
