//! Persistence gateway abstraction
//!
//! Every read and write the managers perform goes through the
//! [`PersistenceGateway`] trait. The production implementation
//! ([`supabase::SupabaseGateway`]) talks to a hosted Supabase project over
//! REST; tests substitute in-memory implementations.

pub mod supabase;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;
use crate::models::{Comment, Like, Post, UserRecord};

/// Identity reported by the auth provider after a sign-up attempt
#[derive(Debug, Clone)]
pub struct ProviderUser {
    pub id: String,
    pub email: String,
}

/// Outcome of a sign-up attempt
///
/// `user` is `None` when the provider accepted the request but did not
/// report a created identity; the managers treat that as a failed creation.
#[derive(Debug, Clone)]
pub struct SignUpResult {
    pub user: Option<ProviderUser>,
}

/// Fields for a new post; serializes directly as the insert payload
#[derive(Debug, Clone, Serialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

/// Fields for a new comment; serializes directly as the insert payload
#[derive(Debug, Clone, Serialize)]
pub struct NewComment {
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

/// Partial update for a post
///
/// Callers must populate at least one field; absent fields are left
/// untouched by the store.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PostPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Storage operations backing the four entity managers.
///
/// Writes addressed at rows that do not exist are not errors: updates and
/// deletes of absent rows simply match nothing, and liking an already-liked
/// post leaves the single existing row in place. Referential integrity is
/// the store's concern; the gateway does not pre-check that a referenced
/// post or user exists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceGateway: Send + Sync {
    /// Register an identity with the auth provider and mirror it into the
    /// `users` table. The mirror insert only happens when the provider
    /// reported a created identity.
    async fn create_user(&self, email: &str, password: &str) -> Result<SignUpResult>;

    async fn get_all_users(&self) -> Result<Vec<UserRecord>>;

    /// Change a user's email at the auth provider, then in the mirror
    /// table. The two writes happen in order with no rollback: a mirror
    /// failure after a successful provider update leaves the provider
    /// change in place.
    async fn update_user(&self, user_id: &str, email: &str) -> Result<()>;

    async fn delete_user(&self, user_id: &str) -> Result<()>;

    async fn create_post(&self, new_post: NewPost) -> Result<()>;

    async fn get_all_posts(&self) -> Result<Vec<Post>>;

    async fn get_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>>;

    async fn update_post(&self, post_id: &str, patch: PostPatch) -> Result<()>;

    async fn delete_post(&self, post_id: &str) -> Result<()>;

    async fn create_comment(&self, new_comment: NewComment) -> Result<()>;

    async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>>;

    async fn update_comment(&self, comment_id: &str, content: &str) -> Result<()>;

    async fn delete_comment(&self, comment_id: &str) -> Result<()>;

    /// Record that a user likes a post. Repeating the call for the same
    /// pair is a no-op, never a duplicate row and never an error.
    async fn like_post(&self, post_id: &str, user_id: &str) -> Result<()>;

    async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<()>;

    async fn get_likes_by_post(&self, post_id: &str) -> Result<Vec<Like>>;
}
