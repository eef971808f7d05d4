//! Test gateways for integration tests
//!
//! `InMemoryGateway` simulates the Supabase backend (PostgREST tables plus
//! GoTrue identities) without any network, and records every call so tests
//! can assert which operations reached the backend. `FailingGateway` fails
//! every operation, standing in for an unreachable project.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use blog_api::error::{AppError, Result};
use blog_api::gateway::{
    NewComment, NewPost, PersistenceGateway, PostPatch, ProviderUser, SignUpResult,
};
use blog_api::models::{Comment, Like, Post, UserRecord};

#[derive(Default)]
struct Store {
    users: Vec<UserRecord>,
    posts: Vec<Post>,
    comments: Vec<Comment>,
    likes: Vec<Like>,
}

/// In-memory stand-in for the Supabase backend
#[derive(Default)]
pub struct InMemoryGateway {
    store: Mutex<Store>,
    calls: Mutex<Vec<&'static str>>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded calls for one operation name
    pub fn call_count(&self, operation: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| **name == operation)
            .count()
    }

    /// Total number of calls that reached the gateway
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(&self, operation: &'static str) {
        self.calls.lock().unwrap().push(operation);
    }
}

#[async_trait]
impl PersistenceGateway for InMemoryGateway {
    async fn create_user(&self, email: &str, _password: &str) -> Result<SignUpResult> {
        self.record("create_user");

        let user = ProviderUser {
            id: Uuid::new_v4().to_string(),
            email: email.to_string(),
        };
        self.store.lock().unwrap().users.push(UserRecord {
            id: user.id.clone(),
            email: user.email.clone(),
        });

        Ok(SignUpResult { user: Some(user) })
    }

    async fn get_all_users(&self) -> Result<Vec<UserRecord>> {
        self.record("get_all_users");
        Ok(self.store.lock().unwrap().users.clone())
    }

    async fn update_user(&self, user_id: &str, email: &str) -> Result<()> {
        self.record("update_user");

        let mut store = self.store.lock().unwrap();
        if let Some(user) = store.users.iter_mut().find(|user| user.id == user_id) {
            user.email = email.to_string();
        }

        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.record("delete_user");
        self.store.lock().unwrap().users.retain(|user| user.id != user_id);
        Ok(())
    }

    async fn create_post(&self, new_post: NewPost) -> Result<()> {
        self.record("create_post");
        self.store.lock().unwrap().posts.push(Post {
            id: Uuid::new_v4().to_string(),
            title: new_post.title,
            content: new_post.content,
            author_id: new_post.author_id,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        self.record("get_all_posts");
        Ok(self.store.lock().unwrap().posts.clone())
    }

    async fn get_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        self.record("get_posts_by_author");
        Ok(self
            .store
            .lock()
            .unwrap()
            .posts
            .iter()
            .filter(|post| post.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn update_post(&self, post_id: &str, patch: PostPatch) -> Result<()> {
        self.record("update_post");

        let mut store = self.store.lock().unwrap();
        if let Some(post) = store.posts.iter_mut().find(|post| post.id == post_id) {
            if let Some(title) = patch.title {
                post.title = title;
            }
            if let Some(content) = patch.content {
                post.content = content;
            }
        }

        Ok(())
    }

    async fn delete_post(&self, post_id: &str) -> Result<()> {
        self.record("delete_post");
        self.store.lock().unwrap().posts.retain(|post| post.id != post_id);
        Ok(())
    }

    async fn create_comment(&self, new_comment: NewComment) -> Result<()> {
        self.record("create_comment");
        self.store.lock().unwrap().comments.push(Comment {
            id: Uuid::new_v4().to_string(),
            post_id: new_comment.post_id,
            user_id: new_comment.user_id,
            content: new_comment.content,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        self.record("get_comments_by_post");
        Ok(self
            .store
            .lock()
            .unwrap()
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }

    async fn update_comment(&self, comment_id: &str, content: &str) -> Result<()> {
        self.record("update_comment");

        let mut store = self.store.lock().unwrap();
        if let Some(comment) = store
            .comments
            .iter_mut()
            .find(|comment| comment.id == comment_id)
        {
            comment.content = content.to_string();
        }

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.record("delete_comment");
        self.store
            .lock()
            .unwrap()
            .comments
            .retain(|comment| comment.id != comment_id);
        Ok(())
    }

    async fn like_post(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.record("like_post");

        let mut store = self.store.lock().unwrap();
        let already_liked = store
            .likes
            .iter()
            .any(|like| like.post_id == post_id && like.user_id == user_id);
        if !already_liked {
            store.likes.push(Like {
                post_id: post_id.to_string(),
                user_id: user_id.to_string(),
                created_at: Utc::now(),
            });
        }

        Ok(())
    }

    async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<()> {
        self.record("unlike_post");
        self.store
            .lock()
            .unwrap()
            .likes
            .retain(|like| !(like.post_id == post_id && like.user_id == user_id));
        Ok(())
    }

    async fn get_likes_by_post(&self, post_id: &str) -> Result<Vec<Like>> {
        self.record("get_likes_by_post");
        Ok(self
            .store
            .lock()
            .unwrap()
            .likes
            .iter()
            .filter(|like| like.post_id == post_id)
            .cloned()
            .collect())
    }
}

/// Gateway whose every operation fails, simulating an unreachable backend
pub struct FailingGateway;

fn backend_down() -> AppError {
    AppError::Gateway("Supabase unreachable".to_string())
}

#[async_trait]
impl PersistenceGateway for FailingGateway {
    async fn create_user(&self, _email: &str, _password: &str) -> Result<SignUpResult> {
        Err(backend_down())
    }

    async fn get_all_users(&self) -> Result<Vec<UserRecord>> {
        Err(backend_down())
    }

    async fn update_user(&self, _user_id: &str, _email: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn delete_user(&self, _user_id: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn create_post(&self, _new_post: NewPost) -> Result<()> {
        Err(backend_down())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        Err(backend_down())
    }

    async fn get_posts_by_author(&self, _author_id: &str) -> Result<Vec<Post>> {
        Err(backend_down())
    }

    async fn update_post(&self, _post_id: &str, _patch: PostPatch) -> Result<()> {
        Err(backend_down())
    }

    async fn delete_post(&self, _post_id: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn create_comment(&self, _new_comment: NewComment) -> Result<()> {
        Err(backend_down())
    }

    async fn get_comments_by_post(&self, _post_id: &str) -> Result<Vec<Comment>> {
        Err(backend_down())
    }

    async fn update_comment(&self, _comment_id: &str, _content: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn delete_comment(&self, _comment_id: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn like_post(&self, _post_id: &str, _user_id: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn unlike_post(&self, _post_id: &str, _user_id: &str) -> Result<()> {
        Err(backend_down())
    }

    async fn get_likes_by_post(&self, _post_id: &str) -> Result<Vec<Like>> {
        Err(backend_down())
    }
}
