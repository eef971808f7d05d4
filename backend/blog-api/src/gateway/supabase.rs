/// Supabase Persistence Gateway
///
/// Implements [`PersistenceGateway`] against a hosted Supabase project.
/// Table rows go through the PostgREST data API; user identities go through
/// the GoTrue auth API. Both are plain REST endpoints under the project URL,
/// authenticated with the service role key.
///
/// ## API Reference
///
/// PostgREST data API:
/// - Rows: GET/POST/PATCH/DELETE /rest/v1/{table}
/// - Filters: query parameters in `column=eq.value` form
///
/// GoTrue auth API:
/// - Sign up: POST /auth/v1/signup
/// - Admin email update: PUT /auth/v1/admin/users/{user_id}

use crate::config::SupabaseSettings;
use crate::error::{AppError, Result};
use crate::gateway::{
    NewComment, NewPost, PersistenceGateway, PostPatch, ProviderUser, SignUpResult,
};
use crate::models::{Comment, Like, Post, UserRecord};
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, info};

/// Supabase-backed persistence gateway
#[derive(Clone)]
pub struct SupabaseGateway {
    settings: SupabaseSettings,
    http: Client,
}

impl SupabaseGateway {
    pub fn new(settings: SupabaseSettings) -> Self {
        info!(url = %settings.url, "Supabase gateway initialized");

        Self {
            settings,
            http: Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.settings.url, table)
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.settings.url, path)
    }

    /// Start a request carrying the project credentials.
    ///
    /// Supabase expects the service key both as the `apikey` header and as
    /// a bearer token.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("apikey", &self.settings.key)
            .header("Authorization", format!("Bearer {}", self.settings.key))
    }

    /// Return the response untouched when Supabase reported success,
    /// otherwise read the body into the error detail.
    async fn expect_success(&self, action: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response body".to_string());

        error!(
            action = %action,
            status = %status,
            body = %body,
            "Supabase request failed"
        );

        Err(AppError::Gateway(format!(
            "{} failed ({}): {}",
            action, status, body
        )))
    }
}

#[async_trait]
impl PersistenceGateway for SupabaseGateway {
    async fn create_user(&self, email: &str, password: &str) -> Result<SignUpResult> {
        let url = self.auth_url("signup");

        debug!(url = %url, email = %email, "Signing up user with GoTrue");

        let response = self
            .request(Method::POST, &url)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Sign-up request failed: {}", e)))?;
        let response = self.expect_success("Sign-up", response).await?;

        let signup: SignUpResponse = response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse sign-up response: {}", e)))?;
        let user = signup.into_provider_user(email);

        // Mirror the identity into the users table so it is visible to the
        // data API. Skipped when the provider reported no created identity.
        if let Some(user) = &user {
            let insert = json!({
                "id": user.id.clone(),
                "email": user.email.clone(),
            });

            let response = self
                .request(Method::POST, &self.table_url("users"))
                .json(&insert)
                .send()
                .await
                .map_err(|e| AppError::Gateway(format!("User insert request failed: {}", e)))?;
            self.expect_success("User insert", response).await?;

            info!(
                user_id = %user.id,
                email = %user.email,
                "User registered and mirrored to users table"
            );
        }

        Ok(SignUpResult { user })
    }

    async fn get_all_users(&self) -> Result<Vec<UserRecord>> {
        let response = self
            .request(Method::GET, &self.table_url("users"))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Users fetch request failed: {}", e)))?;
        let response = self.expect_success("Users fetch", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse users response: {}", e)))
    }

    async fn update_user(&self, user_id: &str, email: &str) -> Result<()> {
        // Auth identity first, mirror table second. No rollback: a mirror
        // failure leaves the provider-side change in place.
        let url = self.auth_url(&format!("admin/users/{}", user_id));

        debug!(user_id = %user_id, "Updating user email in GoTrue");

        let response = self
            .request(Method::PUT, &url)
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Auth email update request failed: {}", e)))?;
        self.expect_success("Auth email update", response).await?;

        let filter = format!("eq.{}", user_id);
        let response = self
            .request(Method::PATCH, &self.table_url("users"))
            .query(&[("id", filter.as_str())])
            .json(&json!({ "email": email }))
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("User update request failed: {}", e)))?;
        self.expect_success("User update", response).await?;

        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        let filter = format!("eq.{}", user_id);
        let response = self
            .request(Method::DELETE, &self.table_url("users"))
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("User delete request failed: {}", e)))?;
        self.expect_success("User delete", response).await?;

        Ok(())
    }

    async fn create_post(&self, new_post: NewPost) -> Result<()> {
        let response = self
            .request(Method::POST, &self.table_url("posts"))
            .json(&new_post)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Post insert request failed: {}", e)))?;
        self.expect_success("Post insert", response).await?;

        Ok(())
    }

    async fn get_all_posts(&self) -> Result<Vec<Post>> {
        let response = self
            .request(Method::GET, &self.table_url("posts"))
            .query(&[("select", "*")])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Posts fetch request failed: {}", e)))?;
        let response = self.expect_success("Posts fetch", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse posts response: {}", e)))
    }

    async fn get_posts_by_author(&self, author_id: &str) -> Result<Vec<Post>> {
        let filter = format!("eq.{}", author_id);
        let response = self
            .request(Method::GET, &self.table_url("posts"))
            .query(&[("select", "*"), ("author_id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Author posts fetch request failed: {}", e)))?;
        let response = self.expect_success("Author posts fetch", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse posts response: {}", e)))
    }

    async fn update_post(&self, post_id: &str, patch: PostPatch) -> Result<()> {
        let filter = format!("eq.{}", post_id);
        let response = self
            .request(Method::PATCH, &self.table_url("posts"))
            .query(&[("id", filter.as_str())])
            .json(&patch)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Post update request failed: {}", e)))?;
        self.expect_success("Post update", response).await?;

        Ok(())
    }

    async fn delete_post(&self, post_id: &str) -> Result<()> {
        let filter = format!("eq.{}", post_id);
        let response = self
            .request(Method::DELETE, &self.table_url("posts"))
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Post delete request failed: {}", e)))?;
        self.expect_success("Post delete", response).await?;

        Ok(())
    }

    async fn create_comment(&self, new_comment: NewComment) -> Result<()> {
        let response = self
            .request(Method::POST, &self.table_url("comments"))
            .json(&new_comment)
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Comment insert request failed: {}", e)))?;
        self.expect_success("Comment insert", response).await?;

        Ok(())
    }

    async fn get_comments_by_post(&self, post_id: &str) -> Result<Vec<Comment>> {
        let filter = format!("eq.{}", post_id);
        let response = self
            .request(Method::GET, &self.table_url("comments"))
            .query(&[("select", "*"), ("post_id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Comments fetch request failed: {}", e)))?;
        let response = self.expect_success("Comments fetch", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse comments response: {}", e)))
    }

    async fn update_comment(&self, comment_id: &str, content: &str) -> Result<()> {
        let filter = format!("eq.{}", comment_id);
        let response = self
            .request(Method::PATCH, &self.table_url("comments"))
            .query(&[("id", filter.as_str())])
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Comment update request failed: {}", e)))?;
        self.expect_success("Comment update", response).await?;

        Ok(())
    }

    async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        let filter = format!("eq.{}", comment_id);
        let response = self
            .request(Method::DELETE, &self.table_url("comments"))
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Comment delete request failed: {}", e)))?;
        self.expect_success("Comment delete", response).await?;

        Ok(())
    }

    async fn like_post(&self, post_id: &str, user_id: &str) -> Result<()> {
        debug!(post_id = %post_id, user_id = %user_id, "Recording like");

        // merge-duplicates upserts on the (post_id, user_id) primary key,
        // so a repeated like merges into the existing row.
        let response = self
            .request(Method::POST, &self.table_url("likes"))
            .header("Prefer", "resolution=merge-duplicates")
            .json(&json!({ "post_id": post_id, "user_id": user_id }))
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Like insert request failed: {}", e)))?;
        self.expect_success("Like insert", response).await?;

        Ok(())
    }

    async fn unlike_post(&self, post_id: &str, user_id: &str) -> Result<()> {
        let post_filter = format!("eq.{}", post_id);
        let user_filter = format!("eq.{}", user_id);
        let response = self
            .request(Method::DELETE, &self.table_url("likes"))
            .query(&[
                ("post_id", post_filter.as_str()),
                ("user_id", user_filter.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Like delete request failed: {}", e)))?;
        self.expect_success("Like delete", response).await?;

        Ok(())
    }

    async fn get_likes_by_post(&self, post_id: &str) -> Result<Vec<Like>> {
        let filter = format!("eq.{}", post_id);
        let response = self
            .request(Method::GET, &self.table_url("likes"))
            .query(&[("select", "*"), ("post_id", filter.as_str())])
            .send()
            .await
            .map_err(|e| AppError::Gateway(format!("Likes fetch request failed: {}", e)))?;
        let response = self.expect_success("Likes fetch", response).await?;

        response
            .json()
            .await
            .map_err(|e| AppError::Gateway(format!("Failed to parse likes response: {}", e)))
    }
}

// ===== Supabase API response types =====

/// Sign-up response from GoTrue
///
/// Depending on project settings GoTrue either nests the identity under
/// `user` (auto-confirm flows return a session) or returns it at the top
/// level (email confirmation flows). Both shapes normalize to the same
/// result.
#[derive(Debug, Deserialize)]
struct SignUpResponse {
    user: Option<GoTrueUser>,
    id: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    email: Option<String>,
}

impl SignUpResponse {
    fn into_provider_user(self, requested_email: &str) -> Option<ProviderUser> {
        if let Some(user) = self.user {
            let email = user.email.unwrap_or_else(|| requested_email.to_string());
            return Some(ProviderUser { id: user.id, email });
        }

        self.id.map(|id| ProviderUser {
            id,
            email: self.email.unwrap_or_else(|| requested_email.to_string()),
        })
    }
}
