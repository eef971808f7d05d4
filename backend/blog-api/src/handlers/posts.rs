/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author_id: String,
}

/// Both fields optional: a partial update touches only what is present.
#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// POST /posts - create a new post
pub async fn create_post(
    state: web::Data<AppState>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let envelope = state
        .posts
        .add_post(&req.title, &req.content, &req.author_id)
        .await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /posts - list all posts
pub async fn list_posts(state: web::Data<AppState>) -> Result<HttpResponse> {
    let envelope = state.posts.list_posts().await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /posts/author/{author_id} - list posts by one author
pub async fn list_posts_by_author(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let author_id = path.into_inner();

    let envelope = state.posts.list_posts_by_author(&author_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// PUT /posts/{post_id} - partially update a post
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    let envelope = state
        .posts
        .edit_post(&post_id, req.title.as_deref(), req.content.as_deref())
        .await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// DELETE /posts/{post_id} - remove a post
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    let envelope = state.posts.remove_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}
