/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub post_id: String,
    pub user_id: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCommentRequest {
    pub content: String,
}

/// POST /comments - add a comment to a post
pub async fn create_comment(
    state: web::Data<AppState>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let envelope = state
        .comments
        .add_comment(&req.post_id, &req.user_id, &req.content)
        .await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /comments/post/{post_id} - list comments on a post
pub async fn list_comments_for_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    let envelope = state.comments.list_comments_for_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// PUT /comments/{comment_id} - rewrite a comment's content
pub async fn update_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateCommentRequest>,
) -> Result<HttpResponse> {
    let comment_id = path.into_inner();

    let envelope = state.comments.edit_comment(&comment_id, &req.content).await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// DELETE /comments/{comment_id} - remove a comment
pub async fn delete_comment(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let comment_id = path.into_inner();

    let envelope = state.comments.remove_comment(&comment_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}
