/// Like handlers - HTTP endpoints for like operations
///
/// Like mutations never fail validation, so unlike the other entities
/// there is no 400 path here; the envelope goes back as-is.
use actix_web::{web, HttpResponse};

use crate::error::Result;
use crate::AppState;

/// POST /likes/{post_id}/{user_id} - like a post
pub async fn like_post(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id, user_id) = path.into_inner();

    let envelope = state.likes.like_post(&post_id, &user_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// DELETE /likes/{post_id}/{user_id} - remove a like
pub async fn unlike_post(
    state: web::Data<AppState>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse> {
    let (post_id, user_id) = path.into_inner();

    let envelope = state.likes.unlike_post(&post_id, &user_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /likes/{post_id} - list likes on a post
pub async fn list_likes_for_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let post_id = path.into_inner();

    let envelope = state.likes.list_likes_for_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}
