/// User handlers - HTTP endpoints for user operations
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub email: String,
}

/// POST /users - register a new user
pub async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> Result<HttpResponse> {
    let envelope = state.users.add_user(&req.email, &req.password).await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// GET /users - list all users
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse> {
    let envelope = state.users.list_users().await?;
    Ok(HttpResponse::Ok().json(envelope))
}

/// PUT /users/{user_id} - change a user's email
pub async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
    req: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    let envelope = state.users.edit_user(&user_id, &req.email).await?;
    if !envelope.success() {
        return Err(AppError::Validation(envelope.message().to_string()));
    }

    Ok(HttpResponse::Ok().json(envelope))
}

/// DELETE /users/{user_id} - remove a user
pub async fn delete_user(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let user_id = path.into_inner();

    let envelope = state.users.remove_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(envelope))
}
