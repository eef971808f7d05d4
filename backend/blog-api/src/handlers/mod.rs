/// HTTP handlers - route table and per-entity endpoint modules
///
/// Mutations that come back from a manager with `success: false` are
/// validation rejections and map to HTTP 400, with the envelope message as
/// the error detail. Everything else is returned as HTTP 200 with the
/// envelope serialized unchanged.
use actix_web::{web, HttpResponse};
use serde_json::json;

pub mod comments;
pub mod likes;
pub mod posts;
pub mod users;

/// GET / - service banner
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Blog API is running!" }))
}

/// GET /health - liveness probe
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Register every route of the API on the given service config.
///
/// Used by `main` and by the HTTP tests so both run the same route table.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::list_users))
                .route("", web::post().to(users::create_user))
                .route("/{user_id}", web::put().to(users::update_user))
                .route("/{user_id}", web::delete().to(users::delete_user)),
        )
        .service(
            web::scope("/posts")
                .route("", web::get().to(posts::list_posts))
                .route("", web::post().to(posts::create_post))
                .route("/author/{author_id}", web::get().to(posts::list_posts_by_author))
                .route("/{post_id}", web::put().to(posts::update_post))
                .route("/{post_id}", web::delete().to(posts::delete_post)),
        )
        .service(
            web::scope("/comments")
                .route("", web::post().to(comments::create_comment))
                .route("/post/{post_id}", web::get().to(comments::list_comments_for_post))
                .route("/{comment_id}", web::put().to(comments::update_comment))
                .route("/{comment_id}", web::delete().to(comments::delete_comment)),
        )
        .service(
            web::scope("/likes")
                .route("/{post_id}", web::get().to(likes::list_likes_for_post))
                .route("/{post_id}/{user_id}", web::post().to(likes::like_post))
                .route("/{post_id}/{user_id}", web::delete().to(likes::unlike_post)),
        );
}
