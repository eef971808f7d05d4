/// Blog API Library
///
/// HTTP backend for a blog application. All persistence is delegated to a
/// hosted Supabase project: table rows live behind the PostgREST data API
/// and user identities behind the GoTrue auth API.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `managers`: Per-entity business logic (users, posts, comments, likes)
/// - `gateway`: Persistence gateway trait and its Supabase implementation
/// - `models`: Domain records mirrored from the Supabase tables
/// - `response`: The uniform response envelope
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod managers;
pub mod models;
pub mod response;

pub use error::{AppError, Result};
pub use response::Envelope;

use std::sync::Arc;

use gateway::PersistenceGateway;
use managers::{CommentManager, LikeManager, PostManager, UserManager};

/// Shared application state: one manager per entity, all wired to the same
/// persistence gateway.
#[derive(Clone)]
pub struct AppState {
    pub users: UserManager,
    pub posts: PostManager,
    pub comments: CommentManager,
    pub likes: LikeManager,
}

impl AppState {
    pub fn new(gateway: Arc<dyn PersistenceGateway>) -> Self {
        Self {
            users: UserManager::new(gateway.clone()),
            posts: PostManager::new(gateway.clone()),
            comments: CommentManager::new(gateway.clone()),
            likes: LikeManager::new(gateway),
        }
    }
}
