//! Domain records mirrored from the Supabase tables
//!
//! Identifiers stay as opaque strings: they are minted by the hosted backend
//! (GoTrue for users, Postgres defaults for the rest) and the service only
//! routes them through filters, never interprets them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - the `users` table row mirroring a GoTrue identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub email: String,
}

/// Post entity - a blog post authored by a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
}

/// Comment entity - represents a comment on a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Like entity - represents a user liking a post
///
/// The pair `(post_id, user_id)` is the identity of a like; the table holds
/// at most one row per pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub post_id: String,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
}
