//! Entity managers
//!
//! One manager per entity (users, posts, comments, likes). Each one owns
//! the validation rules for its mutations and delegates every read and
//! write to the persistence gateway, wrapping outcomes in the shared
//! response envelope.

mod comments;
mod likes;
mod posts;
mod users;

pub use comments::CommentManager;
pub use likes::LikeManager;
pub use posts::PostManager;
pub use users::UserManager;
