//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. List queries return rows
//! newest first (`created_at DESC, id DESC`).

pub mod blog_post_repo;
pub mod comment_repo;
pub mod message_repo;
pub mod project_repo;
pub mod user_repo;

pub use blog_post_repo::BlogPostRepo;
pub use comment_repo::CommentRepo;
pub use message_repo::MessageRepo;
pub use project_repo::ProjectRepo;
pub use user_repo::UserRepo;
