//! Blog post entity model and DTOs.

use folio_core::ownership::Owned;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::comment::CommentResponse;
use crate::models::user::OwnerRef;

/// A blog post row from the `blog_posts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub cover_image: String,
    pub tags: Vec<String>,
    pub author_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for BlogPost {
    const ENTITY: &'static str = "Blog post";

    fn owner_id(&self) -> DbId {
        self.author_id
    }
}

/// DTO for creating a new blog post.
///
/// `excerpt` distinguishes absent (`None`, derived from content) from an
/// explicit empty string (kept).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBlogPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// DTO for updating an existing blog post. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBlogPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// A blog post with its author resolved.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostResponse {
    #[serde(flatten)]
    pub post: BlogPost,
    pub author: Option<OwnerRef>,
}

/// A single blog post together with its comments, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPostDetail {
    #[serde(flatten)]
    pub post: BlogPostResponse,
    pub comments: Vec<CommentResponse>,
}
