//! Comment entity model and DTOs.

use folio_core::ownership::Owned;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::OwnerRef;

/// A comment row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: DbId,
    pub body: String,
    pub author_id: DbId,
    pub post_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Comment {
    const ENTITY: &'static str = "Comment";

    fn owner_id(&self) -> DbId {
        self.author_id
    }
}

/// DTO for creating a comment. The post id comes from the route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateComment {
    #[serde(default)]
    pub body: String,
}

/// A comment with its author resolved.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    #[serde(flatten)]
    pub comment: Comment,
    pub author: Option<OwnerRef>,
}
