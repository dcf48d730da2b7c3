//! Repository for the `comments` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body, author_id, post_id, created_at, updated_at";

/// Provides CRUD operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment on `post_id` by `author_id`, returning the created row.
    ///
    /// The caller is responsible for checking that the post exists; the
    /// foreign key rejects a dangling `post_id` regardless.
    pub async fn create(
        pool: &PgPool,
        post_id: DbId,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (body, author_id, post_id)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.body)
            .bind(author_id)
            .bind(post_id)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by ID, scoped to the post it belongs to.
    pub async fn find_in_post(
        pool: &PgPool,
        post_id: DbId,
        id: DbId,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1 AND post_id = $2");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(post_id)
            .fetch_optional(pool)
            .await
    }

    /// List a post's comments, newest first.
    pub async fn list_by_post(pool: &PgPool, post_id: DbId) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE post_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(post_id)
            .fetch_all(pool)
            .await
    }

    /// Count the comments referencing a post.
    pub async fn count_by_post(pool: &PgPool, post_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM comments WHERE post_id = $1")
            .bind(post_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Delete a single comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
