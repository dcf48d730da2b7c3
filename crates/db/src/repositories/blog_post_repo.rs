//! Repository for the `blog_posts` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, content, excerpt, cover_image, tags, author_id, created_at, updated_at";

/// Outcome of [`BlogPostRepo::delete_with_comments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadeDeleted {
    /// Whether the post row itself was removed.
    pub post_deleted: bool,
    /// Number of comments removed before the post.
    pub comments_deleted: u64,
}

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// Insert a new post written by `author_id`, returning the created row.
    ///
    /// `excerpt` is the already-resolved value (see
    /// [`folio_core::blog::resolve_excerpt`]); `input.excerpt` is ignored.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateBlogPost,
        excerpt: &str,
    ) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts (title, content, excerpt, cover_image, tags, author_id)
             VALUES (btrim($1), $2, $3, COALESCE($4, ''), COALESCE($5, '{{}}'::text[]), $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(excerpt)
            .bind(&input.cover_image)
            .bind(&input.tags)
            .bind(author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a post by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Return `true` if a post with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) = sqlx::query_as("SELECT EXISTS (SELECT 1 FROM blog_posts WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// List all posts ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Update a post. Only non-`None` fields in `input` are applied; the
    /// excerpt is never re-derived here.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET
                title = COALESCE(btrim($2), title),
                content = COALESCE($3, content),
                excerpt = COALESCE($4, excerpt),
                cover_image = COALESCE($5, cover_image),
                tags = COALESCE($6, tags),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.excerpt)
            .bind(&input.cover_image)
            .bind(&input.tags)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post and every comment that references it.
    ///
    /// Comments are deleted first, then the post, inside one transaction: a
    /// failure at either step rolls back both.
    pub async fn delete_with_comments(
        pool: &PgPool,
        id: DbId,
    ) -> Result<CascadeDeleted, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let comments = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let post = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(CascadeDeleted {
            post_deleted: post.rows_affected() > 0,
            comments_deleted: comments.rows_affected(),
        })
    }
}
