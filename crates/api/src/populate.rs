//! Owner resolution ("populate") for responses.
//!
//! Rows store only the owner id. Before a resource leaves the API its owner
//! is resolved to `{id, username}` in an explicit lookup-and-merge step:
//! collect the distinct owner ids, fetch them in one query, then attach each
//! row's owner. Credentials never leave the users table.

use std::collections::HashMap;

use folio_core::ownership::Owned;
use folio_core::types::DbId;
use folio_db::models::blog_post::{BlogPost, BlogPostResponse};
use folio_db::models::comment::{Comment, CommentResponse};
use folio_db::models::project::{Project, ProjectResponse};
use folio_db::models::user::OwnerRef;
use folio_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Fetch owner references for a set of ids, keyed by user id.
pub async fn owner_refs(
    pool: &PgPool,
    owner_ids: impl IntoIterator<Item = DbId>,
) -> AppResult<HashMap<DbId, OwnerRef>> {
    let mut ids: Vec<DbId> = owner_ids.into_iter().collect();
    ids.sort_unstable();
    ids.dedup();

    let refs = UserRepo::find_owner_refs(pool, &ids).await?;
    Ok(refs.into_iter().map(|r| (r.id, r)).collect())
}

/// Resolve the owners of `items` and merge each into a response value,
/// preserving order.
pub async fn populate<T, R>(
    pool: &PgPool,
    items: Vec<T>,
    merge: impl Fn(T, Option<OwnerRef>) -> R,
) -> AppResult<Vec<R>>
where
    T: Owned,
{
    let owners = owner_refs(pool, items.iter().map(Owned::owner_id)).await?;
    Ok(items
        .into_iter()
        .map(|item| {
            let owner = owners.get(&item.owner_id()).cloned();
            merge(item, owner)
        })
        .collect())
}

/// Single-item form of [`populate`].
pub async fn populate_one<T, R>(
    pool: &PgPool,
    item: T,
    merge: impl Fn(T, Option<OwnerRef>) -> R,
) -> AppResult<R>
where
    T: Owned,
{
    let mut resolved = populate(pool, vec![item], merge).await?;
    Ok(resolved.remove(0))
}

pub async fn projects(pool: &PgPool, rows: Vec<Project>) -> AppResult<Vec<ProjectResponse>> {
    populate(pool, rows, |project, user| ProjectResponse { project, user }).await
}

pub async fn project(pool: &PgPool, row: Project) -> AppResult<ProjectResponse> {
    populate_one(pool, row, |project, user| ProjectResponse { project, user }).await
}

pub async fn posts(pool: &PgPool, rows: Vec<BlogPost>) -> AppResult<Vec<BlogPostResponse>> {
    populate(pool, rows, |post, author| BlogPostResponse { post, author }).await
}

pub async fn post(pool: &PgPool, row: BlogPost) -> AppResult<BlogPostResponse> {
    populate_one(pool, row, |post, author| BlogPostResponse { post, author }).await
}

pub async fn comments(pool: &PgPool, rows: Vec<Comment>) -> AppResult<Vec<CommentResponse>> {
    populate(pool, rows, |comment, author| CommentResponse { comment, author }).await
}

pub async fn comment(pool: &PgPool, row: Comment) -> AppResult<CommentResponse> {
    populate_one(pool, row, |comment, author| CommentResponse { comment, author }).await
}
