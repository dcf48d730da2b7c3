//! Handlers for comments nested under `/blog/{post_id}/comments`.
//!
//! Deleting a comment is restricted to the comment's author; the author of
//! the parent post gets no extra rights over it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::ownership::{ensure_owner, Action};
use folio_core::types::DbId;
use folio_core::validation::require_text;
use folio_db::models::comment::{CommentResponse, CreateComment};
use folio_db::repositories::{BlogPostRepo, CommentRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::populate;
use crate::response::MessageResponse;
use crate::state::AppState;

/// Fail with `NotFound` unless the parent post exists.
async fn ensure_parent_post(pool: &PgPool, post_id: DbId) -> AppResult<()> {
    if BlogPostRepo::exists(pool, post_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::not_found("Blog post", post_id)))
    }
}

/// GET /api/blog/{post_id}/comments
pub async fn list_by_post(
    State(state): State<AppState>,
    AppPath(post_id): AppPath<DbId>,
) -> AppResult<Json<Vec<CommentResponse>>> {
    ensure_parent_post(&state.pool, post_id).await?;
    let comments = CommentRepo::list_by_post(&state.pool, post_id).await?;
    Ok(Json(populate::comments(&state.pool, comments).await?))
}

/// POST /api/blog/{post_id}/comments
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    AppPath(post_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateComment>,
) -> AppResult<(StatusCode, Json<CommentResponse>)> {
    ensure_parent_post(&state.pool, post_id).await?;
    require_text(&input.body, "Comment body is required")?;

    let comment = CommentRepo::create(&state.pool, post_id, auth.user_id, &input)
        .await
        .map_err(|e| AppError::missing_parent(e, "fk_comments_post_id", "Blog post", post_id))?;

    tracing::info!(
        comment_id = comment.id,
        post_id,
        user_id = auth.user_id,
        "Comment created"
    );

    let response = populate::comment(&state.pool, comment).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// DELETE /api/blog/{post_id}/comments/{comment_id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath((post_id, comment_id)): AppPath<(DbId, DbId)>,
) -> AppResult<Json<MessageResponse>> {
    let comment = CommentRepo::find_in_post(&state.pool, post_id, comment_id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Comment", comment_id)))?;
    ensure_owner(auth.user_id, &comment, Action::Delete)?;

    if !CommentRepo::delete(&state.pool, comment_id).await? {
        return Err(AppError::Core(CoreError::not_found("Comment", comment_id)));
    }

    tracing::info!(comment_id, post_id, user_id = auth.user_id, "Comment deleted");

    Ok(Json(MessageResponse::removed("Comment")))
}
