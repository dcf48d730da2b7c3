//! Handlers for the `/blog` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::blog::resolve_excerpt;
use folio_core::error::CoreError;
use folio_core::ownership::{ensure_owner, Action};
use folio_core::types::DbId;
use folio_core::validation::{require_text, require_text_if_present};
use folio_db::models::blog_post::{
    BlogPost, BlogPostDetail, BlogPostResponse, CreateBlogPost, UpdateBlogPost,
};
use folio_db::repositories::{BlogPostRepo, CommentRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::populate;
use crate::response::MessageResponse;
use crate::state::AppState;

const TITLE_REQUIRED: &str = "Blog title is required";
const CONTENT_REQUIRED: &str = "Blog content is required";

/// Load a blog post or fail with `NotFound`.
async fn ensure_post_exists(pool: &PgPool, id: DbId) -> AppResult<BlogPost> {
    BlogPostRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Blog post", id)))
}

/// GET /api/blog
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPostResponse>>> {
    let posts = BlogPostRepo::list(&state.pool).await?;
    Ok(Json(populate::posts(&state.pool, posts).await?))
}

/// GET /api/blog/{id}
///
/// The post with its author resolved and all comments embedded, newest first.
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<BlogPostDetail>> {
    let post = ensure_post_exists(&state.pool, id).await?;
    let comments = CommentRepo::list_by_post(&state.pool, id).await?;

    Ok(Json(BlogPostDetail {
        post: populate::post(&state.pool, post).await?,
        comments: populate::comments(&state.pool, comments).await?,
    }))
}

/// POST /api/blog
///
/// When `excerpt` is absent it is derived from the first 150 characters of
/// the content; an explicit empty string is stored as-is.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    AppJson(input): AppJson<CreateBlogPost>,
) -> AppResult<(StatusCode, Json<BlogPostResponse>)> {
    require_text(&input.title, TITLE_REQUIRED)?;
    require_text(&input.content, CONTENT_REQUIRED)?;

    let excerpt = resolve_excerpt(input.excerpt.as_deref(), &input.content);
    let post = BlogPostRepo::create(&state.pool, auth.user_id, &input, &excerpt).await?;

    tracing::info!(post_id = post.id, user_id = auth.user_id, "Blog post created");

    let response = populate::post(&state.pool, post).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/blog/{id}
///
/// Partial update restricted to the author. The excerpt changes only when
/// supplied.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateBlogPost>,
) -> AppResult<Json<BlogPostResponse>> {
    let post = ensure_post_exists(&state.pool, id).await?;
    ensure_owner(auth.user_id, &post, Action::Update)?;

    require_text_if_present(input.title.as_deref(), TITLE_REQUIRED)?;
    require_text_if_present(input.content.as_deref(), CONTENT_REQUIRED)?;

    let updated = BlogPostRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Blog post", id)))?;

    tracing::info!(post_id = id, user_id = auth.user_id, "Blog post updated");

    Ok(Json(populate::post(&state.pool, updated).await?))
}

/// DELETE /api/blog/{id}
///
/// Removes the post's comments, then the post.
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let post = ensure_post_exists(&state.pool, id).await?;
    ensure_owner(auth.user_id, &post, Action::Delete)?;

    let outcome = BlogPostRepo::delete_with_comments(&state.pool, id).await?;
    if !outcome.post_deleted {
        return Err(AppError::Core(CoreError::not_found("Blog post", id)));
    }

    tracing::info!(
        post_id = id,
        user_id = auth.user_id,
        comments_deleted = outcome.comments_deleted,
        "Blog post deleted"
    );

    Ok(Json(MessageResponse::removed("Blog post")))
}
