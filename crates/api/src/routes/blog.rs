//! Route definitions for the `/blog` resource.
//!
//! Also nests the comment routes under `/blog/{post_id}/comments`.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::{blog, comment};
use crate::state::AppState;

/// Routes mounted at `/blog`.
///
/// ```text
/// GET    /                                   -> list
/// POST   /                                   -> create
/// GET    /{id}                               -> get_by_id
/// PUT    /{id}                               -> update
/// DELETE /{id}                               -> delete
///
/// GET    /{post_id}/comments                 -> list_by_post
/// POST   /{post_id}/comments                 -> create
/// DELETE /{post_id}/comments/{comment_id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    let comment_routes = Router::new()
        .route("/", get(comment::list_by_post).post(comment::create))
        .route("/{comment_id}", delete(comment::delete));

    Router::new()
        .route("/", get(blog::list).post(blog::create))
        .route(
            "/{id}",
            get(blog::get_by_id).put(blog::update).delete(blog::delete),
        )
        .nest("/{post_id}/comments", comment_routes)
}
