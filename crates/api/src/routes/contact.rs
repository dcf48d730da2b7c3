//! Route definitions for the `/contact` resource.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes mounted at `/contact`.
///
/// ```text
/// POST   /        -> submit (public)
/// GET    /        -> list (admin)
/// DELETE /{id}    -> delete (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(contact::list).post(contact::submit))
        .route("/{id}", delete(contact::delete))
}
