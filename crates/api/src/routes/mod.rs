pub mod blog;
pub mod contact;
pub mod health;
pub mod project;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /health                                          service + database health
///
/// /users/register                                  register (public)
/// /users/login                                     login (public)
/// /users/me                                        current user (requires auth)
///
/// /projects                                        list, create
/// /projects/{id}                                   get, update, delete
///
/// /blog                                            list, create
/// /blog/{id}                                       get (with comments), update, delete
/// /blog/{post_id}/comments                         list, create
/// /blog/{post_id}/comments/{comment_id}            delete
///
/// /contact                                         submit (public), list (admin)
/// /contact/{id}                                    delete (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/users", users::router())
        .nest("/projects", project::router())
        .nest("/blog", blog::router())
        .nest("/contact", contact::router())
}
