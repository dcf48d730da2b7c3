//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated actor from a JWT Bearer token.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.
//!
//! Extractors only establish *who* the actor is. Per-resource ownership is
//! checked in handlers after the resource has been loaded.

pub mod auth;
pub mod rbac;
