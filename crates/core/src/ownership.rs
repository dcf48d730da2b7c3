//! Resource ownership guard.
//!
//! Every mutating endpoint on an owned resource runs the same two steps:
//! load the resource (a missing row is `NotFound`), then compare the stored
//! owner id with the authenticated actor id. Only the second step lives
//! here; callers must not invoke it before the existence check.
//!
//! The actor id must come from the verified access token, never from the
//! request body. No role bypasses the comparison.

use crate::error::CoreError;
use crate::types::DbId;

/// A persisted resource with an immutable owning user.
pub trait Owned {
    /// Entity name used in error messages (e.g. `"Blog post"`).
    const ENTITY: &'static str;

    /// The user id recorded on the resource at creation time.
    fn owner_id(&self) -> DbId;
}

/// Mutations the guard distinguishes in its error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

impl Action {
    fn verb(self) -> &'static str {
        match self {
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// Returns `true` when `actor_id` is the owner recorded on the resource.
pub fn is_owner(actor_id: DbId, resource_owner_id: DbId) -> bool {
    actor_id == resource_owner_id
}

/// Allow the action if the actor owns the resource, otherwise `Forbidden`.
pub fn authorize(
    actor_id: DbId,
    resource_owner_id: DbId,
    entity: &str,
    action: Action,
) -> Result<(), CoreError> {
    if is_owner(actor_id, resource_owner_id) {
        Ok(())
    } else {
        Err(CoreError::Forbidden(format!(
            "Not authorized to {} this {}",
            action.verb(),
            entity.to_lowercase()
        )))
    }
}

/// [`authorize`] against an already-loaded resource.
pub fn ensure_owner<R: Owned>(actor_id: DbId, resource: &R, action: Action) -> Result<(), CoreError> {
    authorize(actor_id, resource.owner_id(), R::ENTITY, action)
}
