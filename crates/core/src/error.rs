//! Domain error taxonomy.
//!
//! Handlers never build HTTP responses themselves; they return one of these
//! and the API crate maps it to a status code in one place.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The addressed resource id does not resolve.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A required field is missing or a field value is malformed.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A unique value (username, email) is already taken.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// No actor identity could be established for the request.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The actor is known but may not perform the action.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`].
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        CoreError::NotFound { entity, id }
    }
}
