//! Shared response bodies for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by successful deletions.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// `"<entity> removed"`, e.g. `"Blog post removed"`.
    pub fn removed(entity: &str) -> Self {
        Self {
            message: format!("{entity} removed"),
        }
    }
}

/// `{ "success": true, "message": ..., "data": T }` acknowledgement for
/// public submissions.
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<T: Serialize> {
    pub success: bool,
    pub message: &'static str,
    pub data: T,
}
