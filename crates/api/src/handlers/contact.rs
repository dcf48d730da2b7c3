//! Handlers for the `/contact` resource.
//!
//! Submitting is public. Reading and deleting the inbox is admin-only;
//! messages have no owner, so no ownership guard applies.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::{require_text, validate_email, validate_message_body};
use folio_db::models::message::{CreateMessage, Message};
use folio_db::repositories::MessageRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::rbac::RequireAdmin;
use crate::response::{MessageResponse, SubmissionResponse};
use crate::state::AppState;

/// POST /api/contact
pub async fn submit(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateMessage>,
) -> AppResult<(StatusCode, Json<SubmissionResponse<Message>>)> {
    require_text(&input.name, "Name is required")?;
    require_text(&input.email, "Email is required")?;
    validate_email(input.email.trim())?;
    validate_message_body(&input.message)?;

    let message = MessageRepo::create(&state.pool, &input).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(SubmissionResponse {
            success: true,
            message: "Message sent successfully",
            data: message,
        }),
    ))
}

/// GET /api/contact
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
) -> AppResult<Json<Vec<Message>>> {
    let messages = MessageRepo::list(&state.pool).await?;
    Ok(Json(messages))
}

/// DELETE /api/contact/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    if MessageRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::not_found("Message", id)));
    }

    MessageRepo::delete(&state.pool, id).await?;

    tracing::info!(message_id = id, admin_id = admin.user_id, "Contact message deleted");

    Ok(Json(MessageResponse::removed("Message")))
}
