//! Handlers for the `/projects` resource.
//!
//! Reads are public. Creation needs an authenticated actor; update and
//! delete are restricted to the project's owner.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::ownership::{ensure_owner, Action};
use folio_core::types::DbId;
use folio_core::validation::{require_text, require_text_if_present};
use folio_db::models::project::{CreateProject, Project, ProjectResponse, UpdateProject};
use folio_db::repositories::ProjectRepo;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::populate;
use crate::response::MessageResponse;
use crate::state::AppState;

const TITLE_REQUIRED: &str = "Project title is required";
const DESCRIPTION_REQUIRED: &str = "Project description is required";

/// Load a project or fail with `NotFound`.
async fn ensure_project_exists(pool: &PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Project", id)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(populate::projects(&state.pool, projects).await?))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    Ok(Json(populate::project(&state.pool, project).await?))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(auth): RequireAuth,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<ProjectResponse>)> {
    require_text(&input.title, TITLE_REQUIRED)?;
    require_text(&input.description, DESCRIPTION_REQUIRED)?;

    let project = ProjectRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        project_id = project.id,
        user_id = auth.user_id,
        "Project created"
    );

    let response = populate::project(&state.pool, project).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/projects/{id}
///
/// Partial update: fields present in the body replace stored values,
/// absent fields are kept.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<ProjectResponse>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    ensure_owner(auth.user_id, &project, Action::Update)?;

    require_text_if_present(input.title.as_deref(), TITLE_REQUIRED)?;
    require_text_if_present(input.description.as_deref(), DESCRIPTION_REQUIRED)?;

    let updated = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::not_found("Project", id)))?;

    tracing::info!(project_id = id, user_id = auth.user_id, "Project updated");

    Ok(Json(populate::project(&state.pool, updated).await?))
}

/// DELETE /api/projects/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let project = ensure_project_exists(&state.pool, id).await?;
    ensure_owner(auth.user_id, &project, Action::Delete)?;

    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::not_found("Project", id)));
    }

    tracing::info!(project_id = id, user_id = auth.user_id, "Project deleted");

    Ok(Json(MessageResponse::removed("Project")))
}
