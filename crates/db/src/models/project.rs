//! Project entity model and DTOs.

use folio_core::ownership::Owned;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::user::OwnerRef;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub repo_url: String,
    pub live_url: String,
    pub technologies: Vec<String>,
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Owned for Project {
    const ENTITY: &'static str = "Project";

    fn owner_id(&self) -> DbId {
        self.user_id
    }
}

/// DTO for creating a new project.
///
/// `title` and `description` default to empty so that a missing field is
/// reported by validation rather than by the JSON extractor.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

/// DTO for updating an existing project. All fields are optional; an absent
/// field keeps its stored value, a present one replaces it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub technologies: Option<Vec<String>>,
}

/// A project with its owner resolved to `{id, username}`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectResponse {
    #[serde(flatten)]
    pub project: Project,
    pub user: Option<OwnerRef>,
}
