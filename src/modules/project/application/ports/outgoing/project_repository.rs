// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::project::domain::entities::{Project, ProjectStatus};
use crate::shared::storage::StorageError;

/// Validated, normalized create input. Defaults are already applied by the
/// validation layer.
#[derive(Debug, Clone)]
pub struct CreateProjectData {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: String,
    pub priority: i32,
}

/// Partial update: `None` keeps the stored value. Sequence fields, when
/// supplied, replace the whole stored sequence (no merge). URL fields
/// supplied as the empty string clear the column.
#[derive(Debug, Clone, Default)]
pub struct UpdateProjectData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub priority: Option<i32>,
}

#[derive(Debug, Clone, Default)]
pub struct ProjectListFilter {
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Ordering is deterministic: featured desc, priority desc, createdAt
    /// desc, so pagination is stable while the data is unchanged.
    async fn find_all(&self, filter: ProjectListFilter) -> Result<Vec<Project>, StorageError>;

    /// Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StorageError>;

    async fn create(&self, data: CreateProjectData) -> Result<Project, StorageError>;

    async fn update(&self, id: Uuid, data: UpdateProjectData) -> Result<Project, StorageError>;

    /// Idempotent: deleting an id that no longer exists still succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
