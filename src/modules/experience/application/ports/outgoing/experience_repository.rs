use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::modules::experience::domain::entities::{Experience, ExperienceType};
use crate::shared::storage::StorageError;

/// Validated, normalized input for a new experience entry. When `current`
/// is true `end_date` has already been normalized to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateExperienceData {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: bool,
    pub kind: ExperienceType,
    pub logo_url: Option<String>,
    pub company_url: Option<String>,
    pub achievements: Vec<String>,
}

/// Partial update. `None` keeps the stored value; `achievements` replaces
/// the whole sequence; an empty-string URL clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateExperienceData {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: Option<bool>,
    pub kind: Option<ExperienceType>,
    pub logo_url: Option<String>,
    pub company_url: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExperienceListFilter {
    pub current: Option<bool>,
    pub kind: Option<ExperienceType>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn find_all(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<Experience>, StorageError>;

    /// Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, StorageError>;

    async fn create(&self, data: CreateExperienceData) -> Result<Experience, StorageError>;

    async fn update(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<Experience, StorageError>;

    /// Idempotent: deleting an absent row succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
