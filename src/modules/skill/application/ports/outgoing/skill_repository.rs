// src/modules/skill/application/ports/outgoing/skill_repository.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::skill::domain::entities::{Skill, SkillCategory};
use crate::shared::storage::StorageError;

#[derive(Debug, Clone)]
pub struct CreateSkillData {
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub years_of_experience: Option<i32>,
    pub certified: bool,
    pub featured: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSkillData {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub category: Option<SkillCategory>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub years_of_experience: Option<i32>,
    pub certified: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct SkillListFilter {
    pub category: Option<SkillCategory>,
    pub featured: Option<bool>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    /// Ordered featured desc, level desc, name asc.
    async fn find_all(&self, filter: SkillListFilter) -> Result<Vec<Skill>, StorageError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, StorageError>;

    async fn create(&self, data: CreateSkillData) -> Result<Skill, StorageError>;

    async fn update(&self, id: Uuid, data: UpdateSkillData) -> Result<Skill, StorageError>;

    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
