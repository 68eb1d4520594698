// src/modules/skill/adapter/outgoing/skill_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillListFilter, SkillRepository, UpdateSkillData,
};
use crate::modules::skill::domain::entities::Skill;
use crate::shared::storage::{map_db_err, StorageError};
use crate::shared::validation::empty_as_none;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn find_all(&self, filter: SkillListFilter) -> Result<Vec<Skill>, StorageError> {
        let mut query = Entity::find();

        if let Some(category) = filter.category {
            query = query.filter(Column::Category.eq(category));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }

        let rows = query
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::Level)
            .order_by_asc(Column::Name)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| map_db_err("findAll", e))?;

        Ok(rows.into_iter().map(Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Skill>, StorageError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findById", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn create(&self, data: CreateSkillData) -> Result<Skill, StorageError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            level: Set(data.level),
            category: Set(data.category),
            description: Set(data.description),
            icon_url: Set(data.icon_url),
            years_of_experience: Set(data.years_of_experience),
            certified: Set(data.certified),
            featured: Set(data.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create", e))?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, data: UpdateSkillData) -> Result<Skill, StorageError> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(level) = data.level {
            active.level = Set(level);
        }
        if let Some(category) = data.category {
            active.category = Set(category);
        }
        if let Some(description) = data.description {
            active.description = Set(Some(description));
        }
        if let Some(url) = data.icon_url {
            active.icon_url = Set(empty_as_none(Some(url)));
        }
        if let Some(years) = data.years_of_experience {
            active.years_of_experience = Set(Some(years));
        }
        if let Some(certified) = data.certified {
            active.certified = Set(certified);
        }
        if let Some(featured) = data.featured {
            active.featured = Set(featured);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| map_db_err("update", e))?;

        Ok(updated.into_domain())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let result = Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(|e| map_db_err("delete", e))?;

        if result.rows_affected == 0 {
            tracing::debug!(%id, "delete matched no skill row");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::domain::entities::SkillCategory;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model(name: &str, level: i32) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            level,
            category: SkillCategory::Backend,
            description: None,
            icon_url: None,
            years_of_experience: Some(3),
            certified: false,
            featured: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_returns_domain_skill() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model("Rust", 5)]])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        let skill = repo
            .create(CreateSkillData {
                name: "Rust".to_string(),
                level: 5,
                category: SkillCategory::Backend,
                description: None,
                icon_url: None,
                years_of_experience: Some(3),
                certified: false,
                featured: true,
            })
            .await
            .unwrap();

        assert_eq!(skill.name, "Rust");
        assert_eq!(skill.category, SkillCategory::Backend);
    }

    #[tokio::test]
    async fn delete_missing_skill_is_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = SkillRepositoryPostgres::new(Arc::new(db));
        assert!(repo.delete(Uuid::new_v4()).await.is_ok());
    }
}
