use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceListFilter, ExperienceRepository, UpdateExperienceData,
};
use crate::modules::experience::domain::entities::Experience;
use crate::shared::json_field::stringify_json_field;
use crate::shared::storage::{map_db_err, StorageError};
use crate::shared::validation::empty_as_none;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn find_all(
        &self,
        filter: ExperienceListFilter,
    ) -> Result<Vec<Experience>, StorageError> {
        let mut query = Entity::find();

        if let Some(current) = filter.current {
            query = query.filter(Column::Current.eq(current));
        }
        if let Some(kind) = filter.kind {
            query = query.filter(Column::Kind.eq(kind));
        }

        // Ongoing positions first, then reverse chronological.
        let rows = query
            .order_by_desc(Column::Current)
            .order_by_desc(Column::StartDate)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| map_db_err("findAll", e))?;

        Ok(rows.into_iter().map(Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Experience>, StorageError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findById", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn create(&self, data: CreateExperienceData) -> Result<Experience, StorageError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            company: Set(data.company),
            location: Set(data.location),
            description: Set(data.description),
            start_date: Set(data.start_date.fixed_offset()),
            end_date: Set(data.end_date.map(|d| d.fixed_offset())),
            current: Set(data.current),
            kind: Set(data.kind),
            logo_url: Set(data.logo_url),
            company_url: Set(data.company_url),
            achievements: Set(stringify_json_field(&data.achievements)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create", e))?;

        Ok(inserted.into_domain())
    }

    async fn update(
        &self,
        id: Uuid,
        data: UpdateExperienceData,
    ) -> Result<Experience, StorageError> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(company) = data.company {
            active.company = Set(company);
        }
        if let Some(location) = data.location {
            active.location = Set(empty_as_none(Some(location)));
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(start_date) = data.start_date {
            active.start_date = Set(start_date.fixed_offset());
        }
        if let Some(end_date) = data.end_date {
            active.end_date = Set(Some(end_date.fixed_offset()));
        }
        if let Some(current) = data.current {
            active.current = Set(current);
            // Once a position is marked ongoing the end date no longer applies.
            if current {
                active.end_date = Set(None);
            }
        }
        if let Some(kind) = data.kind {
            active.kind = Set(kind);
        }
        if let Some(url) = data.logo_url {
            active.logo_url = Set(empty_as_none(Some(url)));
        }
        if let Some(url) = data.company_url {
            active.company_url = Set(empty_as_none(Some(url)));
        }
        if let Some(achievements) = data.achievements {
            active.achievements = Set(stringify_json_field(&achievements));
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
            tracing::debug!(%id, "delete matched no experience row");
        }

        Ok(())
    }
}
