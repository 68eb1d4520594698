// src/modules/project/adapter/outgoing/project_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectListFilter, ProjectRepository, UpdateProjectData,
};
use crate::modules::project::domain::entities::Project;
use crate::shared::json_field::stringify_json_field;
use crate::shared::storage::{map_db_err, StorageError};
use crate::shared::validation::empty_as_none;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn find_all(&self, filter: ProjectListFilter) -> Result<Vec<Project>, StorageError> {
        let mut query = Entity::find();

        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }
        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }
        if let Some(ref category) = filter.category {
            query = query.filter(Column::Category.eq(category.clone()));
        }

        let rows = query
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::Priority)
            .order_by_desc(Column::CreatedAt)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| map_db_err("findAll", e))?;

        Ok(rows.into_iter().map(Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Project>, StorageError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findById", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn create(&self, data: CreateProjectData) -> Result<Project, StorageError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            long_description: Set(data.long_description),
            technologies: Set(stringify_json_field(&data.technologies)),
            github_url: Set(data.github_url),
            live_url: Set(data.live_url),
            image_url: Set(data.image_url),
            images: Set(stringify_json_field(&data.images)),
            featured: Set(data.featured),
            status: Set(data.status),
            start_date: Set(data.start_date.map(|d| d.fixed_offset())),
            end_date: Set(data.end_date.map(|d| d.fixed_offset())),
            category: Set(data.category),
            priority: Set(data.priority),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create", e))?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, data: UpdateProjectData) -> Result<Project, StorageError> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }
        if let Some(long_description) = data.long_description {
            active.long_description = Set(Some(long_description));
        }
        if let Some(technologies) = data.technologies {
            active.technologies = Set(stringify_json_field(&technologies));
        }
        // Empty string clears the column, anything else replaces it.
        if let Some(url) = data.github_url {
            active.github_url = Set(empty_as_none(Some(url)));
        }
        if let Some(url) = data.live_url {
            active.live_url = Set(empty_as_none(Some(url)));
        }
        if let Some(url) = data.image_url {
            active.image_url = Set(empty_as_none(Some(url)));
        }
        if let Some(images) = data.images {
            active.images = Set(stringify_json_field(&images));
        }
        if let Some(featured) = data.featured {
            active.featured = Set(featured);
        }
        if let Some(status) = data.status {
            active.status = Set(status);
        }
        if let Some(start_date) = data.start_date {
            active.start_date = Set(Some(start_date.fixed_offset()));
        }
        if let Some(end_date) = data.end_date {
            active.end_date = Set(Some(end_date.fixed_offset()));
        }
        if let Some(category) = data.category {
            active.category = Set(category);
        }
        if let Some(priority) = data.priority {
            active.priority = Set(priority);
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

        // rows_affected == 0 is fine: deletion is idempotent.
        if result.rows_affected == 0 {
            tracing::debug!(%id, "delete matched no project row");
        }

        Ok(())
    }
}
