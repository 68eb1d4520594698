use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactListFilter, ContactRepository, CreateContactData, UpdateContactData,
};
use crate::modules::contact::domain::entities::Contact;
use crate::shared::storage::{map_db_err, StorageError};

#[derive(Clone)]
pub struct ContactRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ContactRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContactRepository for ContactRepositoryPostgres {
    async fn find_all(&self, filter: ContactListFilter) -> Result<Vec<Contact>, StorageError> {
        let mut query = Entity::find();

        if let Some(status) = filter.status {
            query = query.filter(Column::Status.eq(status));
        }

        let rows = query
            .order_by_desc(Column::CreatedAt)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| map_db_err("findAll", e))?;

        Ok(rows.into_iter().map(Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, StorageError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findById", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn create(&self, data: CreateContactData) -> Result<Contact, StorageError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(data.name),
            email: Set(data.email),
            subject: Set(data.subject),
            message: Set(data.message),
            status: Set(Default::default()),
            replied: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create", e))?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, data: UpdateContactData) -> Result<Contact, StorageError> {
        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        if let Some(status) = data.status {
            active.status = Set(status);
        }
        if let Some(replied) = data.replied {
            active.replied = Set(replied);
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
            tracing::debug!(%id, "delete matched no contact row");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::contact::domain::entities::ContactStatus;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_model(id: Uuid, status: ContactStatus) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            subject: None,
            message: "Hello".to_string(),
            status,
            replied: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_starts_unread_and_unreplied() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id, ContactStatus::Unread)]])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let contact = repo
            .create(CreateContactData {
                name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                subject: None,
                message: "Hello".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(contact.status, ContactStatus::Unread);
        assert!(!contact.replied);
    }

    #[tokio::test]
    async fn update_not_found_is_classified() {
        // Empty RETURNING set makes the update surface RecordNotUpdated.
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = ContactRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update(
                Uuid::new_v4(),
                UpdateContactData {
                    status: Some(ContactStatus::Read),
                    replied: None,
                },
            )
            .await;

        assert!(matches!(result, Err(StorageError::NotFound)));
    }
}
