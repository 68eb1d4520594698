use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use std::sync::Arc;
use uuid::Uuid;

use super::sea_orm_entity::{ActiveModel, Column, Entity, Model};
use crate::modules::blog::application::ports::outgoing::blog_repository::{
    BlogListFilter, BlogRepository, CreateBlogData, UpdateBlogData,
};
use crate::modules::blog::domain::entities::Blog;
use crate::shared::json_field::stringify_json_field;
use crate::shared::storage::{map_db_err, StorageError};
use crate::shared::validation::empty_as_none;

#[derive(Clone)]
pub struct BlogRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BlogRepository for BlogRepositoryPostgres {
    async fn find_all(&self, filter: BlogListFilter) -> Result<Vec<Blog>, StorageError> {
        let mut query = Entity::find();

        if let Some(published) = filter.published {
            query = query.filter(Column::Published.eq(published));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(Column::Featured.eq(featured));
        }
        // Tag match is a substring scan over the JSON blob; good enough at
        // portfolio scale, same trade-off the Prisma schema made.
        if let Some(ref tag) = filter.tag {
            query = query.filter(Column::Tags.contains(tag.clone()));
        }

        let rows = query
            .order_by_desc(Column::Featured)
            .order_by_desc(Column::PublishedAt)
            .order_by_desc(Column::CreatedAt)
            .offset(filter.offset)
            .limit(filter.limit)
            .all(&*self.db)
            .await
            .map_err(|e| map_db_err("findAll", e))?;

        Ok(rows.into_iter().map(Model::into_domain).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, StorageError> {
        let model = Entity::find_by_id(id)
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findById", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, StorageError> {
        let model = Entity::find()
            .filter(Column::Slug.eq(slug))
            .one(&*self.db)
            .await
            .map_err(|e| map_db_err("findBySlug", e))?;

        Ok(model.map(Model::into_domain))
    }

    async fn create(&self, data: CreateBlogData) -> Result<Blog, StorageError> {
        let now = Utc::now().fixed_offset();

        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            slug: Set(data.slug),
            excerpt: Set(data.excerpt),
            content: Set(data.content),
            published: Set(data.published),
            featured: Set(data.featured),
            image_url: Set(data.image_url),
            tags: Set(stringify_json_field(&data.tags)),
            read_time: Set(data.read_time),
            views: Set(0),
            likes: Set(0),
            // A post born published carries its publication moment.
            published_at: Set(data.published.then_some(now)),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| map_db_err("create", e))?;

        Ok(inserted.into_domain())
    }

    async fn update(&self, id: Uuid, data: UpdateBlogData) -> Result<Blog, StorageError> {
        let now = Utc::now().fixed_offset();

        let mut active = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(title) = data.title {
            active.title = Set(title);
        }
        if let Some(slug) = data.slug {
            active.slug = Set(slug);
        }
        if let Some(excerpt) = data.excerpt {
            active.excerpt = Set(empty_as_none(Some(excerpt)));
        }
        if let Some(content) = data.content {
            active.content = Set(content);
        }
        if let Some(published) = data.published {
            active.published = Set(published);
            if published {
                active.published_at = Set(Some(now));
            }
        }
        if let Some(featured) = data.featured {
            active.featured = Set(featured);
        }
        if let Some(url) = data.image_url {
            active.image_url = Set(empty_as_none(Some(url)));
        }
        if let Some(tags) = data.tags {
            active.tags = Set(stringify_json_field(&tags));
        }
        if let Some(read_time) = data.read_time {
            active.read_time = Set(Some(read_time));
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
            tracing::debug!(%id, "delete matched no blog row");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase};

    fn sample_model(id: Uuid, published: bool) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id,
            title: "Shipping a Rust backend".to_string(),
            slug: "shipping-a-rust-backend".to_string(),
            excerpt: None,
            content: "Lessons learned".to_string(),
            published,
            featured: false,
            image_url: None,
            tags: "[\"rust\"]".to_string(),
            read_time: Some(7),
            views: 0,
            likes: 0,
            published_at: published.then_some(now),
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_create(published: bool) -> CreateBlogData {
        CreateBlogData {
            title: "Shipping a Rust backend".to_string(),
            slug: "shipping-a-rust-backend".to_string(),
            excerpt: None,
            content: "Lessons learned".to_string(),
            published,
            featured: false,
            image_url: None,
            tags: vec!["rust".to_string()],
            read_time: Some(7),
        }
    }

    #[tokio::test]
    async fn create_published_post_stamps_published_at() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id, true)]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let blog = repo.create(sample_create(true)).await.unwrap();

        assert!(blog.published);
        assert!(blog.published_at.is_some());
    }

    #[tokio::test]
    async fn create_draft_leaves_published_at_null() {
        let id = Uuid::new_v4();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![sample_model(id, false)]])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let blog = repo.create(sample_create(false)).await.unwrap();

        assert!(!blog.published);
        assert!(blog.published_at.is_none());
    }

    #[tokio::test]
    async fn find_by_slug_absent_is_ok_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<Model>::new()])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_slug("no-such-post").await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn create_database_error_is_classified() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![sea_orm::DbErr::Query(sea_orm::RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = BlogRepositoryPostgres::new(Arc::new(db));
        let result = repo.create(sample_create(false)).await;

        assert!(matches!(result, Err(StorageError::Unknown(_))));
    }
}
