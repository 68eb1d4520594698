use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::blog::domain::entities::Blog;
use crate::shared::storage::StorageError;

/// Validated, normalized input for a new post. A duplicate `slug` surfaces
/// from the adapter as `StorageError::Conflict`.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBlogData {
    pub title: String,
    pub slug: String,
    pub excerpt: Option<String>,
    pub content: String,
    pub published: bool,
    pub featured: bool,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub read_time: Option<i32>,
}

/// Partial update. `None` keeps the stored value; `tags` replaces the whole
/// sequence; an empty-string `image_url` clears the column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateBlogData {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub image_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub read_time: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogListFilter {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub tag: Option<String>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait BlogRepository: Send + Sync {
    async fn find_all(&self, filter: BlogListFilter) -> Result<Vec<Blog>, StorageError>;

    /// Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Blog>, StorageError>;

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Blog>, StorageError>;

    async fn create(&self, data: CreateBlogData) -> Result<Blog, StorageError>;

    async fn update(&self, id: Uuid, data: UpdateBlogData) -> Result<Blog, StorageError>;

    /// Idempotent: deleting an absent row succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
