use sea_orm::entity::prelude::*;

use crate::modules::blog::domain::entities::Blog;
use crate::shared::json_field::parse_json_field;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    #[sea_orm(unique)]
    pub slug: String,

    pub excerpt: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub published: bool,

    pub featured: bool,

    pub image_url: Option<String>,

    /// JSON array of strings, stored as TEXT.
    #[sea_orm(column_type = "Text")]
    pub tags: String,

    pub read_time: Option<i32>,

    pub views: i32,

    pub likes: i32,

    pub published_at: Option<DateTimeWithTimeZone>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Blog {
        Blog {
            id: self.id,
            title: self.title,
            slug: self.slug,
            excerpt: self.excerpt,
            content: self.content,
            published: self.published,
            featured: self.featured,
            image_url: self.image_url,
            tags: parse_json_field(&self.tags),
            read_time: self.read_time,
            views: self.views,
            likes: self.likes,
            published_at: self.published_at.map(Into::into),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
