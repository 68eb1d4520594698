use sea_orm::entity::prelude::*;

use crate::modules::project::domain::entities::{Project, ProjectStatus};
use crate::shared::json_field::parse_json_field;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    pub description: String,

    pub long_description: Option<String>,

    /// JSON array of strings, stored as TEXT.
    #[sea_orm(column_type = "Text")]
    pub technologies: String,

    pub github_url: Option<String>,

    pub live_url: Option<String>,

    pub image_url: Option<String>,

    /// JSON array of strings, stored as TEXT.
    #[sea_orm(column_type = "Text")]
    pub images: String,

    pub featured: bool,

    pub status: ProjectStatus,

    pub start_date: Option<DateTimeWithTimeZone>,

    pub end_date: Option<DateTimeWithTimeZone>,

    pub category: String,

    pub priority: i32,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Project {
        Project {
            id: self.id,
            title: self.title,
            description: self.description,
            long_description: self.long_description,
            technologies: parse_json_field(&self.technologies),
            github_url: self.github_url,
            live_url: self.live_url,
            image_url: self.image_url,
            images: parse_json_field(&self.images),
            featured: self.featured,
            status: self.status,
            start_date: self.start_date.map(Into::into),
            end_date: self.end_date.map(Into::into),
            category: self.category,
            priority: self.priority,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
