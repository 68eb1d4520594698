use sea_orm::entity::prelude::*;

use crate::modules::experience::domain::entities::{Experience, ExperienceType};
use crate::shared::json_field::parse_json_field;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "experiences")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub title: String,

    pub company: String,

    pub location: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub start_date: DateTimeWithTimeZone,

    pub end_date: Option<DateTimeWithTimeZone>,

    pub current: bool,

    #[sea_orm(column_name = "type")]
    pub kind: ExperienceType,

    pub logo_url: Option<String>,

    pub company_url: Option<String>,

    /// JSON array of strings, stored as TEXT.
    #[sea_orm(column_type = "Text")]
    pub achievements: String,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Experience {
        Experience {
            id: self.id,
            title: self.title,
            company: self.company,
            location: self.location,
            description: self.description,
            start_date: self.start_date.into(),
            end_date: self.end_date.map(Into::into),
            current: self.current,
            kind: self.kind,
            logo_url: self.logo_url,
            company_url: self.company_url,
            achievements: parse_json_field(&self.achievements),
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
