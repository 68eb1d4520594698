use sea_orm::entity::prelude::*;

use crate::modules::skill::domain::entities::{Skill, SkillCategory};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "skills")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub level: i32,

    pub category: SkillCategory,

    pub description: Option<String>,

    pub icon_url: Option<String>,

    pub years_of_experience: Option<i32>,

    pub certified: bool,

    pub featured: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Skill {
        Skill {
            id: self.id,
            name: self.name,
            level: self.level,
            category: self.category,
            description: self.description,
            icon_url: self.icon_url,
            years_of_experience: self.years_of_experience,
            certified: self.certified,
            featured: self.featured,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
