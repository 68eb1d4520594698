use chrono::{DateTime, Utc};
use sea_orm::sea_query::StringLen;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum, ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(32))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillCategory {
    #[sea_orm(string_value = "FRONTEND")]
    Frontend,
    #[sea_orm(string_value = "BACKEND")]
    Backend,
    #[sea_orm(string_value = "DATABASE")]
    Database,
    #[sea_orm(string_value = "DEVOPS")]
    Devops,
    #[sea_orm(string_value = "MOBILE")]
    Mobile,
    #[sea_orm(string_value = "DESIGN")]
    Design,
    #[sea_orm(string_value = "TESTING")]
    Testing,
    #[sea_orm(string_value = "TOOLS")]
    Tools,
    #[sea_orm(string_value = "SOFT_SKILLS")]
    SoftSkills,
}

/// `level` is the 1..=5 proficiency scale the validators enforce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: Uuid,
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub years_of_experience: Option<i32>,
    pub certified: bool,
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
