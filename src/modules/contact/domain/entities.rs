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
pub enum ContactStatus {
    #[sea_orm(string_value = "UNREAD")]
    Unread,
    #[sea_orm(string_value = "READ")]
    Read,
    #[sea_orm(string_value = "REPLIED")]
    Replied,
    #[sea_orm(string_value = "ARCHIVED")]
    Archived,
}

impl Default for ContactStatus {
    fn default() -> Self {
        ContactStatus::Unread
    }
}

/// An inbound message from the public contact form. Content is immutable
/// after creation; only `status` and `replied` ever change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub status: ContactStatus,
    pub replied: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
