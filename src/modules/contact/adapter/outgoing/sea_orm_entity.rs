use sea_orm::entity::prelude::*;

use crate::modules::contact::domain::entities::{Contact, ContactStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contacts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,

    pub email: String,

    pub subject: Option<String>,

    #[sea_orm(column_type = "Text")]
    pub message: String,

    pub status: ContactStatus,

    pub replied: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_domain(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            subject: self.subject,
            message: self.message,
            status: self.status,
            replied: self.replied,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}
