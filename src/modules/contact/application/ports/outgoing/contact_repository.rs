use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::domain::entities::{Contact, ContactStatus};
use crate::shared::storage::StorageError;

#[derive(Debug, Clone, PartialEq)]
pub struct CreateContactData {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Triage-only update: the message content itself never changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateContactData {
    pub status: Option<ContactStatus>,
    pub replied: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactListFilter {
    pub status: Option<ContactStatus>,
    pub limit: u64,
    pub offset: u64,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn find_all(&self, filter: ContactListFilter) -> Result<Vec<Contact>, StorageError>;

    /// Absence is `Ok(None)`, never an error.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Contact>, StorageError>;

    async fn create(&self, data: CreateContactData) -> Result<Contact, StorageError>;

    async fn update(&self, id: Uuid, data: UpdateContactData) -> Result<Contact, StorageError>;

    /// Idempotent: deleting an absent row succeeds.
    async fn delete(&self, id: Uuid) -> Result<(), StorageError>;
}
