use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::contact::application::ports::outgoing::contact_repository::{
    ContactListFilter, CreateContactData, UpdateContactData,
};
use crate::modules::contact::domain::entities::ContactStatus;
use crate::shared::validation::{clamp_page, FieldError, Validator};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
}

/// Only triage fields are accepted; anything else in the body is ignored.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactRequest {
    pub status: Option<ContactStatus>,
    pub replied: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ContactQueryParams {
    pub status: Option<ContactStatus>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub fn validate_create(req: CreateContactRequest) -> Result<CreateContactData, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require_str("name", &req.name, 100);
    v.check_email("email", &req.email);
    v.check_max("subject", req.subject.as_deref(), 200);
    v.require_str("message", &req.message, 2000);

    v.finish()?;

    Ok(CreateContactData {
        name: req.name,
        email: req.email,
        subject: req.subject.filter(|s| !s.is_empty()),
        message: req.message,
    })
}

pub fn validate_update(req: UpdateContactRequest) -> Result<UpdateContactData, Vec<FieldError>> {
    Ok(UpdateContactData {
        status: req.status,
        replied: req.replied,
    })
}

pub fn validate_query(params: ContactQueryParams) -> ContactListFilter {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    ContactListFilter {
        status: params.status,
        limit,
        offset,
    }
}
