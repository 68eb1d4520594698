use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::experience::application::ports::outgoing::experience_repository::{
    CreateExperienceData, ExperienceListFilter, UpdateExperienceData,
};
use crate::modules::experience::domain::entities::ExperienceType;
use crate::shared::validation::{clamp_page, empty_as_none, FieldError, Validator};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub description: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub current: bool,
    #[serde(rename = "type")]
    pub kind: Option<ExperienceType>,
    pub logo_url: Option<String>,
    pub company_url: Option<String>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub current: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<ExperienceType>,
    pub logo_url: Option<String>,
    pub company_url: Option<String>,
    pub achievements: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExperienceQueryParams {
    pub current: Option<bool>,
    #[serde(rename = "type")]
    pub kind: Option<ExperienceType>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub fn validate_create(
    req: CreateExperienceRequest,
) -> Result<CreateExperienceData, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require_str("title", &req.title, 200);
    v.require_str("company", &req.company, 200);
    v.check_max("location", req.location.as_deref(), 200);
    v.require_str("description", &req.description, 2000);
    if req.start_date.is_none() {
        v.push("startDate", "Start date is required");
    }
    v.check_url("logoUrl", req.logo_url.as_deref());
    v.check_url("companyUrl", req.company_url.as_deref());

    v.finish()?;

    Ok(CreateExperienceData {
        title: req.title,
        company: req.company,
        location: req.location.filter(|l| !l.is_empty()),
        description: req.description,
        start_date: req.start_date.unwrap_or_else(Utc::now),
        // An ongoing position never carries an end date.
        end_date: if req.current { None } else { req.end_date },
        current: req.current,
        kind: req.kind.unwrap_or_default(),
        logo_url: empty_as_none(req.logo_url),
        company_url: empty_as_none(req.company_url),
        achievements: req.achievements,
    })
}

pub fn validate_update(
    req: UpdateExperienceRequest,
) -> Result<UpdateExperienceData, Vec<FieldError>> {
    let mut v = Validator::new();

    if let Some(ref title) = req.title {
        v.require_str("title", title, 200);
    }
    if let Some(ref company) = req.company {
        v.require_str("company", company, 200);
    }
    v.check_max("location", req.location.as_deref(), 200);
    if let Some(ref description) = req.description {
        v.require_str("description", description, 2000);
    }
    v.check_url("logoUrl", req.logo_url.as_deref());
    v.check_url("companyUrl", req.company_url.as_deref());

    v.finish()?;

    Ok(UpdateExperienceData {
        title: req.title,
        company: req.company,
        location: req.location,
        description: req.description,
        start_date: req.start_date,
        end_date: if req.current == Some(true) {
            None
        } else {
            req.end_date
        },
        current: req.current,
        kind: req.kind,
        logo_url: req.logo_url,
        company_url: req.company_url,
        achievements: req.achievements,
    })
}

pub fn validate_query(params: ExperienceQueryParams) -> ExperienceListFilter {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    ExperienceListFilter {
        current: params.current,
        kind: params.kind,
        limit,
        offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_request() -> CreateExperienceRequest {
        CreateExperienceRequest {
            title: "Backend Engineer".to_string(),
            company: "Acme".to_string(),
            location: None,
            description: "Built the billing pipeline".to_string(),
            start_date: Some(Utc::now()),
            end_date: None,
            current: false,
            kind: None,
            logo_url: None,
            company_url: None,
            achievements: vec![],
        }
    }

    #[test]
    fn missing_start_date_is_rejected() {
        let mut req = base_request();
        req.start_date = None;
        let errors = validate_create(req).unwrap_err();
        assert_eq!(errors[0].field, "startDate");
    }

    #[test]
    fn current_position_drops_end_date() {
        let mut req = base_request();
        req.current = true;
        req.end_date = Some(Utc::now());
        let data = validate_create(req).unwrap();
        assert!(data.current);
        assert!(data.end_date.is_none());
    }

    #[test]
    fn type_defaults_to_full_time() {
        let data = validate_create(base_request()).unwrap();
        assert_eq!(data.kind, ExperienceType::FullTime);
    }

    #[test]
    fn update_marking_current_clears_end_date() {
        let req = UpdateExperienceRequest {
            current: Some(true),
            end_date: Some(Utc::now()),
            ..Default::default()
        };
        let data = validate_update(req).unwrap();
        assert_eq!(data.current, Some(true));
        assert!(data.end_date.is_none());
    }
}
