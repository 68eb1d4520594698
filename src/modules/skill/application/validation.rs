// src/modules/skill/application/validation.rs
//
// Skill proficiency uses the 1..=5 scale. The original data set carried a
// second 0-100 percentage scale in frontend mock arrays; the validator scale
// is the one applied uniformly here.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::skill::application::ports::outgoing::skill_repository::{
    CreateSkillData, SkillListFilter, UpdateSkillData,
};
use crate::modules::skill::domain::entities::SkillCategory;
use crate::shared::validation::{clamp_page, empty_as_none, FieldError, Validator};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSkillRequest {
    pub name: String,
    pub level: i32,
    pub category: SkillCategory,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub years_of_experience: Option<i32>,
    #[serde(default)]
    pub certified: bool,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkillRequest {
    pub name: Option<String>,
    pub level: Option<i32>,
    pub category: Option<SkillCategory>,
    pub description: Option<String>,
    pub icon_url: Option<String>,
    pub years_of_experience: Option<i32>,
    pub certified: Option<bool>,
    pub featured: Option<bool>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct SkillQueryParams {
    pub category: Option<SkillCategory>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub fn validate_create(req: CreateSkillRequest) -> Result<CreateSkillData, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require_str("name", &req.name, 100);
    v.check_range("level", req.level, 1, 5);
    v.check_max("description", req.description.as_deref(), 500);
    v.check_url("iconUrl", req.icon_url.as_deref());
    if let Some(years) = req.years_of_experience {
        v.check_range("yearsOfExperience", years, 0, 50);
    }

    v.finish()?;

    Ok(CreateSkillData {
        name: req.name,
        level: req.level,
        category: req.category,
        description: req.description,
        icon_url: empty_as_none(req.icon_url),
        years_of_experience: req.years_of_experience,
        certified: req.certified,
        featured: req.featured,
    })
}

pub fn validate_update(req: UpdateSkillRequest) -> Result<UpdateSkillData, Vec<FieldError>> {
    let mut v = Validator::new();

    if let Some(ref name) = req.name {
        v.require_str("name", name, 100);
    }
    if let Some(level) = req.level {
        v.check_range("level", level, 1, 5);
    }
    v.check_max("description", req.description.as_deref(), 500);
    v.check_url("iconUrl", req.icon_url.as_deref());
    if let Some(years) = req.years_of_experience {
        v.check_range("yearsOfExperience", years, 0, 50);
    }

    v.finish()?;

    Ok(UpdateSkillData {
        name: req.name,
        level: req.level,
        category: req.category,
        description: req.description,
        icon_url: req.icon_url,
        years_of_experience: req.years_of_experience,
        certified: req.certified,
        featured: req.featured,
    })
}

pub fn validate_query(params: SkillQueryParams) -> SkillListFilter {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    SkillListFilter {
        category: params.category,
        featured: params.featured,
        limit,
        offset,
    }
}
