// src/modules/project/application/validation.rs

use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::modules::project::application::ports::outgoing::project_repository::{
    CreateProjectData, ProjectListFilter, UpdateProjectData,
};
use crate::modules::project::domain::entities::ProjectStatus;
use crate::shared::validation::{clamp_page, empty_as_none, FieldError, Validator};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: String,
    pub priority: Option<i32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub technologies: Option<Vec<String>>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub category: Option<String>,
    pub priority: Option<i32>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ProjectQueryParams {
    pub featured: Option<bool>,
    pub status: Option<ProjectStatus>,
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

pub fn validate_create(req: CreateProjectRequest) -> Result<CreateProjectData, Vec<FieldError>> {
    let mut v = Validator::new();

    v.require_str("title", &req.title, 200);
    v.require_str("description", &req.description, 500);
    v.check_max("longDescription", req.long_description.as_deref(), 2000);
    if req.technologies.is_empty() {
        v.push("technologies", "At least one technology is required");
    }
    v.check_url("githubUrl", req.github_url.as_deref());
    v.check_url("liveUrl", req.live_url.as_deref());
    v.check_url("imageUrl", req.image_url.as_deref());
    v.check_url_seq("images", &req.images);
    v.require_str("category", &req.category, 200);
    let priority = req.priority.unwrap_or(0);
    v.check_min("priority", priority, 0);

    v.finish()?;

    Ok(CreateProjectData {
        title: req.title,
        description: req.description,
        long_description: req.long_description,
        technologies: req.technologies,
        github_url: empty_as_none(req.github_url),
        live_url: empty_as_none(req.live_url),
        image_url: empty_as_none(req.image_url),
        images: req.images,
        featured: req.featured,
        status: req.status.unwrap_or_default(),
        start_date: req.start_date,
        end_date: req.end_date,
        category: req.category,
        priority,
    })
}

pub fn validate_update(req: UpdateProjectRequest) -> Result<UpdateProjectData, Vec<FieldError>> {
    let mut v = Validator::new();

    if let Some(ref title) = req.title {
        v.require_str("title", title, 200);
    }
    if let Some(ref description) = req.description {
        v.require_str("description", description, 500);
    }
    v.check_max("longDescription", req.long_description.as_deref(), 2000);
    if let Some(ref technologies) = req.technologies {
        if technologies.is_empty() {
            v.push("technologies", "At least one technology is required");
        }
    }
    v.check_url("githubUrl", req.github_url.as_deref());
    v.check_url("liveUrl", req.live_url.as_deref());
    v.check_url("imageUrl", req.image_url.as_deref());
    if let Some(ref images) = req.images {
        v.check_url_seq("images", images);
    }
    if let Some(ref category) = req.category {
        v.require_str("category", category, 200);
    }
    if let Some(priority) = req.priority {
        v.check_min("priority", priority, 0);
    }

    v.finish()?;

    Ok(UpdateProjectData {
        title: req.title,
        description: req.description,
        long_description: req.long_description,
        technologies: req.technologies,
        github_url: req.github_url,
        live_url: req.live_url,
        image_url: req.image_url,
        images: req.images,
        featured: req.featured,
        status: req.status,
        start_date: req.start_date,
        end_date: req.end_date,
        category: req.category,
        priority: req.priority,
    })
}

pub fn validate_query(params: ProjectQueryParams) -> ProjectListFilter {
    let (limit, offset) = clamp_page(params.limit, params.offset);
    ProjectListFilter {
        featured: params.featured,
        status: params.status,
        category: params.category.filter(|c| !c.is_empty()),
        limit,
        offset,
    }
}
