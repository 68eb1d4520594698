use utoipa::OpenApi;

use crate::health::{DatabaseHealth, HealthResponse, HealthServices};
use crate::modules::project::adapter::incoming::web::routes::create_project::CreatedProjectResponse;
use crate::modules::project::adapter::incoming::web::routes::delete_project::DeleteProjectResponse;
use crate::modules::project::adapter::incoming::web::routes::get_projects::ProjectListResponse;
use crate::modules::project::adapter::incoming::web::routes::get_single_project::SingleProjectResponse;
use crate::modules::project::adapter::incoming::web::routes::update_project::UpdatedProjectResponse;
use crate::modules::project::application::validation::{
    CreateProjectRequest, UpdateProjectRequest,
};
use crate::modules::project::domain::entities::{Project, ProjectStatus};
use crate::shared::api::{ErrorBody, ErrorDetail};
use crate::shared::validation::FieldError;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "REST API for the personal portfolio site"
    ),
    paths(
        crate::health::health_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project::delete_project_handler,

        // Skill endpoints
        // get_skills_handler,
        // get_single_skill_handler,
        // create_skill_handler,
        // update_skill_handler,
        // delete_skill_handler,

        // Experience endpoints
        // get_experiences_handler,
        // get_single_experience_handler,
        // create_experience_handler,
        // update_experience_handler,
        // delete_experience_handler,

        // Contact endpoints
        // get_contacts_handler,
        // get_single_contact_handler,
        // create_contact_handler,
        // update_contact_handler,
        // delete_contact_handler,

        // Blog endpoints
        // get_blogs_handler,
        // get_single_blog_handler,
        // get_blog_by_slug_handler,
        // create_blog_handler,
        // update_blog_handler,
        // delete_blog_handler,
    ),
    components(
        schemas(
            ErrorBody,
            ErrorDetail,
            FieldError,

            HealthResponse,
            HealthServices,
            DatabaseHealth,

            Project,
            ProjectStatus,
            CreateProjectRequest,
            UpdateProjectRequest,
            ProjectListResponse,
            SingleProjectResponse,
            CreatedProjectResponse,
            UpdatedProjectResponse,
            DeleteProjectResponse,
        )
    ),
    tags(
        (name = "health", description = "Service health probe"),
        (name = "projects", description = "Project portfolio endpoints"),
        (name = "skills", description = "Skill endpoints"),
        (name = "experiences", description = "Work experience endpoints"),
        (name = "contacts", description = "Contact form endpoints"),
        (name = "blogs", description = "Blog post endpoints"),
    )
)]
pub struct ApiDoc;
