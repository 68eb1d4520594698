pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

#[cfg(test)]
mod tests;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::modules::blog::adapter::outgoing::blog_repository_postgres::BlogRepositoryPostgres;
use crate::modules::blog::application::ports::outgoing::blog_repository::BlogRepository;
use crate::modules::contact::adapter::outgoing::contact_repository_postgres::ContactRepositoryPostgres;
use crate::modules::contact::application::ports::outgoing::contact_repository::ContactRepository;
use crate::modules::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::modules::experience::application::ports::outgoing::experience_repository::ExperienceRepository;
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::ports::outgoing::project_repository::ProjectRepository;
use crate::modules::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::modules::skill::application::ports::outgoing::skill_repository::SkillRepository;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub projects: Arc<dyn ProjectRepository>,
    pub skills: Arc<dyn SkillRepository>,
    pub experiences: Arc<dyn ExperienceRepository>,
    pub contacts: Arc<dyn ContactRepository>,
    pub blogs: Arc<dyn BlogRepository>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env_name);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");

    let server_url = format!("{host}:{port}");
    info!("Server run on: {}", server_url);

    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    let state = AppState {
        db: Arc::clone(&db_arc),
        projects: Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
        skills: Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
        experiences: Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc))),
        contacts: Arc::new(ContactRepositoryPostgres::new(Arc::clone(&db_arc))),
        blogs: Arc::new(BlogRepositoryPostgres::new(Arc::clone(&db_arc))),
    };

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", api::openapi::ApiDoc::openapi()),
            )
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health_handler);
    // Projects
    cfg.service(crate::modules::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
    );
    cfg.service(crate::modules::project::adapter::incoming::web::routes::create_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::modules::project::adapter::incoming::web::routes::delete_project_handler);
    // Skills
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_skills_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::get_single_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::create_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::update_skill_handler);
    cfg.service(crate::modules::skill::adapter::incoming::web::routes::delete_skill_handler);
    // Experiences
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::get_experiences_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::get_single_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::create_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::update_experience_handler,
    );
    cfg.service(
        crate::modules::experience::adapter::incoming::web::routes::delete_experience_handler,
    );
    // Contacts
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::get_contacts_handler);
    cfg.service(
        crate::modules::contact::adapter::incoming::web::routes::get_single_contact_handler,
    );
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::create_contact_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::update_contact_handler);
    cfg.service(crate::modules::contact::adapter::incoming::web::routes::delete_contact_handler);
    // Blogs
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blogs_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_blog_by_slug_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::get_single_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::create_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::update_blog_handler);
    cfg.service(crate::modules::blog::adapter::incoming::web::routes::delete_blog_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
