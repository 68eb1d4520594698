pub mod create_project;
pub mod delete_project;
pub mod get_projects;
pub mod get_single_project;
pub mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_projects::get_projects_handler;
pub use get_single_project::get_single_project_handler;
pub use update_project::update_project_handler;
