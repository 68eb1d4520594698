pub mod create_experience;
pub mod delete_experience;
pub mod get_experiences;
pub mod get_single_experience;
pub mod update_experience;

pub use create_experience::create_experience_handler;
pub use delete_experience::delete_experience_handler;
pub use get_experiences::get_experiences_handler;
pub use get_single_experience::get_single_experience_handler;
pub use update_experience::update_experience_handler;
