pub mod create_contact;
pub mod delete_contact;
pub mod get_contacts;
pub mod get_single_contact;
pub mod update_contact;

pub use create_contact::create_contact_handler;
pub use delete_contact::delete_contact_handler;
pub use get_contacts::get_contacts_handler;
pub use get_single_contact::get_single_contact_handler;
pub use update_contact::update_contact_handler;
