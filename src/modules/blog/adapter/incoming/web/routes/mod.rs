pub mod create_blog;
pub mod delete_blog;
pub mod get_blog_by_slug;
pub mod get_blogs;
pub mod get_single_blog;
pub mod update_blog;

pub use create_blog::create_blog_handler;
pub use delete_blog::delete_blog_handler;
pub use get_blog_by_slug::get_blog_by_slug_handler;
pub use get_blogs::get_blogs_handler;
pub use get_single_blog::get_single_blog_handler;
pub use update_blog::update_blog_handler;
