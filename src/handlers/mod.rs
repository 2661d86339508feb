pub mod user_handler;
pub mod health_handler;

pub use user_handler::{create_user, delete_user, get_user, list_users, update_user};
pub use health_handler::health_check;
