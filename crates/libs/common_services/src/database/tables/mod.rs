pub mod admin_user;
pub mod app_user;
pub mod message;
pub mod photo;
pub mod poem;
