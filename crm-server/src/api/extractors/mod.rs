pub mod auth_user;
pub mod client_origin;
