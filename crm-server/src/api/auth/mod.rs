pub mod auth;
pub mod auth_service;
pub mod login_request;
pub mod register_request;
pub mod token_response;
