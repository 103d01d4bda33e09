pub mod auth;
pub mod companies;
pub mod contacts;
pub mod dashboard;
pub mod deals;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod list_query;
pub mod users;
