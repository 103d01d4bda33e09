pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::company::Company;
pub use models::contact::Contact;
pub use models::deal::Deal;
pub use models::deal_stage::DealStage;
pub use models::display_name::build_display_name;
pub use models::user::User;

#[cfg(test)]
mod tests;
