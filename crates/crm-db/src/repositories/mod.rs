pub mod company_repository;
pub mod contact_repository;
pub mod deal_repository;
pub mod user_repository;
