pub mod company;
pub mod contact;
pub mod deal;
pub mod deal_stage;
pub mod display_name;
pub mod user;
