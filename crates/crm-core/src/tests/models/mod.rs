mod deal;
mod deal_stage;
mod display_name;
