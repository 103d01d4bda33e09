use crate::DealDto;
use serde::Serialize;

/// Single deal response
#[derive(Debug, Serialize)]
pub struct DealResponse {
    pub deal: DealDto,
}
