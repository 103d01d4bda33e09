use crate::ContactDto;
use serde::Serialize;

/// Single contact response
#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub contact: ContactDto,
}
