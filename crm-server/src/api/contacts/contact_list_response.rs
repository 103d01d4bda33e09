use crate::ContactDto;
use serde::Serialize;

/// One page of contacts
#[derive(Debug, Serialize)]
pub struct ContactListResponse {
    pub contacts: Vec<ContactDto>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
