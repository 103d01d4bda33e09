//! Shared query string for paginated list endpoints.

use crm_db::{PageParams, SortOrder};

use std::str::FromStr;

use serde::Deserialize;

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

fn default_sort_by() -> String {
    "created_at".to_string()
}

fn default_sort_order() -> String {
    "desc".to_string()
}

/// `?page=1&limit=10&sortBy=created_at&sortOrder=DESC`
///
/// Accepts the original API's camelCase parameter names alongside
/// snake_case.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: i64,

    #[serde(default = "default_limit")]
    pub limit: i64,

    #[serde(default = "default_sort_by", alias = "sortBy")]
    pub sort_by: String,

    #[serde(default = "default_sort_order", alias = "sortOrder")]
    pub sort_order: String,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            sort_by: default_sort_by(),
            sort_order: default_sort_order(),
        }
    }
}

impl ListQuery {
    /// Normalized page window; out-of-range input is coerced
    pub fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.limit)
    }

    /// Sort direction; unknown values fall back to descending
    pub fn order(&self) -> SortOrder {
        SortOrder::from_str(&self.sort_order).unwrap_or_default()
    }
}
