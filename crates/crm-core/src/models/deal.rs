use crate::DealStage;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A sales opportunity moving through the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deal {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    /// Deal value in dollars
    pub value: Option<f64>,
    pub stage: DealStage,
    pub company_id: Option<i64>,
    /// Contacts involved in the deal (join table)
    pub contact_ids: Vec<i64>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Deal {
    /// Whether the deal has reached a terminal stage
    pub fn is_closed(&self) -> bool {
        matches!(self.stage, DealStage::ClosedWon | DealStage::ClosedLost)
    }
}
