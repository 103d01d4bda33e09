//! Deal repository.
//!
//! Deal rows and their contact associations are written inside one
//! transaction so a failed association insert never leaves a half-written
//! deal behind.

use crate::repositories::user_repository::timestamp;
use crate::{DbError, Page, PageParams, Result as DbErrorResult, SortOrder};

use crm_core::{Deal, DealStage};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

const COLUMNS: &str = "id, title, description, value, stage, company_id, \
                       created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct NewDeal {
    pub title: String,
    pub description: Option<String>,
    pub value: Option<f64>,
    pub stage: DealStage,
    pub company_id: Option<i64>,
    pub contact_ids: Vec<i64>,
}

/// Aggregate row for the dashboard: deal count and total value per stage
#[derive(Debug, Clone)]
pub struct StageTotal {
    pub stage: DealStage,
    pub count: i64,
    pub value: f64,
}

pub struct DealRepository {
    pool: SqlitePool,
}

impl DealRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn sort_column(requested: &str) -> Option<&'static str> {
        match requested {
            "id" => Some("id"),
            "title" => Some("title"),
            "value" => Some("value"),
            "stage" => Some("stage"),
            "created_at" => Some("created_at"),
            "updated_at" => Some("updated_at"),
            _ => None,
        }
    }

    pub async fn create(&self, new_deal: &NewDeal) -> DbErrorResult<Deal> {
        let now = Utc::now().timestamp();
        let stage = new_deal.stage.as_str();

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO deals (
                    title, description, value, stage, company_id,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_deal.title)
        .bind(&new_deal.description)
        .bind(new_deal.value)
        .bind(stage)
        .bind(new_deal.company_id)
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();

        for contact_id in &new_deal.contact_ids {
            sqlx::query("INSERT INTO deal_contacts (deal_id, contact_id) VALUES (?, ?)")
                .bind(id)
                .bind(contact_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("deal {} missing immediately after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Deal>> {
        let row = sqlx::query(&format!("SELECT {} FROM deals WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut deal = map_deal(row)?;
        deal.contact_ids = self.contact_ids_for(id).await?;

        Ok(Some(deal))
    }

    pub async fn find_page(
        &self,
        params: PageParams,
        sort_column: &'static str,
        sort_order: SortOrder,
    ) -> DbErrorResult<Page<Deal>> {
        let total = self.count().await?;

        let sql = format!(
            "SELECT {} FROM deals ORDER BY {} {} LIMIT ? OFFSET ?",
            COLUMNS,
            sort_column,
            sort_order.as_sql()
        );

        let rows = sqlx::query(&sql)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let mut deal = map_deal(row)?;
            deal.contact_ids = self.contact_ids_for(deal.id).await?;
            items.push(deal);
        }

        Ok(Page::new(items, total, params))
    }

    /// Persist field changes and replace the contact association set
    pub async fn update(&self, deal: &Deal) -> DbErrorResult<()> {
        let updated_at = deal.updated_at.timestamp();
        let stage = deal.stage.as_str();

        let mut tx = self.pool.begin().await?;

        sqlx::query(
            r#"
                UPDATE deals
                SET title = ?, description = ?, value = ?, stage = ?,
                    company_id = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&deal.title)
        .bind(&deal.description)
        .bind(deal.value)
        .bind(stage)
        .bind(deal.company_id)
        .bind(updated_at)
        .bind(deal.id)
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM deal_contacts WHERE deal_id = ?")
            .bind(deal.id)
            .execute(&mut *tx)
            .await?;

        for contact_id in &deal.contact_ids {
            sqlx::query("INSERT INTO deal_contacts (deal_id, contact_id) VALUES (?, ?)")
                .bind(deal.id)
                .bind(contact_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        // deal_contacts rows cascade
        let result = sqlx::query("DELETE FROM deals WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM deals")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }

    /// Deal count and summed value grouped by stage
    pub async fn stage_totals(&self) -> DbErrorResult<Vec<StageTotal>> {
        let rows = sqlx::query(
            r#"
                SELECT stage, COUNT(*) AS n, COALESCE(SUM(value), 0.0) AS total
                FROM deals
                GROUP BY stage
                ORDER BY stage
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> DbErrorResult<StageTotal> {
                let stage: String = row.try_get("stage")?;
                Ok(StageTotal {
                    stage: parse_stage(&stage)?,
                    count: row.try_get("n")?,
                    value: row.try_get("total")?,
                })
            })
            .collect()
    }

    async fn contact_ids_for(&self, deal_id: i64) -> DbErrorResult<Vec<i64>> {
        let rows = sqlx::query(
            "SELECT contact_id FROM deal_contacts WHERE deal_id = ? ORDER BY contact_id",
        )
        .bind(deal_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| -> DbErrorResult<i64> { Ok(row.try_get("contact_id")?) })
            .collect()
    }
}

fn map_deal(row: SqliteRow) -> DbErrorResult<Deal> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;
    let stage: String = row.try_get("stage")?;

    Ok(Deal {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        value: row.try_get("value")?,
        stage: parse_stage(&stage)?,
        company_id: row.try_get("company_id")?,
        contact_ids: Vec::new(),
        created_at: timestamp(created_at, "deals.created_at")?,
        updated_at: timestamp(updated_at, "deals.updated_at")?,
    })
}

#[track_caller]
fn parse_stage(value: &str) -> DbErrorResult<DealStage> {
    DealStage::from_str(value).map_err(|e| DbError::Initialization {
        message: format!("Invalid DealStage in deals.stage: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })
}
