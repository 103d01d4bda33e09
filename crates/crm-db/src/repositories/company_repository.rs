//! Company repository for CRUD operations on companies.

use crate::repositories::user_repository::timestamp;
use crate::{DbError, Page, PageParams, Result as DbErrorResult, SortOrder};

use crm_core::Company;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

const COLUMNS: &str = "id, name, industry, website, phone, email, address, description, \
                       created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct NewCompany {
    pub name: String,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
}

pub struct CompanyRepository {
    pool: SqlitePool,
}

impl CompanyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Resolve a requested sort field to a known column, or `None` for
    /// anything outside the whitelist.
    pub fn sort_column(requested: &str) -> Option<&'static str> {
        match requested {
            "id" => Some("id"),
            "name" => Some("name"),
            "industry" => Some("industry"),
            "created_at" => Some("created_at"),
            "updated_at" => Some("updated_at"),
            _ => None,
        }
    }

    pub async fn create(&self, new_company: &NewCompany) -> DbErrorResult<Company> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO companies (
                    name, industry, website, phone, email, address, description,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_company.name)
        .bind(&new_company.industry)
        .bind(&new_company.website)
        .bind(&new_company.phone)
        .bind(&new_company.email)
        .bind(&new_company.address)
        .bind(&new_company.description)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("company {} missing immediately after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Company>> {
        let row = sqlx::query(&format!("SELECT {} FROM companies WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(map_company).transpose()
    }

    /// One page of companies. `sort_column` must come from [`Self::sort_column`].
    pub async fn find_page(
        &self,
        params: PageParams,
        sort_column: &'static str,
        sort_order: SortOrder,
    ) -> DbErrorResult<Page<Company>> {
        let total = self.count().await?;

        let sql = format!(
            "SELECT {} FROM companies ORDER BY {} {} LIMIT ? OFFSET ?",
            COLUMNS,
            sort_column,
            sort_order.as_sql()
        );

        let rows = sqlx::query(&sql)
            .bind(params.limit)
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(map_company)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Page::new(items, total, params))
    }

    pub async fn update(&self, company: &Company) -> DbErrorResult<()> {
        let updated_at = company.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE companies
                SET name = ?, industry = ?, website = ?, phone = ?, email = ?,
                    address = ?, description = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&company.name)
        .bind(&company.industry)
        .bind(&company.website)
        .bind(&company.phone)
        .bind(&company.email)
        .bind(&company.address)
        .bind(&company.description)
        .bind(updated_at)
        .bind(company.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM companies")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

fn map_company(row: SqliteRow) -> DbErrorResult<Company> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Company {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        industry: row.try_get("industry")?,
        website: row.try_get("website")?,
        phone: row.try_get("phone")?,
        email: row.try_get("email")?,
        address: row.try_get("address")?,
        description: row.try_get("description")?,
        created_at: timestamp(created_at, "companies.created_at")?,
        updated_at: timestamp(updated_at, "companies.updated_at")?,
    })
}
