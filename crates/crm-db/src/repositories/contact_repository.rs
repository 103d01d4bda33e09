//! Contact repository for CRUD operations on contacts.

use crate::repositories::user_repository::timestamp;
use crate::{DbError, Page, PageParams, Result as DbErrorResult, SortOrder};

use crm_core::Contact;

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

const COLUMNS: &str = "id, name, email, phone, position, company_id, notes, \
                       created_at, updated_at";

#[derive(Debug, Clone, Default)]
pub struct NewContact {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub position: Option<String>,
    pub company_id: Option<i64>,
    pub notes: Option<String>,
}

pub struct ContactRepository {
    pool: SqlitePool,
}

impl ContactRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn sort_column(requested: &str) -> Option<&'static str> {
        match requested {
            "id" => Some("id"),
            "name" => Some("name"),
            "position" => Some("position"),
            "created_at" => Some("created_at"),
            "updated_at" => Some("updated_at"),
            _ => None,
        }
    }

    pub async fn create(&self, new_contact: &NewContact) -> DbErrorResult<Contact> {
        let now = Utc::now().timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO contacts (
                    name, email, phone, position, company_id, notes,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new_contact.name)
        .bind(&new_contact.email)
        .bind(&new_contact.phone)
        .bind(&new_contact.position)
        .bind(new_contact.company_id)
        .bind(&new_contact.notes)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DbError::Initialization {
                message: format!("contact {} missing immediately after insert", id),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Contact>> {
        let row = sqlx::query(&format!("SELECT {} FROM contacts WHERE id = ?", COLUMNS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(map_contact).transpose()
    }

    pub async fn find_page(
        &self,
        params: PageParams,
        sort_column: &'static str,
        sort_order: SortOrder,
    ) -> DbErrorResult<Page<Contact>> {
        let total = self.count().await?;

        let sql = format!(
            "SELECT {} FROM contacts ORDER BY {} {} LIMIT ? OFFSET ?",
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
            .map(map_contact)
            .collect::<DbErrorResult<Vec<_>>>()?;

        Ok(Page::new(items, total, params))
    }

    pub async fn update(&self, contact: &Contact) -> DbErrorResult<()> {
        let updated_at = contact.updated_at.timestamp();

        sqlx::query(
            r#"
                UPDATE contacts
                SET name = ?, email = ?, phone = ?, position = ?, company_id = ?,
                    notes = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&contact.name)
        .bind(&contact.email)
        .bind(&contact.phone)
        .bind(&contact.position)
        .bind(contact.company_id)
        .bind(&contact.notes)
        .bind(updated_at)
        .bind(contact.id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn count(&self) -> DbErrorResult<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("n")?)
    }
}

fn map_contact(row: SqliteRow) -> DbErrorResult<Contact> {
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Contact {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        position: row.try_get("position")?,
        company_id: row.try_get("company_id")?,
        notes: row.try_get("notes")?,
        created_at: timestamp(created_at, "contacts.created_at")?,
        updated_at: timestamp(updated_at, "contacts.updated_at")?,
    })
}
