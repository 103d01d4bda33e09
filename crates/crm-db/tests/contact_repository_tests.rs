mod common;

use common::{
    create_test_pool,
    fixtures::{create_test_company, create_test_contact},
};

use crm_db::{CompanyRepository, ContactRepository, PageParams, SortOrder};

use chrono::Utc;
use googletest::prelude::*;

#[tokio::test]
async fn given_valid_contact_when_created_then_can_be_found_by_id() {
    let pool = create_test_pool().await;
    let companies = CompanyRepository::new(pool.clone());
    let repo = ContactRepository::new(pool);

    let company = companies.create(&create_test_company("Acme")).await.unwrap();
    let created = repo
        .create(&create_test_contact("Jane Smith", Some(company.id)))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Jane Smith"));
    assert_that!(found.company_id, some(eq(company.id)));
    assert_that!(found.position, some(eq("Sales Manager")));
}

#[tokio::test]
async fn given_contact_without_company_when_created_then_association_is_null() {
    let pool = create_test_pool().await;
    let repo = ContactRepository::new(pool);

    let created = repo
        .create(&create_test_contact("Jane Smith", None))
        .await
        .unwrap();

    assert_that!(created.company_id, none());
}

#[tokio::test]
async fn given_deleted_company_when_contact_refetched_then_association_cleared() {
    let pool = create_test_pool().await;
    let companies = CompanyRepository::new(pool.clone());
    let repo = ContactRepository::new(pool.clone());

    // Foreign keys are enforced per connection in SQLite
    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    let company = companies.create(&create_test_company("Acme")).await.unwrap();
    let contact = repo
        .create(&create_test_contact("Jane Smith", Some(company.id)))
        .await
        .unwrap();

    companies.delete(company.id).await.unwrap();

    let found = repo.find_by_id(contact.id).await.unwrap().unwrap();
    assert_that!(found.company_id, none());
}

#[tokio::test]
async fn given_existing_contact_when_updated_then_changes_are_persisted() {
    let pool = create_test_pool().await;
    let repo = ContactRepository::new(pool);

    let mut contact = repo
        .create(&create_test_contact("Jane Smith", None))
        .await
        .unwrap();

    contact.name = "Jane Doe".to_string();
    contact.notes = Some("Key decision maker".to_string());
    contact.updated_at = Utc::now();
    repo.update(&contact).await.unwrap();

    let found = repo.find_by_id(contact.id).await.unwrap().unwrap();
    assert_that!(found.name, eq("Jane Doe"));
    assert_that!(found.notes, some(eq("Key decision maker")));
}

#[tokio::test]
async fn given_contacts_when_paged_then_total_reflects_all_rows() {
    let pool = create_test_pool().await;
    let repo = ContactRepository::new(pool);

    for i in 0..12 {
        repo.create(&create_test_contact(&format!("Contact {:02}", i), None))
            .await
            .unwrap();
    }

    let page = repo
        .find_page(PageParams::new(1, 10), "id", SortOrder::Asc)
        .await
        .unwrap();

    assert_that!(page.total, eq(12));
    assert_that!(page.items.len(), eq(10));
}

#[tokio::test]
async fn given_existing_contact_when_deleted_then_gone() {
    let pool = create_test_pool().await;
    let repo = ContactRepository::new(pool);

    let contact = repo
        .create(&create_test_contact("Jane Smith", None))
        .await
        .unwrap();

    assert_that!(repo.delete(contact.id).await.unwrap(), eq(true));
    assert_that!(repo.find_by_id(contact.id).await.unwrap(), none());
}
