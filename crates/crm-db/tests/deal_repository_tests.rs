mod common;

use common::{
    create_test_pool,
    fixtures::{create_test_company, create_test_contact, create_test_deal},
};

use crm_core::DealStage;
use crm_db::{CompanyRepository, ContactRepository, DealRepository, PageParams, SortOrder};

use chrono::Utc;
use googletest::prelude::*;

#[tokio::test]
async fn given_valid_deal_when_created_then_can_be_found_by_id() {
    let pool = create_test_pool().await;
    let repo = DealRepository::new(pool);

    let created = repo
        .create(&create_test_deal("Enterprise License", None, vec![]))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_that!(found.title, eq("Enterprise License"));
    assert_that!(found.stage, eq(DealStage::Lead));
    assert_that!(found.value, some(eq(50_000.0)));
}

#[tokio::test]
async fn given_deal_with_contacts_when_created_then_associations_round_trip() {
    let pool = create_test_pool().await;
    let companies = CompanyRepository::new(pool.clone());
    let contacts = ContactRepository::new(pool.clone());
    let repo = DealRepository::new(pool);

    let company = companies.create(&create_test_company("Acme")).await.unwrap();
    let first = contacts
        .create(&create_test_contact("Jane Smith", Some(company.id)))
        .await
        .unwrap();
    let second = contacts
        .create(&create_test_contact("John Doe", Some(company.id)))
        .await
        .unwrap();

    let created = repo
        .create(&create_test_deal(
            "Enterprise License",
            Some(company.id),
            vec![first.id, second.id],
        ))
        .await
        .unwrap();

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_that!(found.contact_ids, container_eq([first.id, second.id]));
    assert_that!(found.company_id, some(eq(company.id)));
}

#[tokio::test]
async fn given_existing_deal_when_updated_then_contact_set_is_replaced() {
    let pool = create_test_pool().await;
    let contacts = ContactRepository::new(pool.clone());
    let repo = DealRepository::new(pool);

    let first = contacts
        .create(&create_test_contact("Jane Smith", None))
        .await
        .unwrap();
    let second = contacts
        .create(&create_test_contact("John Doe", None))
        .await
        .unwrap();

    let mut deal = repo
        .create(&create_test_deal("Enterprise License", None, vec![first.id]))
        .await
        .unwrap();

    deal.stage = DealStage::Negotiation;
    deal.contact_ids = vec![second.id];
    deal.updated_at = Utc::now();
    repo.update(&deal).await.unwrap();

    let found = repo.find_by_id(deal.id).await.unwrap().unwrap();
    assert_that!(found.stage, eq(DealStage::Negotiation));
    assert_that!(found.contact_ids, container_eq([second.id]));
}

#[tokio::test]
async fn given_existing_deal_when_deleted_then_gone() {
    let pool = create_test_pool().await;
    let repo = DealRepository::new(pool);

    let deal = repo
        .create(&create_test_deal("Enterprise License", None, vec![]))
        .await
        .unwrap();

    assert_that!(repo.delete(deal.id).await.unwrap(), eq(true));
    assert_that!(repo.find_by_id(deal.id).await.unwrap(), none());
}

#[tokio::test]
async fn given_deals_when_paged_by_value_then_sorted_descending() {
    let pool = create_test_pool().await;
    let repo = DealRepository::new(pool);

    for (title, value) in [("Small", 1_000.0), ("Big", 100_000.0), ("Mid", 10_000.0)] {
        let mut deal = create_test_deal(title, None, vec![]);
        deal.value = Some(value);
        repo.create(&deal).await.unwrap();
    }

    let page = repo
        .find_page(PageParams::default(), "value", SortOrder::Desc)
        .await
        .unwrap();

    assert_that!(page.items[0].title, eq("Big"));
    assert_that!(page.items[2].title, eq("Small"));
}

#[tokio::test]
async fn given_deals_across_stages_when_totalled_then_grouped_by_stage() {
    let pool = create_test_pool().await;
    let repo = DealRepository::new(pool);

    let mut lead = create_test_deal("Lead Deal", None, vec![]);
    lead.value = Some(1_000.0);
    repo.create(&lead).await.unwrap();

    let mut won_one = create_test_deal("Won One", None, vec![]);
    won_one.stage = DealStage::ClosedWon;
    won_one.value = Some(2_000.0);
    repo.create(&won_one).await.unwrap();

    let mut won_two = create_test_deal("Won Two", None, vec![]);
    won_two.stage = DealStage::ClosedWon;
    won_two.value = Some(3_000.0);
    repo.create(&won_two).await.unwrap();

    let totals = repo.stage_totals().await.unwrap();

    let won = totals
        .iter()
        .find(|t| t.stage == DealStage::ClosedWon)
        .unwrap();
    assert_that!(won.count, eq(2));
    assert_that!(won.value, eq(5_000.0));

    let lead_total = totals.iter().find(|t| t.stage == DealStage::Lead).unwrap();
    assert_that!(lead_total.count, eq(1));
}
