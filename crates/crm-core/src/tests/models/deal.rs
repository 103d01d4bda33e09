use crate::{Deal, DealStage};

use chrono::Utc;

fn test_deal(stage: DealStage) -> Deal {
    let now = Utc::now();
    Deal {
        id: 1,
        title: "Enterprise License".to_string(),
        description: None,
        value: Some(50_000.0),
        stage,
        company_id: None,
        contact_ids: vec![],
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn test_deal_is_closed() {
    assert!(!test_deal(DealStage::Lead).is_closed());
    assert!(!test_deal(DealStage::Negotiation).is_closed());
    assert!(test_deal(DealStage::ClosedWon).is_closed());
    assert!(test_deal(DealStage::ClosedLost).is_closed());
}
