use crate::DealStage;

use std::str::FromStr;

#[test]
fn test_deal_stage_as_str() {
    assert_eq!(DealStage::Lead.as_str(), "lead");
    assert_eq!(DealStage::Qualified.as_str(), "qualified");
    assert_eq!(DealStage::Proposal.as_str(), "proposal");
    assert_eq!(DealStage::Negotiation.as_str(), "negotiation");
    assert_eq!(DealStage::ClosedWon.as_str(), "closed-won");
    assert_eq!(DealStage::ClosedLost.as_str(), "closed-lost");
}

#[test]
fn test_deal_stage_from_str() {
    assert_eq!(DealStage::from_str("lead").unwrap(), DealStage::Lead);
    assert_eq!(
        DealStage::from_str("closed-won").unwrap(),
        DealStage::ClosedWon
    );
    assert!(DealStage::from_str("invalid").is_err());
}

#[test]
fn test_deal_stage_default() {
    assert_eq!(DealStage::default(), DealStage::Lead);
}

#[test]
fn test_deal_stage_round_trips() {
    for stage in [
        DealStage::Lead,
        DealStage::Qualified,
        DealStage::Proposal,
        DealStage::Negotiation,
        DealStage::ClosedWon,
        DealStage::ClosedLost,
    ] {
        assert_eq!(DealStage::from_str(stage.as_str()).unwrap(), stage);
    }
}
