#![allow(dead_code)]

use crm_db::{NewCompany, NewContact, NewDeal, NewUser};

use crm_core::DealStage;

/// Creates a NewUser with sensible defaults. `password` stands in for a
/// bcrypt hash; repository tests never verify it.
pub fn create_test_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Test User".to_string(),
        password: "$2b$10$fixedtesthashfixedtesthashfixedtesthashfixedtesthash".to_string(),
    }
}

/// Creates a NewCompany with sensible defaults
pub fn create_test_company(name: &str) -> NewCompany {
    NewCompany {
        name: name.to_string(),
        industry: Some("Technology".to_string()),
        website: Some("https://www.acme.com".to_string()),
        phone: None,
        email: Some("contact@acme.com".to_string()),
        address: None,
        description: Some("Test company description".to_string()),
    }
}

/// Creates a NewContact with sensible defaults
pub fn create_test_contact(name: &str, company_id: Option<i64>) -> NewContact {
    NewContact {
        name: name.to_string(),
        email: Some("jane.smith@example.com".to_string()),
        phone: None,
        position: Some("Sales Manager".to_string()),
        company_id,
        notes: None,
    }
}

/// Creates a NewDeal with sensible defaults
pub fn create_test_deal(title: &str, company_id: Option<i64>, contact_ids: Vec<i64>) -> NewDeal {
    NewDeal {
        title: title.to_string(),
        description: Some("Test deal description".to_string()),
        value: Some(50_000.0),
        stage: DealStage::Lead,
        company_id,
        contact_ids,
    }
}
