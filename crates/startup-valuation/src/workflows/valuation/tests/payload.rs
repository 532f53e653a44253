use super::common::*;
use crate::workflows::valuation::domain::{
    CompanyProfile, Industry, Stage, TractionSection, WizardAnswers,
};
use crate::workflows::valuation::payload::BackendPayload;
use serde_json::json;

#[test]
fn missing_company_falls_back_to_service_defaults() {
    let payload = BackendPayload::from_answers(&WizardAnswers::default());
    let body = serde_json::to_value(&payload).expect("payload serializes");

    assert_eq!(
        body,
        json!({
            "companyName": "Unknown Company",
            "country": "Unknown",
            "industry": "other",
            "stage": "idea",
            "isLaunched": false,
        })
    );
}

#[test]
fn provided_sections_are_flattened_with_defaults() {
    let answers = WizardAnswers {
        company: Some(CompanyProfile {
            business_name: Some("Acme Analytics".to_string()),
            ..CompanyProfile::default()
        }),
        traction: Some(TractionSection {
            customer_count: Some(42),
            ..TractionSection::default()
        }),
        ..WizardAnswers::default()
    };

    let body = serde_json::to_value(BackendPayload::from_answers(&answers))
        .expect("payload serializes");

    assert_eq!(body["companyName"], "Acme Analytics");
    assert_eq!(body["customerCount"], 42);
    assert_eq!(body["growthRate"], 0.0);
    assert_eq!(body["growthPeriod"], "monthly");
    assert_eq!(body["uniqueValue"], "");
    assert!(body.get("revenue").is_none());
    assert!(body.get("websiteUrl").is_none());
}

#[test]
fn skipped_sections_are_left_out() {
    let mut answers = complete_answers();
    answers.financials.as_mut().expect("financials").skipped = true;

    let body = serde_json::to_value(BackendPayload::from_answers(&answers))
        .expect("payload serializes");

    assert!(body.get("revenue").is_none());
    assert!(body.get("monthlyBurnRate").is_none());
    assert_eq!(body["industry"], "saas");
    assert_eq!(body["stage"], "launched");
    assert_eq!(body["isLaunched"], true);
    assert_eq!(
        body["linkedinUrl"],
        "https://www.linkedin.com/company/acme-analytics"
    );
    assert_eq!(body["uploadedFiles"][0]["name"], "pitch-deck.pdf");
}

#[test]
fn unknown_stage_is_sent_as_idea() {
    let answers: WizardAnswers = serde_json::from_value(json!({
        "company": { "industry": "spacetech", "stage": "seed" }
    }))
    .expect("answers deserialize");
    assert_eq!(answers.stage(), Some(Stage::Unrecognized));
    assert_eq!(answers.industry(), Some(Industry::Other));

    let body = serde_json::to_value(BackendPayload::from_answers(&answers))
        .expect("payload serializes");

    assert_eq!(body["stage"], "idea");
    assert_eq!(body["industry"], "other");
}
