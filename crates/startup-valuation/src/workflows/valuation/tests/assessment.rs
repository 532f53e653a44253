use super::common::*;
use crate::workflows::valuation::assessment::{ValuationEngine, ValuationExport};
use crate::workflows::valuation::domain::{
    CompanyProfile, FinancialsSection, InputError, TractionSection, WizardAnswers,
};
use crate::workflows::valuation::scoring::ConfidenceTier;
use chrono::{TimeZone, Utc};

#[test]
fn assessment_combines_score_estimate_and_summary() {
    let engine = ValuationEngine::default();

    let assessment = engine.assess(&complete_answers()).expect("valid answers");

    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.confidence_tier, ConfidenceTier::High);
    assert_eq!(assessment.confidence_label, "High Confidence");
    assert_eq!(assessment.estimate, 9_000_000);
    assert_eq!(assessment.formatted_estimate, "$9.00M");
    assert_eq!(assessment.summary.len(), 4);
    assert!(assessment.provisional);
}

#[test]
fn assessment_rejects_negative_amounts() {
    let engine = ValuationEngine::default();
    let mut answers = company_only();
    answers.financials = Some(FinancialsSection {
        monthly_burn_rate: Some(-5.0),
        ..FinancialsSection::default()
    });

    let err = engine.assess(&answers).expect_err("negative burn rejected");

    assert_eq!(
        err,
        InputError::Negative {
            field: "monthly_burn_rate",
            value: -5.0
        }
    );
}

#[test]
fn assessment_rejects_non_finite_growth() {
    let engine = ValuationEngine::default();
    let mut answers = company_only();
    answers.traction = Some(TractionSection {
        growth_rate: Some(f64::NAN),
        ..TractionSection::default()
    });

    match engine.assess(&answers) {
        Err(InputError::NonFinite { field }) => assert_eq!(field, "growth_rate"),
        other => panic!("expected non-finite rejection, got {other:?}"),
    }
}

#[test]
fn negative_growth_is_accepted() {
    let engine = ValuationEngine::default();
    let answers = answers_with_traction(Some(10), Some(-20.0));

    let assessment = engine.assess(&answers).expect("negative growth is valid");

    assert_eq!(assessment.estimate, 1_000_000);
}

#[test]
fn export_names_file_after_the_business() {
    let engine = ValuationEngine::default();
    let answers = complete_answers();
    let assessment = engine.assess(&answers).expect("valid answers");
    let timestamp = Utc
        .with_ymd_and_hms(2025, 10, 1, 9, 30, 0)
        .single()
        .expect("valid timestamp");

    let export = ValuationExport::new(&answers, &assessment, timestamp);
    let body: serde_json::Value =
        serde_json::from_str(&export.to_json().expect("export serializes"))
            .expect("export is json");

    assert_eq!(export.file_name(), "Acme Analytics-valuation.json");
    assert_eq!(body["valuation"], 9_000_000);
    assert_eq!(body["confidence"], 100);
    assert_eq!(body["businessName"], "Acme Analytics");
    assert_eq!(body["timestamp"], "2025-10-01T09:30:00Z");
    assert_eq!(body["company"]["industry"], "saas");
}

#[test]
fn export_falls_back_to_generic_file_name() {
    let engine = ValuationEngine::default();
    let answers = WizardAnswers::default();
    let assessment = engine.assess(&answers).expect("valid answers");

    let export = ValuationExport::new(&answers, &assessment, Utc::now());

    assert_eq!(export.file_name(), "startup-valuation.json");
    assert_eq!(export.confidence, 30);
}

#[test]
fn export_file_name_cannot_escape_the_export_directory() {
    let engine = ValuationEngine::default();
    let answers_named = |name: &str| WizardAnswers {
        company: Some(CompanyProfile {
            business_name: Some(name.to_string()),
            ..CompanyProfile::default()
        }),
        ..WizardAnswers::default()
    };
    let file_name = |name: &str| {
        let answers = answers_named(name);
        let assessment = engine.assess(&answers).expect("valid answers");
        ValuationExport::new(&answers, &assessment, Utc::now()).file_name()
    };

    assert_eq!(file_name("../x"), "x-valuation.json");
    assert_eq!(file_name("../../tmp/evil"), "tmp-evil-valuation.json");
    assert_eq!(file_name("C:\\temp\\acme"), "C--temp-acme-valuation.json");
    assert_eq!(file_name("/../"), "startup-valuation.json");
}
