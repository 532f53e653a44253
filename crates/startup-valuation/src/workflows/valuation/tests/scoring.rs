use super::common::*;
use crate::workflows::valuation::domain::{
    ExtrasSection, FinancialsSection, Industry, Stage, TractionSection, WizardAnswers,
};
use crate::workflows::valuation::scoring::{
    confidence_breakdown, confidence_score, ConfidenceSignal, ConfidenceTier,
};

#[test]
fn empty_answers_earn_only_the_baseline() {
    assert_eq!(confidence_score(&WizardAnswers::default()), 30);
}

#[test]
fn company_alone_scores_fifty() {
    assert_eq!(confidence_score(&company_only()), 50);
}

#[test]
fn complete_answers_are_clamped_to_one_hundred() {
    let breakdown = confidence_breakdown(&complete_answers());

    let raw: u32 = breakdown
        .components
        .iter()
        .map(|component| u32::from(component.points))
        .sum();
    assert_eq!(raw, 120);
    assert_eq!(breakdown.score, 100);
}

#[test]
fn zero_values_still_count_as_present() {
    let mut answers = company_only();
    answers.financials = Some(FinancialsSection {
        revenue: Some(0.0),
        monthly_burn_rate: Some(0.0),
        funding_raised: Some(0.0),
        ..FinancialsSection::default()
    });
    answers.traction = Some(TractionSection {
        customer_count: Some(0),
        growth_rate: Some(0.0),
        ..TractionSection::default()
    });

    assert_eq!(confidence_score(&answers), 50 + 15 + 10 + 5 + 10 + 10);
}

#[test]
fn skipped_sections_ignore_stray_values() {
    let mut answers = complete_answers();
    answers.financials.as_mut().expect("financials").skipped = true;
    answers.traction.as_mut().expect("traction").skipped = true;
    answers.extras.as_mut().expect("extras").skipped = true;

    let breakdown = confidence_breakdown(&answers);

    assert_eq!(breakdown.score, 50);
    assert_eq!(
        breakdown
            .components
            .iter()
            .map(|component| component.signal)
            .collect::<Vec<_>>(),
        vec![ConfidenceSignal::Baseline, ConfidenceSignal::CompanyProfile]
    );
}

#[test]
fn empty_narrative_and_links_earn_nothing() {
    let mut answers = company_only();
    answers.traction = Some(TractionSection {
        unique_value: Some(String::new()),
        ..TractionSection::default()
    });
    answers.extras = Some(ExtrasSection {
        profile_url: Some(String::new()),
        website_url: None,
        uploaded_files: Vec::new(),
        ..ExtrasSection::default()
    });

    assert_eq!(confidence_score(&answers), 50);
}

#[test]
fn extras_award_documents_and_links() {
    let mut answers = company_only();
    answers.extras = Some(extras());

    assert_eq!(confidence_score(&answers), 50 + 10 + 2 + 3);
}

#[test]
fn score_never_leaves_bounds() {
    let samples = [
        WizardAnswers::default(),
        company_only(),
        complete_answers(),
        answers_with_traction(Some(5), Some(-40.0)),
        answers_with_revenue(Industry::Ai, Stage::Idea, Some(1.0)),
    ];

    for answers in samples {
        let score = confidence_score(&answers);
        assert!((30..=100).contains(&score), "score {score} out of bounds");
    }
}

#[test]
fn tiers_follow_score_thresholds() {
    assert_eq!(ConfidenceTier::from_score(100), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::from_score(80), ConfidenceTier::High);
    assert_eq!(ConfidenceTier::from_score(79), ConfidenceTier::Good);
    assert_eq!(ConfidenceTier::from_score(60), ConfidenceTier::Good);
    assert_eq!(ConfidenceTier::from_score(59), ConfidenceTier::Moderate);
    assert_eq!(ConfidenceTier::from_score(40), ConfidenceTier::Moderate);
    assert_eq!(ConfidenceTier::from_score(39), ConfidenceTier::InitialEstimate);
    assert_eq!(ConfidenceTier::from_score(50).label(), "Moderate Confidence");
}
