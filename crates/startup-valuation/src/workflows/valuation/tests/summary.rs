use super::common::*;
use crate::workflows::valuation::domain::{
    CompanyProfile, FinancialsSection, Industry, TractionSection, WizardAnswers,
};
use crate::workflows::valuation::summary::{summary_stats, SummaryStatKind};

#[test]
fn business_name_alone_yields_one_entry() {
    let answers = WizardAnswers {
        company: Some(CompanyProfile {
            business_name: Some("Northwind Robotics".to_string()),
            ..CompanyProfile::default()
        }),
        ..WizardAnswers::default()
    };

    let stats = summary_stats(&answers);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].label, "Business");
    assert_eq!(stats[0].value, "Northwind Robotics");
}

#[test]
fn complete_answers_list_all_stats_in_order() {
    let stats = summary_stats(&complete_answers());

    let rendered: Vec<(&str, &str)> = stats
        .iter()
        .map(|stat| (stat.label, stat.value.as_str()))
        .collect();
    assert_eq!(
        rendered,
        vec![
            ("Business", "Acme Analytics"),
            ("Industry", "Saas"),
            ("Revenue", "$500K"),
            ("Customers", "1,500"),
        ]
    );
}

#[test]
fn zero_values_and_skips_are_omitted() {
    let mut answers = complete_answers();
    answers.financials = Some(FinancialsSection {
        revenue: Some(0.0),
        ..FinancialsSection::default()
    });
    answers.traction = Some(TractionSection {
        customer_count: Some(12_000),
        skipped: true,
        ..TractionSection::default()
    });

    let kinds: Vec<SummaryStatKind> = summary_stats(&answers)
        .iter()
        .map(|stat| stat.kind)
        .collect();
    assert_eq!(kinds, vec![SummaryStatKind::Business, SummaryStatKind::Industry]);
}

#[test]
fn unknown_industry_is_shown_as_other() {
    let answers = WizardAnswers {
        company: Some(CompanyProfile {
            industry: Some(Industry::from_slug("edtech")),
            ..CompanyProfile::default()
        }),
        ..WizardAnswers::default()
    };

    let stats = summary_stats(&answers);

    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].kind, SummaryStatKind::Industry);
    assert_eq!(stats[0].value, "Other");
}

#[test]
fn empty_answers_yield_no_stats() {
    assert!(summary_stats(&WizardAnswers::default()).is_empty());
}

#[test]
fn whitespace_business_name_still_counts_as_entered() {
    let answers = WizardAnswers {
        company: Some(CompanyProfile {
            business_name: Some("   ".to_string()),
            ..CompanyProfile::default()
        }),
        ..WizardAnswers::default()
    };

    assert_eq!(answers.business_name(), Some("   "));
    assert_eq!(summary_stats(&answers).len(), 1);

    let unnamed = WizardAnswers {
        company: Some(CompanyProfile {
            business_name: Some(String::new()),
            ..CompanyProfile::default()
        }),
        ..WizardAnswers::default()
    };
    assert!(summary_stats(&unnamed).is_empty());
}
