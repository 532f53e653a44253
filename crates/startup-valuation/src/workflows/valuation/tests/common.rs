use crate::workflows::valuation::domain::{
    CompanyProfile, ExtrasSection, FinancialsSection, GrowthPeriod, Industry, Stage,
    TractionSection, UploadedFile, WizardAnswers,
};

pub(super) fn company(industry: Industry, stage: Stage) -> CompanyProfile {
    CompanyProfile {
        business_name: Some("Acme Analytics".to_string()),
        country: Some("Finland".to_string()),
        industry: Some(industry),
        stage: Some(stage),
        launched: true,
    }
}

pub(super) fn company_only() -> WizardAnswers {
    WizardAnswers {
        company: Some(company(Industry::Saas, Stage::Launched)),
        ..WizardAnswers::default()
    }
}

pub(super) fn financials(revenue: Option<f64>) -> FinancialsSection {
    FinancialsSection {
        revenue,
        monthly_burn_rate: Some(40_000.0),
        net_profit_loss: Some(0.0),
        funding_raised: Some(750_000.0),
        planning_to_raise: Some(2_000_000.0),
        skipped: false,
    }
}

pub(super) fn traction(customer_count: Option<u64>, growth_rate: Option<f64>) -> TractionSection {
    TractionSection {
        customer_count,
        growth_rate,
        growth_period: Some(GrowthPeriod::Monthly),
        unique_value: Some("Automated revenue forecasting for B2B teams".to_string()),
        competitors: Some("Spreadsheets, legacy BI suites".to_string()),
        skipped: false,
    }
}

pub(super) fn extras() -> ExtrasSection {
    ExtrasSection {
        profile_url: Some("https://www.linkedin.com/company/acme-analytics".to_string()),
        directory_url: Some("https://www.crunchbase.com/organization/acme-analytics".to_string()),
        website_url: Some("https://acme-analytics.example".to_string()),
        uploaded_files: vec![UploadedFile {
            name: "pitch-deck.pdf".to_string(),
            storage_key: Some("uploads/acme/pitch-deck.pdf".to_string()),
        }],
        skipped: false,
    }
}

/// Every section provided and nothing skipped.
pub(super) fn complete_answers() -> WizardAnswers {
    WizardAnswers {
        company: Some(company(Industry::Saas, Stage::Launched)),
        financials: Some(financials(Some(500_000.0))),
        traction: Some(traction(Some(1_500), Some(25.0))),
        extras: Some(extras()),
    }
}

/// Industry and stage only, optionally with revenue.
pub(super) fn answers_with_revenue(
    industry: Industry,
    stage: Stage,
    revenue: Option<f64>,
) -> WizardAnswers {
    WizardAnswers {
        company: Some(company(industry, stage)),
        financials: Some(FinancialsSection {
            revenue,
            ..FinancialsSection::default()
        }),
        ..WizardAnswers::default()
    }
}

pub(super) fn answers_with_traction(
    customer_count: Option<u64>,
    growth_rate: Option<f64>,
) -> WizardAnswers {
    WizardAnswers {
        company: Some(company(Industry::Other, Stage::Mvp)),
        traction: Some(TractionSection {
            customer_count,
            growth_rate,
            ..TractionSection::default()
        }),
        ..WizardAnswers::default()
    }
}
