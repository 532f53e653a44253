use super::domain::{Industry, Stage, UploadedFile, WizardAnswers};
use serde::Serialize;

/// Flat request body accepted by the remote valuation-report service.
///
/// Sections the founder skipped are left out entirely; provided sections
/// fill their missing values with the service's defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendPayload {
    pub company_name: String,
    pub country: String,
    pub industry: &'static str,
    pub stage: &'static str,
    pub is_launched: bool,
    #[serde(flatten)]
    pub financials: Option<FinancialsPayload>,
    #[serde(flatten)]
    pub traction: Option<TractionPayload>,
    #[serde(flatten)]
    pub extras: Option<ExtrasPayload>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsPayload {
    pub revenue: f64,
    pub monthly_burn_rate: f64,
    pub net_profit_loss: f64,
    pub funding_raised: f64,
    pub planning_to_raise: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TractionPayload {
    pub customer_count: u64,
    pub growth_rate: f64,
    pub growth_period: &'static str,
    pub unique_value: String,
    pub competitors: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasPayload {
    pub linkedin_url: String,
    pub crunchbase_url: String,
    pub website_url: String,
    pub uploaded_files: Vec<UploadedFile>,
}

impl BackendPayload {
    pub fn from_answers(answers: &WizardAnswers) -> Self {
        let company = answers.company.as_ref();

        let financials = answers.financials().map(|section| FinancialsPayload {
            revenue: section.revenue.unwrap_or(0.0),
            monthly_burn_rate: section.monthly_burn_rate.unwrap_or(0.0),
            net_profit_loss: section.net_profit_loss.unwrap_or(0.0),
            funding_raised: section.funding_raised.unwrap_or(0.0),
            planning_to_raise: section.planning_to_raise.unwrap_or(0.0),
        });

        let traction = answers.traction().map(|section| TractionPayload {
            customer_count: section.customer_count.unwrap_or(0),
            growth_rate: section.growth_rate.unwrap_or(0.0),
            growth_period: section.growth_period.unwrap_or_default().slug(),
            unique_value: section.unique_value.clone().unwrap_or_default(),
            competitors: section.competitors.clone().unwrap_or_default(),
        });

        let extras = answers.extras().map(|section| ExtrasPayload {
            linkedin_url: section.profile_url.clone().unwrap_or_default(),
            crunchbase_url: section.directory_url.clone().unwrap_or_default(),
            website_url: section.website_url.clone().unwrap_or_default(),
            uploaded_files: section.uploaded_files.clone(),
        });

        Self {
            company_name: answers
                .business_name()
                .unwrap_or("Unknown Company")
                .to_string(),
            country: company
                .and_then(|company| company.country.clone())
                .filter(|country| !country.is_empty())
                .unwrap_or_else(|| "Unknown".to_string()),
            industry: answers.industry().unwrap_or(Industry::Other).slug(),
            stage: backend_stage(answers.stage()).slug(),
            is_launched: company.map(|company| company.launched).unwrap_or(false),
            financials,
            traction,
            extras,
        }
    }
}

/// The service only knows the four wizard stages and defaults to `idea`.
fn backend_stage(stage: Option<Stage>) -> Stage {
    match stage {
        Some(Stage::Unrecognized) | None => Stage::Idea,
        Some(stage) => stage,
    }
}
