use super::domain::{InputError, WizardAnswers};
use super::estimation::{estimate_breakdown, EstimateAdjustment, EstimationConfig};
use super::format::format_currency;
use super::report::ValuationOutcome;
use super::scoring::{confidence_breakdown, ConfidenceComponent, ConfidenceTier};
use super::summary::{summary_stats, SummaryStat};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// Stateless adapter turning finalized wizard answers into what the
/// confirmation screen renders while the remote report is pending.
#[derive(Debug, Clone, Default)]
pub struct ValuationEngine {
    config: EstimationConfig,
}

impl ValuationEngine {
    pub fn new(config: EstimationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EstimationConfig {
        &self.config
    }

    pub fn assess(&self, answers: &WizardAnswers) -> Result<ValuationAssessment, InputError> {
        answers.validate()?;

        let confidence = confidence_breakdown(answers);
        let estimate = estimate_breakdown(answers, &self.config);
        let tier = ConfidenceTier::from_score(confidence.score);

        debug!(
            score = confidence.score,
            estimate = estimate.amount,
            adjustments = estimate.adjustments.len(),
            "provisional valuation assessed"
        );

        Ok(ValuationAssessment {
            score: confidence.score,
            confidence_tier: tier,
            confidence_label: tier.label(),
            estimate: estimate.amount,
            formatted_estimate: format_currency(estimate.amount as f64),
            summary: summary_stats(answers),
            provisional: true,
            confidence_components: confidence.components,
            adjustments: estimate.adjustments,
        })
    }

    /// Wraps the assessment so callers can later swap in the remote report.
    pub fn provisional_outcome(
        &self,
        answers: &WizardAnswers,
    ) -> Result<ValuationOutcome, InputError> {
        Ok(ValuationOutcome::Provisional {
            assessment: self.assess(answers)?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationAssessment {
    pub score: u8,
    pub confidence_tier: ConfidenceTier,
    pub confidence_label: &'static str,
    pub estimate: u64,
    pub formatted_estimate: String,
    pub summary: Vec<SummaryStat>,
    /// Always set: the local estimate never replaces the remote report.
    pub provisional: bool,
    pub confidence_components: Vec<ConfidenceComponent>,
    pub adjustments: Vec<EstimateAdjustment>,
}

/// Downloadable snapshot of the confirmation screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationExport {
    pub valuation: u64,
    pub confidence: u8,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(flatten)]
    pub answers: WizardAnswers,
}

impl ValuationExport {
    pub fn new(
        answers: &WizardAnswers,
        assessment: &ValuationAssessment,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            valuation: assessment.estimate,
            confidence: assessment.score,
            timestamp,
            business_name: answers.business_name().map(str::to_string),
            answers: answers.clone(),
        }
    }

    /// File name safe to join onto an export directory.
    pub fn file_name(&self) -> String {
        let stem = self
            .business_name
            .as_deref()
            .map(file_stem)
            .filter(|stem| !stem.is_empty())
            .unwrap_or_else(|| "startup".to_string());
        format!("{stem}-valuation.json")
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Keeps letters, digits, spaces, `-` and `_`; everything else becomes `-`.
fn file_stem(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|ch| {
            if ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '_') {
                ch
            } else {
                '-'
            }
        })
        .collect();
    replaced
        .trim_matches(|ch: char| ch == '-' || ch.is_whitespace())
        .to_string()
}
