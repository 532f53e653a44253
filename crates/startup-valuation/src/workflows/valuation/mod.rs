//! Confidence scoring and provisional valuation for wizard answers.
//!
//! Everything in this module is a pure function of a [`WizardAnswers`]
//! record; the remote report only enters through [`ValuationOutcome`].

mod assessment;
pub mod domain;
mod estimation;
pub mod format;
mod payload;
pub mod report;
mod scoring;
mod summary;

#[cfg(test)]
mod tests;

pub use assessment::{ValuationAssessment, ValuationEngine, ValuationExport};
pub use domain::{
    CompanyProfile, ExtrasSection, FinancialsSection, GrowthPeriod, Industry, InputError, Stage,
    TractionSection, UploadedFile, WizardAnswers,
};
pub use estimation::{
    estimate_breakdown, estimate_valuation, AdjustmentKind, EstimateAdjustment, EstimationConfig,
    ValuationEstimate,
};
pub use format::{format_currency, group_thousands};
pub use payload::{BackendPayload, ExtrasPayload, FinancialsPayload, TractionPayload};
pub use report::{ValuationOutcome, ValuationReport};
pub use scoring::{
    confidence_breakdown, confidence_score, ConfidenceBreakdown, ConfidenceComponent,
    ConfidenceSignal, ConfidenceTier, MAX_CONFIDENCE,
};
pub use summary::{summary_stats, SummaryStat, SummaryStatKind};
