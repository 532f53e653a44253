use super::assessment::ValuationAssessment;
use serde::{Deserialize, Deserializer, Serialize};

/// Authoritative report returned by the remote valuation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationReport {
    pub business_summary: BusinessSummary,
    pub recommended_methods: RecommendedMethods,
    #[serde(default)]
    pub calculations: Vec<MethodCalculation>,
    pub competitor_analysis: CompetitorAnalysis,
    #[serde(default)]
    pub strategic_context: String,
    pub final_valuation: FinalValuation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessSummary {
    pub summary: String,
    pub stage_assessment: String,
    #[serde(default)]
    pub key_strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses_or_risks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedMethods {
    #[serde(default)]
    pub recommended_methods: Vec<RecommendedMethod>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMethod {
    pub method: String,
    pub confidence: f64,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub lower: f64,
    pub upper: f64,
}

impl ValuationRange {
    pub fn midpoint(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    pub fn contains(&self, amount: f64) -> bool {
        amount >= self.lower.min(self.upper) && amount <= self.lower.max(self.upper)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodCalculation {
    pub method: String,
    pub valuation_range: ValuationRange,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub calculation: String,
    #[serde(default)]
    pub narrative: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorAnalysis {
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub competitor_benchmarks: Vec<serde_json::Value>,
    #[serde(default)]
    pub commentary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalValuation {
    pub final_range: ValuationRange,
    #[serde(default)]
    pub method_comparisons: String,
    #[serde(default)]
    pub justification: String,
    #[serde(default, deserialize_with = "deserialize_recommendations")]
    pub recommendations: Vec<String>,
}

/// The model sometimes answers with one string instead of a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecommendationsField {
    List(Vec<String>),
    Text(String),
}

fn deserialize_recommendations<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let field = Option::<RecommendationsField>::deserialize(deserializer)?;
    Ok(match field {
        Some(RecommendationsField::List(items)) => items,
        Some(RecommendationsField::Text(text)) => split_recommendations(&text),
        None => Vec::new(),
    })
}

/// Splits free text on newlines and semicolons, dropping blank pieces.
pub fn split_recommendations(text: &str) -> Vec<String> {
    text.split(|ch: char| ch == '\n' || ch == ';')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// What the presentation layer currently shows: the local placeholder or the
/// remote report once it has resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValuationOutcome {
    Provisional { assessment: ValuationAssessment },
    Authoritative { report: Box<ValuationReport> },
}

impl ValuationOutcome {
    pub fn is_provisional(&self) -> bool {
        matches!(self, Self::Provisional { .. })
    }

    /// Replaces a provisional outcome with the resolved report.
    pub fn resolve(self, report: ValuationReport) -> Self {
        Self::Authoritative {
            report: Box::new(report),
        }
    }

    /// Headline amount: the local estimate, or the final range midpoint.
    pub fn headline_amount(&self) -> f64 {
        match self {
            Self::Provisional { assessment } => assessment.estimate as f64,
            Self::Authoritative { report } => report.final_valuation.final_range.midpoint(),
        }
    }
}
