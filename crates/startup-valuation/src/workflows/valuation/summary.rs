use super::domain::WizardAnswers;
use super::format::{format_currency, group_thousands};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStatKind {
    Business,
    Industry,
    Revenue,
    Customers,
}

impl SummaryStatKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Business => "Business",
            Self::Industry => "Industry",
            Self::Revenue => "Revenue",
            Self::Customers => "Customers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryStat {
    pub kind: SummaryStatKind,
    pub label: &'static str,
    pub value: String,
}

impl SummaryStat {
    fn new(kind: SummaryStatKind, value: String) -> Self {
        Self {
            kind,
            label: kind.label(),
            value,
        }
    }
}

/// Display-only highlights, in a fixed order, skipping anything not provided.
pub fn summary_stats(answers: &WizardAnswers) -> Vec<SummaryStat> {
    let mut stats = Vec::new();

    if let Some(name) = answers.business_name() {
        stats.push(SummaryStat::new(SummaryStatKind::Business, name.to_string()));
    }

    if let Some(industry) = answers.industry() {
        stats.push(SummaryStat::new(
            SummaryStatKind::Industry,
            capitalize(industry.slug()),
        ));
    }

    if let Some(revenue) = answers
        .financials()
        .and_then(|financials| financials.revenue)
        .filter(|revenue| *revenue > 0.0)
    {
        stats.push(SummaryStat::new(
            SummaryStatKind::Revenue,
            format_currency(revenue),
        ));
    }

    if let Some(customers) = answers
        .traction()
        .and_then(|traction| traction.customer_count)
        .filter(|count| *count > 0)
    {
        stats.push(SummaryStat::new(
            SummaryStatKind::Customers,
            group_thousands(customers),
        ));
    }

    stats
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
