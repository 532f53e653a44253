use super::domain::WizardAnswers;
use serde::{Deserialize, Serialize};

pub const MAX_CONFIDENCE: u8 = 100;

/// Evidence that earns confidence points; each is awarded at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceSignal {
    Baseline,
    CompanyProfile,
    Revenue,
    BurnRate,
    FundingRaised,
    CustomerCount,
    GrowthRate,
    UniqueValue,
    SupportingDocuments,
    ProfileUrl,
    WebsiteUrl,
}

impl ConfidenceSignal {
    pub const fn points(self) -> u8 {
        match self {
            Self::Baseline => 30,
            Self::CompanyProfile => 20,
            Self::Revenue => 15,
            Self::BurnRate => 10,
            Self::FundingRaised => 5,
            Self::CustomerCount => 10,
            Self::GrowthRate => 10,
            Self::UniqueValue => 5,
            Self::SupportingDocuments => 10,
            Self::ProfileUrl => 2,
            Self::WebsiteUrl => 3,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Baseline => "Baseline",
            Self::CompanyProfile => "Company profile",
            Self::Revenue => "Revenue",
            Self::BurnRate => "Monthly burn rate",
            Self::FundingRaised => "Funding raised",
            Self::CustomerCount => "Customer count",
            Self::GrowthRate => "Growth rate",
            Self::UniqueValue => "Unique value",
            Self::SupportingDocuments => "Supporting documents",
            Self::ProfileUrl => "Profile link",
            Self::WebsiteUrl => "Website",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceComponent {
    pub signal: ConfidenceSignal,
    pub points: u8,
}

/// Awarded signals plus the clamped total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    pub score: u8,
    pub components: Vec<ConfidenceComponent>,
}

/// Score how complete the answers are, in `0..=100`.
pub fn confidence_score(answers: &WizardAnswers) -> u8 {
    confidence_breakdown(answers).score
}

pub fn confidence_breakdown(answers: &WizardAnswers) -> ConfidenceBreakdown {
    let signals = collect_signals(answers);
    let raw: u16 = signals
        .iter()
        .map(|signal| u16::from(signal.points()))
        .sum();
    // Fully populated answers add up to 120.
    let score = raw.min(u16::from(MAX_CONFIDENCE)) as u8;

    ConfidenceBreakdown {
        score,
        components: signals
            .into_iter()
            .map(|signal| ConfidenceComponent {
                signal,
                points: signal.points(),
            })
            .collect(),
    }
}

fn collect_signals(answers: &WizardAnswers) -> Vec<ConfidenceSignal> {
    let mut signals = vec![ConfidenceSignal::Baseline];

    if answers.company.is_some() {
        signals.push(ConfidenceSignal::CompanyProfile);
    }

    if let Some(financials) = answers.financials() {
        if financials.revenue.is_some() {
            signals.push(ConfidenceSignal::Revenue);
        }
        if financials.monthly_burn_rate.is_some() {
            signals.push(ConfidenceSignal::BurnRate);
        }
        if financials.funding_raised.is_some() {
            signals.push(ConfidenceSignal::FundingRaised);
        }
    }

    if let Some(traction) = answers.traction() {
        if traction.customer_count.is_some() {
            signals.push(ConfidenceSignal::CustomerCount);
        }
        if traction.growth_rate.is_some() {
            signals.push(ConfidenceSignal::GrowthRate);
        }
        if is_filled(traction.unique_value.as_deref()) {
            signals.push(ConfidenceSignal::UniqueValue);
        }
    }

    if let Some(extras) = answers.extras() {
        if !extras.uploaded_files.is_empty() {
            signals.push(ConfidenceSignal::SupportingDocuments);
        }
        if is_filled(extras.profile_url.as_deref()) {
            signals.push(ConfidenceSignal::ProfileUrl);
        }
        if is_filled(extras.website_url.as_deref()) {
            signals.push(ConfidenceSignal::WebsiteUrl);
        }
    }

    signals
}

fn is_filled(value: Option<&str>) -> bool {
    value.map(|text| !text.is_empty()).unwrap_or(false)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    InitialEstimate,
    Moderate,
    Good,
    High,
}

impl ConfidenceTier {
    pub const fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Self::High,
            60..=79 => Self::Good,
            40..=59 => Self::Moderate,
            _ => Self::InitialEstimate,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High Confidence",
            Self::Good => "Good Confidence",
            Self::Moderate => "Moderate Confidence",
            Self::InitialEstimate => "Initial Estimate",
        }
    }

    /// Presentation hint for the confidence meter.
    pub const fn tone(self) -> &'static str {
        match self {
            Self::High => "positive",
            Self::Good => "informative",
            Self::Moderate => "caution",
            Self::InitialEstimate => "critical",
        }
    }
}
