use serde::{Deserialize, Serialize};

/// Answers collected by the valuation wizard, one optional section per step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardAnswers {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<CompanyProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financials: Option<FinancialsSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub traction: Option<TractionSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extras: Option<ExtrasSection>,
}

impl WizardAnswers {
    /// Financial answers, unless the section is missing or was skipped.
    pub fn financials(&self) -> Option<&FinancialsSection> {
        self.financials.as_ref().filter(|section| !section.skipped)
    }

    /// Traction answers, unless the section is missing or was skipped.
    pub fn traction(&self) -> Option<&TractionSection> {
        self.traction.as_ref().filter(|section| !section.skipped)
    }

    /// Supporting material, unless the section is missing or was skipped.
    pub fn extras(&self) -> Option<&ExtrasSection> {
        self.extras.as_ref().filter(|section| !section.skipped)
    }

    pub fn industry(&self) -> Option<Industry> {
        self.company.as_ref().and_then(|company| company.industry)
    }

    pub fn stage(&self) -> Option<Stage> {
        self.company.as_ref().and_then(|company| company.stage)
    }

    /// Business name when one was entered.
    pub fn business_name(&self) -> Option<&str> {
        self.company
            .as_ref()
            .and_then(|company| company.business_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Rejects negative or non-finite amounts before any scoring runs.
    ///
    /// Skipped sections are still checked: the wizard never submits values
    /// it did not validate, so a bad number there points at a broken client.
    pub fn validate(&self) -> Result<(), InputError> {
        if let Some(financials) = &self.financials {
            let amounts = [
                ("revenue", financials.revenue),
                ("monthly_burn_rate", financials.monthly_burn_rate),
                ("net_profit_loss", financials.net_profit_loss),
                ("funding_raised", financials.funding_raised),
                ("planning_to_raise", financials.planning_to_raise),
            ];
            for (field, value) in amounts {
                if let Some(value) = value {
                    ensure_non_negative(field, value)?;
                }
            }
        }

        if let Some(traction) = &self.traction {
            if let Some(rate) = traction.growth_rate {
                if !rate.is_finite() {
                    return Err(InputError::NonFinite {
                        field: "growth_rate",
                    });
                }
            }
        }

        Ok(())
    }
}

fn ensure_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

/// Precondition violations detected by [`WizardAnswers::validate`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Step one of the wizard: who the company is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    #[serde(default)]
    pub business_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub industry: Option<Industry>,
    #[serde(default)]
    pub stage: Option<Stage>,
    #[serde(default, alias = "isLaunched")]
    pub launched: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialsSection {
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub monthly_burn_rate: Option<f64>,
    #[serde(default)]
    pub net_profit_loss: Option<f64>,
    #[serde(default)]
    pub funding_raised: Option<f64>,
    #[serde(default)]
    pub planning_to_raise: Option<f64>,
    #[serde(default, alias = "skipFinancials")]
    pub skipped: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TractionSection {
    #[serde(default)]
    pub customer_count: Option<u64>,
    /// Percentage points; negative values describe shrinking businesses.
    #[serde(default)]
    pub growth_rate: Option<f64>,
    #[serde(default)]
    pub growth_period: Option<GrowthPeriod>,
    #[serde(default)]
    pub unique_value: Option<String>,
    #[serde(default)]
    pub competitors: Option<String>,
    #[serde(default, alias = "skipTraction")]
    pub skipped: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtrasSection {
    #[serde(default, alias = "linkedinUrl")]
    pub profile_url: Option<String>,
    #[serde(default, alias = "crunchbaseUrl")]
    pub directory_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub uploaded_files: Vec<UploadedFile>,
    #[serde(default, alias = "skipExtras")]
    pub skipped: bool,
}

/// Reference to a document the founder attached; the bytes live elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Saas,
    Ai,
    Fintech,
    Healthtech,
    Biotech,
    Ecommerce,
    #[serde(other)]
    Other,
}

impl Industry {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Saas,
            Self::Ai,
            Self::Fintech,
            Self::Healthtech,
            Self::Biotech,
            Self::Ecommerce,
            Self::Other,
        ]
    }

    pub const fn slug(self) -> &'static str {
        match self {
            Self::Saas => "saas",
            Self::Ai => "ai",
            Self::Fintech => "fintech",
            Self::Healthtech => "healthtech",
            Self::Biotech => "biotech",
            Self::Ecommerce => "ecommerce",
            Self::Other => "other",
        }
    }

    /// Base-value multiplier applied in the first estimation stage.
    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Saas => 3.0,
            Self::Ai => 4.0,
            Self::Fintech => 3.5,
            Self::Healthtech => 2.5,
            Self::Biotech => 2.0,
            Self::Ecommerce => 1.5,
            Self::Other => 1.0,
        }
    }

    /// Unknown slugs fall back to [`Industry::Other`].
    pub fn from_slug(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|industry| industry.slug() == normalized)
            .unwrap_or(Self::Other)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Idea,
    Mvp,
    Launched,
    Growth,
    #[serde(other)]
    Unrecognized,
}

impl Stage {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Idea => "idea",
            Self::Mvp => "mvp",
            Self::Launched => "launched",
            Self::Growth => "growth",
            Self::Unrecognized => "unrecognized",
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Idea => 0.5,
            Self::Mvp => 1.0,
            Self::Launched => 2.0,
            Self::Growth => 4.0,
            Self::Unrecognized => 1.0,
        }
    }

    pub fn from_slug(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "idea" => Self::Idea,
            "mvp" => Self::Mvp,
            "launched" => Self::Launched,
            "growth" => Self::Growth,
            _ => Self::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthPeriod {
    #[default]
    Monthly,
    Quarterly,
    Yearly,
}

impl GrowthPeriod {
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "monthly" => Some(Self::Monthly),
            "quarterly" => Some(Self::Quarterly),
            "yearly" | "annual" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}
