use super::domain::{Industry, WizardAnswers};
use serde::{Deserialize, Serialize};

/// Tunable constants of the provisional valuation cascade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationConfig {
    pub base_valuation: f64,
    pub saas_revenue_multiple: f64,
    pub default_revenue_multiple: f64,
    /// Growth rate (percentage points) that must be exceeded before growth compounds.
    pub growth_threshold_pct: f64,
    /// Customer count that must be exceeded before the scale bonus applies.
    pub scale_customer_threshold: u64,
    pub scale_bonus: f64,
}

impl EstimationConfig {
    pub fn standard() -> Self {
        Self {
            base_valuation: 1_000_000.0,
            saas_revenue_multiple: 8.0,
            default_revenue_multiple: 4.0,
            growth_threshold_pct: 10.0,
            scale_customer_threshold: 1_000,
            scale_bonus: 1.2,
        }
    }

    pub fn with_base_valuation(mut self, base_valuation: f64) -> Self {
        self.base_valuation = base_valuation;
        self
    }

    fn revenue_multiple(&self, industry: Option<Industry>) -> f64 {
        match industry {
            Some(Industry::Saas) => self.saas_revenue_multiple,
            _ => self.default_revenue_multiple,
        }
    }
}

impl Default for EstimationConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentKind {
    Base,
    RevenueFloor,
    Growth,
    ScaleBonus,
}

/// One applied stage and the running estimate it produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateAdjustment {
    pub kind: AdjustmentKind,
    pub running_value: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationEstimate {
    /// Whole currency units.
    pub amount: u64,
    pub adjustments: Vec<EstimateAdjustment>,
}

/// Provisional valuation in whole currency units.
pub fn estimate_valuation(answers: &WizardAnswers, config: &EstimationConfig) -> u64 {
    estimate_breakdown(answers, config).amount
}

/// Runs the cascade in its fixed order: base, revenue floor, growth, scale.
///
/// The revenue floor is compared against the base value only; growth and
/// scale compound on whichever of the two won.
pub fn estimate_breakdown(answers: &WizardAnswers, config: &EstimationConfig) -> ValuationEstimate {
    let industry = answers.industry();
    let stage = answers.stage();
    let mut adjustments = Vec::new();

    let industry_multiplier = industry.map(Industry::multiplier).unwrap_or(1.0);
    let stage_multiplier = stage.map(|stage| stage.multiplier()).unwrap_or(1.0);
    let mut running = config.base_valuation * industry_multiplier * stage_multiplier;
    adjustments.push(EstimateAdjustment {
        kind: AdjustmentKind::Base,
        running_value: running,
        notes: format!(
            "base {:.0} x industry {} x stage {}",
            config.base_valuation, industry_multiplier, stage_multiplier
        ),
    });

    if let Some(revenue) = answers
        .financials()
        .and_then(|financials| financials.revenue)
        .filter(|revenue| *revenue > 0.0)
    {
        let multiple = config.revenue_multiple(industry);
        let revenue_value = revenue * multiple;
        running = running.max(revenue_value);
        adjustments.push(EstimateAdjustment {
            kind: AdjustmentKind::RevenueFloor,
            running_value: running,
            notes: format!("revenue {revenue:.0} x {multiple} = {revenue_value:.0}"),
        });
    }

    if let Some(traction) = answers.traction() {
        if let Some(rate) = traction
            .growth_rate
            .filter(|rate| *rate > config.growth_threshold_pct)
        {
            running *= 1.0 + rate / 100.0;
            adjustments.push(EstimateAdjustment {
                kind: AdjustmentKind::Growth,
                running_value: running,
                notes: format!("growth {rate}% above {}%", config.growth_threshold_pct),
            });
        }

        if let Some(customers) = traction
            .customer_count
            .filter(|count| *count > config.scale_customer_threshold)
        {
            running *= config.scale_bonus;
            adjustments.push(EstimateAdjustment {
                kind: AdjustmentKind::ScaleBonus,
                running_value: running,
                notes: format!(
                    "{customers} customers above {}",
                    config.scale_customer_threshold
                ),
            });
        }
    }

    ValuationEstimate {
        amount: running.max(0.0).round() as u64,
        adjustments,
    }
}
