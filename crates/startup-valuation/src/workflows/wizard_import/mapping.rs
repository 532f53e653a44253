use super::parser::{parse_flag, WizardRow};
use crate::workflows::valuation::{
    CompanyProfile, ExtrasSection, FinancialsSection, GrowthPeriod, Industry, Stage,
    TractionSection, UploadedFile, WizardAnswers,
};

/// Builds answers from a row; a section exists only if one of its cells was filled.
pub(crate) fn answers_from_row(row: WizardRow) -> WizardAnswers {
    let WizardRow {
        business_name,
        country,
        industry,
        stage,
        launched,
        revenue,
        monthly_burn_rate,
        net_profit_loss,
        funding_raised,
        planning_to_raise,
        skip_financials,
        customer_count,
        growth_rate,
        growth_period,
        unique_value,
        competitors,
        skip_traction,
        profile_url,
        directory_url,
        website_url,
        uploaded_files,
        skip_extras,
    } = row;

    let company = (business_name.is_some()
        || country.is_some()
        || industry.is_some()
        || stage.is_some()
        || launched.is_some())
    .then(|| CompanyProfile {
        business_name,
        country,
        industry: industry.as_deref().map(Industry::from_slug),
        stage: stage.as_deref().map(Stage::from_slug),
        launched: parse_flag(launched.as_deref()),
    });

    let financials = (revenue.is_some()
        || monthly_burn_rate.is_some()
        || net_profit_loss.is_some()
        || funding_raised.is_some()
        || planning_to_raise.is_some()
        || skip_financials.is_some())
    .then(|| FinancialsSection {
        revenue,
        monthly_burn_rate,
        net_profit_loss,
        funding_raised,
        planning_to_raise,
        skipped: parse_flag(skip_financials.as_deref()),
    });

    let traction = (customer_count.is_some()
        || growth_rate.is_some()
        || growth_period.is_some()
        || unique_value.is_some()
        || competitors.is_some()
        || skip_traction.is_some())
    .then(|| TractionSection {
        customer_count,
        growth_rate,
        growth_period: growth_period.as_deref().and_then(GrowthPeriod::from_slug),
        unique_value,
        competitors,
        skipped: parse_flag(skip_traction.as_deref()),
    });

    let extras = (profile_url.is_some()
        || directory_url.is_some()
        || website_url.is_some()
        || uploaded_files.is_some()
        || skip_extras.is_some())
    .then(|| ExtrasSection {
        profile_url,
        directory_url,
        website_url,
        uploaded_files: split_files(uploaded_files.as_deref()),
        skipped: parse_flag(skip_extras.as_deref()),
    });

    WizardAnswers {
        company,
        financials,
        traction,
        extras,
    }
}

fn split_files(raw: Option<&str>) -> Vec<UploadedFile> {
    raw.map(|list| {
        list.split(';')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| UploadedFile {
                name: name.to_string(),
                storage_key: None,
            })
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_sections_stay_absent() {
        let answers = answers_from_row(WizardRow {
            business_name: Some("Solo".to_string()),
            ..WizardRow::default()
        });

        assert!(answers.company.is_some());
        assert!(answers.financials.is_none());
        assert!(answers.traction.is_none());
        assert!(answers.extras.is_none());
    }

    #[test]
    fn skip_flag_alone_creates_a_skipped_section() {
        let answers = answers_from_row(WizardRow {
            skip_financials: Some("yes".to_string()),
            ..WizardRow::default()
        });

        assert!(answers.financials().is_none());
        let financials = answers.financials.expect("section present");
        assert!(financials.skipped);
    }

    #[test]
    fn uploaded_files_are_split_on_semicolons() {
        let files = split_files(Some("deck.pdf; ; metrics.xlsx"));

        let names: Vec<&str> = files.iter().map(|file| file.name.as_str()).collect();
        assert_eq!(names, vec!["deck.pdf", "metrics.xlsx"]);
    }
}
