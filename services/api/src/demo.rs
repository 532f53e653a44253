use crate::infra::valuation_engine;
use chrono::Utc;
use clap::Args;
use startup_valuation::config::AppConfig;
use startup_valuation::error::AppError;
use startup_valuation::workflows::valuation::{
    format_currency, CompanyProfile, ExtrasSection, FinancialsSection, GrowthPeriod, Industry,
    Stage, TractionSection, UploadedFile, ValuationAssessment, ValuationEngine, ValuationExport,
    WizardAnswers,
};
use startup_valuation::workflows::wizard_import::WizardImporter;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// JSON file containing the wizard answers
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the assessment as JSON instead of a readable summary
    #[arg(long)]
    pub(crate) json: bool,
    /// Directory to write the downloadable valuation snapshot into
    #[arg(long)]
    pub(crate) export_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// CSV export with one wizard submission per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Show the score and adjustment breakdown for each step
    #[arg(long)]
    pub(crate) verbose: bool,
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        input,
        json,
        export_dir,
    } = args;

    let config = AppConfig::load()?;
    let engine = valuation_engine(&config);
    let raw = std::fs::read_to_string(&input)?;
    let answers: WizardAnswers = serde_json::from_str(&raw)?;
    let assessment = engine.assess(&answers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        render_assessment(&assessment, true);
    }

    if let Some(dir) = export_dir {
        let export = ValuationExport::new(&answers, &assessment, Utc::now());
        let path = dir.join(export.file_name());
        std::fs::write(&path, export.to_json()?)?;
        println!("\nSnapshot written to {}", path.display());
    }

    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = valuation_engine(&config);
    let batch = WizardImporter::from_path(&args.csv)?;

    println!("Imported {} wizard submission(s)", batch.len());
    for (index, answers) in batch.iter().enumerate() {
        let assessment = engine.assess(answers)?;
        let name = answers.business_name().unwrap_or("(unnamed)");
        println!(
            "{:>3}. {} | {} | {}% {}",
            index + 1,
            name,
            assessment.formatted_estimate,
            assessment.score,
            assessment.confidence_label
        );
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let engine = ValuationEngine::default();

    println!("Startup valuation demo");
    for (title, answers) in demo_steps() {
        let assessment = engine.assess(&answers)?;
        println!("\n== {title}");
        render_assessment(&assessment, args.verbose);
    }

    Ok(())
}

fn render_assessment(assessment: &ValuationAssessment, verbose: bool) {
    println!(
        "Provisional valuation: {} ({})",
        assessment.formatted_estimate, assessment.estimate
    );
    println!(
        "Confidence: {}% ({})",
        assessment.score, assessment.confidence_label
    );

    if assessment.summary.is_empty() {
        println!("Summary: none");
    } else {
        println!("Summary");
        for stat in &assessment.summary {
            println!("- {}: {}", stat.label, stat.value);
        }
    }

    if verbose {
        println!("Confidence signals");
        for component in &assessment.confidence_components {
            println!("- {}: +{}", component.signal.label(), component.points);
        }
        println!("Adjustments");
        for step in &assessment.adjustments {
            println!(
                "- {:?}: {} ({})",
                step.kind,
                format_currency(step.running_value),
                step.notes
            );
        }
    }
}

/// A founder filling in the wizard one step at a time.
fn demo_steps() -> Vec<(&'static str, WizardAnswers)> {
    let company = CompanyProfile {
        business_name: Some("Acme Analytics".to_string()),
        country: Some("Finland".to_string()),
        industry: Some(Industry::Saas),
        stage: Some(Stage::Launched),
        launched: true,
    };
    let financials = FinancialsSection {
        revenue: Some(500_000.0),
        monthly_burn_rate: Some(40_000.0),
        funding_raised: Some(750_000.0),
        ..FinancialsSection::default()
    };
    let traction = TractionSection {
        customer_count: Some(1_500),
        growth_rate: Some(25.0),
        growth_period: Some(GrowthPeriod::Monthly),
        unique_value: Some("Automated revenue forecasting for B2B teams".to_string()),
        ..TractionSection::default()
    };
    let extras = ExtrasSection {
        website_url: Some("https://acme-analytics.example".to_string()),
        uploaded_files: vec![UploadedFile {
            name: "pitch-deck.pdf".to_string(),
            storage_key: None,
        }],
        ..ExtrasSection::default()
    };

    let step_one = WizardAnswers {
        company: Some(company),
        ..WizardAnswers::default()
    };
    let step_two = WizardAnswers {
        financials: Some(financials),
        ..step_one.clone()
    };
    let step_three = WizardAnswers {
        traction: Some(traction),
        ..step_two.clone()
    };
    let step_four = WizardAnswers {
        extras: Some(extras),
        ..step_three.clone()
    };

    vec![
        ("Company profile", step_one),
        ("With financials", step_two),
        ("With traction", step_three),
        ("With supporting material", step_four),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_steps_build_up_confidence() {
        let engine = ValuationEngine::default();
        let scores: Vec<u8> = demo_steps()
            .iter()
            .map(|(_, answers)| engine.assess(answers).expect("valid answers").score)
            .collect();

        assert_eq!(scores, vec![50, 80, 100, 100]);
    }

    #[test]
    fn demo_reaches_the_reference_estimate() {
        let engine = ValuationEngine::default();
        let (_, answers) = demo_steps().pop().expect("steps present");

        let assessment = engine.assess(&answers).expect("valid answers");

        assert_eq!(assessment.formatted_estimate, "$9.00M");
    }
}
