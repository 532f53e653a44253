use serde::{Deserialize, Deserializer};
use std::io::Read;

/// One flattened wizard submission as exported by the form backend.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct WizardRow {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) business_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) country: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) industry: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) stage: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) launched: Option<String>,

    #[serde(default)]
    pub(crate) revenue: Option<f64>,
    #[serde(default)]
    pub(crate) monthly_burn_rate: Option<f64>,
    #[serde(default)]
    pub(crate) net_profit_loss: Option<f64>,
    #[serde(default)]
    pub(crate) funding_raised: Option<f64>,
    #[serde(default)]
    pub(crate) planning_to_raise: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) skip_financials: Option<String>,

    #[serde(default)]
    pub(crate) customer_count: Option<u64>,
    #[serde(default)]
    pub(crate) growth_rate: Option<f64>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) growth_period: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) unique_value: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) competitors: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) skip_traction: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) profile_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) directory_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) website_url: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) uploaded_files: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub(crate) skip_extras: Option<String>,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<WizardRow>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();

    for record in csv_reader.deserialize::<WizardRow>() {
        rows.push(record?);
    }

    Ok(rows)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Spreadsheet-style truthiness: `true`, `yes`, `y`, `1` and `x`.
pub(crate) fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|raw| raw.trim().to_ascii_lowercase()).as_deref(),
        Some("true" | "yes" | "y" | "1" | "x")
    )
}
