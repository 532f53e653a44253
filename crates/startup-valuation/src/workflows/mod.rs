pub mod valuation;
pub mod wizard_import;
