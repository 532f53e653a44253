//! Batch import of wizard submissions from CSV exports.

mod mapping;
mod parser;

use crate::workflows::valuation::{InputError, WizardAnswers};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum WizardImportError {
    #[error("failed to read wizard export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid wizard CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: InputError,
    },
}

pub struct WizardImporter;

impl WizardImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<WizardAnswers>, WizardImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Parses every row and validates it; the first invalid row aborts the batch.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<WizardAnswers>, WizardImportError> {
        let rows = parser::parse_rows(reader)?;
        let mut batch = Vec::with_capacity(rows.len());

        for (index, row) in rows.into_iter().enumerate() {
            let answers = mapping::answers_from_row(row);
            if let Err(source) = answers.validate() {
                warn!(row = index + 1, error = %source, "rejecting wizard export row");
                return Err(WizardImportError::InvalidRow {
                    row: index + 1,
                    source,
                });
            }
            batch.push(answers);
        }

        debug!(rows = batch.len(), "wizard export imported");
        Ok(batch)
    }
}
