//! Exam Dataset
//!
//! Read-only final-exam schedule, loaded once at startup from a JSON document
//! whose `data` array holds a header row followed by seven-cell exam rows.

use crate::logging::log_dataset_row_skipped;
use crate::models::exam_record::{ExamRecord, ExamRow, EXAM_FIELD_COUNT};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Dataset loading errors
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Dataset has no data rows")]
    MissingData,
}

#[derive(Debug, Deserialize)]
struct DatasetDocument {
    data: Option<Vec<Vec<Value>>>,
}

/// Immutable exam schedule
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExamDataset {
    rows: Vec<ExamRecord>,
}

impl ExamDataset {
    pub fn new(rows: Vec<ExamRecord>) -> Self {
        Self { rows }
    }

    /// Parse the schedule document, skipping the header and malformed rows
    pub fn from_json_str(json: &str) -> Result<Self, DatasetError> {
        let document: DatasetDocument = serde_json::from_str(json)?;
        let data = document.data.ok_or(DatasetError::MissingData)?;

        let rows = data
            .into_iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, cells)| {
                let row = row_from_cells(&cells);
                if row.is_none() {
                    log_dataset_row_skipped(index, cells.len());
                }
                row
            })
            .collect();

        Ok(Self { rows })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&json)?;
        info!("Loaded {} exams from {}", dataset.len(), path.display());
        Ok(dataset)
    }

    pub fn rows(&self) -> &[ExamRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn row_from_cells(cells: &[Value]) -> Option<ExamRecord> {
    if cells.len() != EXAM_FIELD_COUNT {
        return None;
    }
    let strings: Vec<String> = cells.iter().map(cell_text).collect();
    let row: ExamRow = strings.try_into().ok()?;
    Some(row.into())
}

fn cell_text(cell: &Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
