//! Aggregates a transaction CSV (`Category`, `Amount` columns) into one
//! spending entry per category.

mod parser;

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::domain::SpendingEntry;
use crate::normalize::{category_key, display_name};

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read spending export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid spending CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: empty category")]
    EmptyCategory { line: u64 },
    #[error("line {line}: amount for '{category}' must be a finite, non-negative number, found {amount}")]
    InvalidAmount {
        line: u64,
        category: String,
        amount: f64,
    },
}

pub struct SpendingImporter;

impl SpendingImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<SpendingEntry>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Sums amounts per category, keeping the first spelling and first-seen order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<SpendingEntry>, ImportError> {
        let records = parser::parse_records(reader)?;
        let row_count = records.len();
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<SpendingEntry> = Vec::new();

        for record in records {
            let category = display_name(&record.category);
            if category.is_empty() {
                return Err(ImportError::EmptyCategory { line: record.line });
            }
            if !record.amount.is_finite() || record.amount < 0.0 {
                return Err(ImportError::InvalidAmount {
                    line: record.line,
                    category,
                    amount: record.amount,
                });
            }

            match positions.get(&category_key(&category)) {
                Some(&index) => entries[index].amount += record.amount,
                None => {
                    positions.insert(category_key(&category), entries.len());
                    entries.push(SpendingEntry::new(category, record.amount));
                }
            }
        }

        debug!(
            rows = row_count,
            categories = entries.len(),
            "imported spending CSV"
        );

        Ok(entries)
    }
}
