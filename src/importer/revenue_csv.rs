// ==========================================
// Sales Payroll - Revenue CSV Importer
// ==========================================
// Format: header `number,month,amount`, one registration per row
// Rows are validated as a batch, then applied with register_revenue
// ==========================================

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::domain::Representative;
use crate::importer::error::{ImportError, ImportResult};

const FIELD_NUMBER: &str = "number";
const FIELD_MONTH: &str = "month";
const FIELD_AMOUNT: &str = "amount";

pub struct RevenueCsvImporter;

impl RevenueCsvImporter {
    /// Apply a revenue CSV file to `reps`
    ///
    /// # Returns
    /// Number of rows applied
    pub fn import_file(path: &Path, reps: &mut [Representative]) -> ImportResult<usize> {
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        Self::import_reader(file, reps)
    }

    /// Apply revenue rows read from `reader`
    ///
    /// All-or-nothing: every row is parsed and validated first, and the
    /// representatives are only written once the whole file passes.
    /// Row numbers in errors count data rows from 1.
    pub fn import_reader<R: Read>(reader: R, reps: &mut [Representative]) -> ImportResult<usize> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut index: HashMap<i32, usize> = HashMap::with_capacity(reps.len());
        for (i, rep) in reps.iter().enumerate() {
            if index.insert(rep.number(), i).is_some() {
                return Err(ImportError::DuplicateRepresentative(rep.number()));
            }
        }

        // ===== stage: (row, representative index, month, amount) =====
        let mut staged: Vec<(usize, usize, i32, f64)> = Vec::new();
        for (row_idx, result) in reader.records().enumerate() {
            let row = row_idx + 1;
            let record = result?;

            let fields: HashMap<&str, &str> = headers
                .iter()
                .map(String::as_str)
                .zip(record.iter())
                .collect();

            // blank line
            if fields.values().all(|v| v.is_empty()) {
                continue;
            }

            let number: i32 = parse_field(&fields, FIELD_NUMBER, row)?;
            let month: i32 = parse_field(&fields, FIELD_MONTH, row)?;
            let amount: f64 = parse_field(&fields, FIELD_AMOUNT, row)?;

            let rep_idx = *index
                .get(&number)
                .ok_or(ImportError::UnknownRepresentative { row, number })?;

            Representative::validate_revenue(month, amount)
                .map_err(|source| ImportError::InvalidRow { row, source })?;
            staged.push((row, rep_idx, month, amount));
        }

        // ===== apply =====
        for &(row, rep_idx, month, amount) in &staged {
            reps[rep_idx]
                .register_revenue(month, amount)
                .map_err(|source| ImportError::InvalidRow { row, source })?;
        }

        tracing::info!(rows = staged.len(), "revenue imported");
        Ok(staged.len())
    }
}

fn parse_field<T: FromStr>(fields: &HashMap<&str, &str>, field: &str, row: usize) -> ImportResult<T> {
    let value = fields
        .get(field)
        .copied()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ImportError::MissingField {
            row,
            field: field.to_string(),
        })?;

    value.parse().map_err(|_| ImportError::TypeConversionError {
        row,
        field: field.to_string(),
        value: value.to_string(),
    })
}
