//! Parser for plain-text numeric evidence files.
//!
//! Schema: whitespace-delimited numbers, one row per line. Blank lines are
//! skipped and `#` starts a comment that runs to the end of the line. Every
//! data row must have the same number of fields. The evidence value is the
//! first field of the first data row, so both `"3.14 0.01"` and a single
//! column `"3.14\n0.01\n"` yield `3.14`.

use crate::error::AppError;

const COMMENT: char = '#';

/// Parse every data row of a numeric text table.
pub fn parse_numeric_table(text: &str) -> Result<Vec<Vec<f64>>, AppError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let data = raw.split(COMMENT).next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let row = data
            .split_whitespace()
            .map(|field| {
                field.parse::<f64>().map_err(|_| {
                    AppError::parse(format!("Line {line_no}: '{field}' is not a number."))
                })
            })
            .collect::<Result<Vec<f64>, AppError>>()?;

        if let Some(first) = rows.first() {
            if first.len() != row.len() {
                return Err(AppError::parse(format!(
                    "Line {line_no}: expected {} columns, found {}.",
                    first.len(),
                    row.len()
                )));
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Parse the evidence value (first field of the first data row).
pub fn parse_evidence(text: &str) -> Result<f64, AppError> {
    let rows = parse_numeric_table(text)?;
    rows.first()
        .and_then(|row| row.first())
        .copied()
        .ok_or_else(|| AppError::parse("Evidence file contains no numeric data."))
}
