//! Quantity-table input.
//!
//! Profiles and order items arrive as CSV tables with a header row naming a
//! `length` and a `count` column, in any column order. Each data row
//! contributes `count` copies of `length` to the resulting multiset, so a
//! rack of three 1000-bars is one row, not three.

use std::fs;
use std::path::Path;

use thiserror::Error;
use u_cutstock_core::Length;

/// Errors raised while reading a quantity table.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing header row")]
    MissingHeader,

    #[error("missing `{0}` column in header")]
    MissingColumn(&'static str),

    #[error("line {line}: invalid number `{value}`")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: length must be positive")]
    ZeroLength { line: usize },

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Reads a quantity table from a CSV file.
pub fn read_lengths(path: impl AsRef<Path>) -> Result<Vec<Length>, ParseError> {
    parse_lengths(&fs::read_to_string(path)?)
}

/// Parses a quantity table from CSV text.
pub fn parse_lengths(text: &str) -> Result<Vec<Length>, ParseError> {
    let mut lines = text.lines().enumerate();

    let (_, header) = lines.next().ok_or(ParseError::MissingHeader)?;
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    let length_column = find_column(&columns, "length")?;
    let count_column = find_column(&columns, "count")?;

    let mut lengths = Vec::new();
    for (index, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let row = index + 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != columns.len() {
            return Err(ParseError::FieldCount {
                line: row,
                expected: columns.len(),
                found: fields.len(),
            });
        }

        let length = parse_number(fields[length_column], row)?;
        if length == 0 {
            return Err(ParseError::ZeroLength { line: row });
        }
        let count = parse_number(fields[count_column], row)?;

        lengths.extend(std::iter::repeat(length).take(count as usize));
    }

    Ok(lengths)
}

fn find_column(columns: &[&str], name: &'static str) -> Result<usize, ParseError> {
    columns
        .iter()
        .position(|column| column.eq_ignore_ascii_case(name))
        .ok_or(ParseError::MissingColumn(name))
}

fn parse_number(field: &str, line: usize) -> Result<Length, ParseError> {
    field.parse().map_err(|_| ParseError::InvalidNumber {
        line,
        value: field.to_string(),
    })
}
