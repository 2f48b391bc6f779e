// Shared formatting helpers for state views

use super::{Mark, Row};
use std::fmt::Display;

pub const INFINITY: &str = "∞";

/// Format an optional distance, `None` meaning unreachable
pub fn distance(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => INFINITY.to_string(),
    }
}

/// Format an optional value, `None` shown as a dash
pub fn optional<T: Display>(value: Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

/// Comma separated list
pub fn list<T: Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A labeled row of values, each marked by `mark(index)`
pub fn marked_row<T: Display>(
    label: &str,
    values: &[T],
    mut mark: impl FnMut(usize) -> Mark,
) -> Row {
    let mut row = Row::labeled(label);
    for (i, v) in values.iter().enumerate() {
        row.push(v.to_string(), mark(i));
    }
    row
}

/// Header row of column indices
pub fn index_row(label: &str, len: usize) -> Row {
    let mut row = Row::labeled(label);
    for i in 0..len {
        row.push(i.to_string(), Mark::Label);
    }
    row
}

/// Matrix of optional values with row/column headers
pub fn matrix_rows(
    col_labels: &[String],
    row_labels: &[String],
    cells: &[Vec<Option<i64>>],
    mut mark: impl FnMut(usize, usize) -> Mark,
) -> Vec<Row> {
    let mut rows = Vec::with_capacity(cells.len() + 1);
    let mut header = Row::labeled("");
    for label in col_labels {
        header.push(label.clone(), Mark::Label);
    }
    rows.push(header);
    for (i, line) in cells.iter().enumerate() {
        let label = row_labels.get(i).cloned().unwrap_or_default();
        let mut row = Row::labeled(label);
        for (j, value) in line.iter().enumerate() {
            row.push(distance(*value), mark(i, j));
        }
        rows.push(row);
    }
    rows
}

/// Node label lookup that tolerates out-of-range indices
pub fn label_of(labels: &[String], index: usize) -> String {
    labels
        .get(index)
        .cloned()
        .unwrap_or_else(|| format!("#{}", index))
}
