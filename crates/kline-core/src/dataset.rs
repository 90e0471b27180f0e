// File: crates/kline-core/src/dataset.rs
// Summary: Price record model and the positional row contract for daily K-line data.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DataError;

/// Fields per raw row: date, open, close, change amount, change-percent label,
/// low, high, volume. The index mapping is a fixed external contract.
pub const FIELDS_PER_ROW: usize = 8;

/// One trading day. Source order is chronological order; callers hand the
/// records over as an ordered slice and the slice order is the x-axis order.
///
/// `change_percent` is a display label (e.g. "+1.34%") and is never used
/// arithmetically.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: String,
    pub open: f64,
    pub close: f64,
    pub low: f64,
    pub high: f64,
    pub change_amount: f64,
    pub change_percent: String,
    pub volume: f64,
}

impl PriceRecord {
    /// Build a record from one raw positional row.
    ///
    /// Mapping: index 0 = date, 1 = open, 2 = close, 3 = change amount,
    /// 4 = change-percent label, 5 = low, 6 = high, 7 = volume.
    /// Numeric fields accept JSON numbers and numeric strings; anything else
    /// is a `DataError` naming the row and field.
    pub fn from_row(row_index: usize, row: &[Value]) -> Result<Self, DataError> {
        if row.len() < FIELDS_PER_ROW {
            return Err(DataError::ShortRow {
                row: row_index,
                got: row.len(),
            });
        }
        Ok(Self {
            date: label(&row[0]),
            open: number(row_index, "open", &row[1])?,
            close: number(row_index, "close", &row[2])?,
            change_amount: number(row_index, "change_amount", &row[3])?,
            change_percent: label(&row[4]),
            low: number(row_index, "low", &row[5])?,
            high: number(row_index, "high", &row[6])?,
            volume: number(row_index, "volume", &row[7])?,
        })
    }
}

/// Convert a whole raw dataset. The first bad row aborts the conversion.
pub fn dataset_from_rows(rows: &[Vec<Value>]) -> Result<Vec<PriceRecord>, DataError> {
    rows.iter()
        .enumerate()
        .map(|(i, row)| PriceRecord::from_row(i, row))
        .collect()
}

fn label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn number(row: usize, field: &'static str, value: &Value) -> Result<f64, DataError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| DataError::NotNumeric {
        row,
        field,
        value: value.to_string(),
    })
}
