// File: crates/kline-core/src/error.rs
// Summary: Data-layer error type for malformed price rows.

use thiserror::Error;

/// A raw row could not be turned into a price record. Construction stops at
/// the first bad row; no partial dataset is handed out.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DataError {
    #[error("row {row}: field `{field}` is not numeric (got {value})")]
    NotNumeric {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("row {row}: expected 8 fields, got {got}")]
    ShortRow { row: usize, got: usize },
}
