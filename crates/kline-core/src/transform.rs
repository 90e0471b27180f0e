// File: crates/kline-core/src/transform.rs
// Summary: Series derivation: date axis, candlestick tuples, and moving averages.

use serde_json::{json, Value};

use crate::dataset::PriceRecord;

/// Placeholder emitted where a moving average is undefined; the rendering
/// engine draws it as a gap.
pub const GAP: &str = "-";

/// A named moving-average line. `values` has one entry per input record;
/// `None` marks positions where the average is undefined.
#[derive(Clone, Debug, PartialEq)]
pub struct MovingAverageSeries {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

impl MovingAverageSeries {
    /// Project the values into the engine's wire form, with `GAP` standing in
    /// for undefined positions.
    pub fn values_json(&self) -> Vec<Value> {
        self.values
            .iter()
            .map(|v| match v {
                Some(x) => json!(x),
                None => Value::String(GAP.to_string()),
            })
            .collect()
    }
}

/// Date labels in source order. No dedup, no format validation.
pub fn dates(data: &[PriceRecord]) -> Vec<String> {
    data.iter().map(|r| r.date.clone()).collect()
}

/// Candlestick data points, one JSON array per record:
/// [open, close, low, high, change amount, change-percent label, volume].
pub fn normalize(data: &[PriceRecord]) -> Vec<Value> {
    data.iter()
        .map(|r| {
            json!([
                r.open,
                r.close,
                r.low,
                r.high,
                r.change_amount,
                r.change_percent,
                r.volume
            ])
        })
        .collect()
}

/// Moving average of close prices with a lagged window.
///
/// The first `window` entries are undefined. The entry at index `i` (for
/// `i >= window`) is the mean of the closes at `[i - window, i - 1]`, so the
/// window ends one record before the position it annotates. Both the extra
/// leading gap and the one-step lag are part of the series contract; callers
/// depend on the curves lining up with existing charts.
///
/// Means are rounded to 4 decimal places, half away from zero.
pub fn moving_average(data: &[PriceRecord], window: usize) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(data.len());
    if window == 0 {
        out.resize(data.len(), None);
        return out;
    }
    for i in 0..data.len() {
        if i < window {
            out.push(None);
            continue;
        }
        let sum: f64 = data[i - window..i].iter().map(|r| r.close).sum();
        out.push(Some(round4(sum / window as f64)));
    }
    out
}

/// One moving-average series per requested window, in the given order,
/// named "MA" + window.
pub fn build_moving_averages(data: &[PriceRecord], windows: &[usize]) -> Vec<MovingAverageSeries> {
    windows
        .iter()
        .map(|&w| MovingAverageSeries {
            name: format!("MA{w}"),
            values: moving_average(data, w),
        })
        .collect()
}

fn round4(v: f64) -> f64 {
    (v * 10_000.0).round() / 10_000.0
}
