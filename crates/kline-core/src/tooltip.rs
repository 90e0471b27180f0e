// File: crates/kline-core/src/tooltip.rs
// Summary: Tooltip text block for a hovered axis position.

use crate::dataset::PriceRecord;
use crate::transform::{MovingAverageSeries, GAP};

/// Text block for the record at `index`, or `None` out of range.
///
/// Shows the primary series and date, the OHLC values, the day's change with
/// its percent label, volume scaled to hundred-millions of units (two fixed
/// decimals), the high-to-low amplitude with its share of the high, then one
/// line per moving-average series at that position.
///
/// Pure function of its inputs; nothing is retained between calls.
pub fn format_tooltip(
    data: &[PriceRecord],
    mas: &[MovingAverageSeries],
    series_name: &str,
    index: usize,
) -> Option<String> {
    let r = data.get(index)?;
    let amplitude = r.high - r.low;

    let mut lines = vec![
        series_name.to_string(),
        r.date.clone(),
        format!("Open: {}", r.open),
        format!("High: {}", r.high),
        format!("Low: {}", r.low),
        format!("Close: {}", r.close),
        format!("Change: {}({})", r.change_amount, r.change_percent),
        format!("Volume: {:.2} x100M", r.volume / 100_000_000.0),
        format!(
            "Amplitude: {:.2}({:.2}%)",
            amplitude,
            amplitude / r.high * 100.0
        ),
    ];
    for ma in mas {
        let value = match ma.values.get(index).copied().flatten() {
            Some(v) => v.to_string(),
            None => GAP.to_string(),
        };
        lines.push(format!("{}: {}", ma.name, value));
    }
    Some(lines.join("\n"))
}
