// File: crates/kline-core/src/options.rs
// Summary: Assembly of the declarative options tree handed to the rendering engine.

use serde_json::{json, Value};

use crate::dataset::PriceRecord;
use crate::merge::deep_merge;
use crate::theme::Palette;
use crate::transform::{build_moving_averages, dates, normalize};

/// Slider handle glyph for the zoom control, in the engine's path syntax.
const ZOOM_HANDLE_ICON: &str = "path://M10.7,11.9v-1.3H9.3v1.3c-4.9,0.3-8.8,4.4-8.8,9.4c0,5,3.9,9.1,8.8,9.4v1.3h1.3v-1.3c4.9-0.3,8.8-4.4,8.8-9.4C19.5,16.3,15.6,12.2,10.7,11.9z M13.3,24.4H6.7V23h6.6V24.4z M13.3,19.6H6.7v-1.4h6.6V19.6z";

/// Series list for one render pass: the candlestick series first, then one
/// line series per moving-average window, in window order.
pub fn build_series(
    data: &[PriceRecord],
    series_name: &str,
    windows: &[usize],
    palette: &Palette,
) -> Vec<Value> {
    let mut series = Vec::with_capacity(windows.len() + 1);
    series.push(json!({
        "type": "candlestick",
        "name": series_name,
        "data": normalize(data),
        "itemStyle": {
            "color": palette.candle_up,
            "color0": palette.candle_down,
            "borderColor": palette.candle_up,
            "borderColor0": palette.candle_down,
        },
    }));
    for ma in build_moving_averages(data, windows) {
        series.push(json!({
            "name": ma.name,
            "type": "line",
            "data": ma.values_json(),
            "smooth": true,
            "showSymbol": false,
            "lineStyle": { "width": 1 },
        }));
    }
    series
}

/// Full options tree: defaults merged with caller overrides, overrides
/// winning at every level.
///
/// Legend entries are derived from the series names, in series order, so the
/// two lists cannot drift apart. The tree is rebuilt from scratch on every
/// call; nothing is cached between renders.
pub fn build_options(
    data: &[PriceRecord],
    series_name: &str,
    windows: &[usize],
    overrides: Value,
    palette: &Palette,
) -> Value {
    let series = build_series(data, series_name, windows, palette);
    let legend: Vec<Value> = series.iter().filter_map(|s| s.get("name").cloned()).collect();

    let mut options = json!({
        "backgroundColor": palette.background,
        "legend": {
            "data": legend,
            "inactiveColor": palette.legend_inactive,
            "textStyle": { "color": palette.legend_text },
            "top": "2%",
        },
        "tooltip": {
            "trigger": "axis",
            "axisPointer": {
                "animation": false,
                "type": "cross",
                "lineStyle": {
                    "color": palette.crosshair,
                    "width": 1,
                    "opacity": 1,
                },
            },
        },
        "xAxis": {
            "type": "category",
            "data": dates(data),
            "axisLine": { "lineStyle": { "color": palette.axis_line } },
        },
        "yAxis": {
            "scale": true,
            "axisLine": { "lineStyle": { "color": palette.axis_line } },
            "splitLine": { "show": false },
        },
        "grid": { "bottom": 80 },
        "dataZoom": [
            {
                "textStyle": { "color": palette.zoom_text },
                "handleIcon": ZOOM_HANDLE_ICON,
                "handleSize": "80%",
                "dataBackground": {
                    "areaStyle": { "color": palette.zoom_fill },
                    "lineStyle": { "opacity": 0.8 },
                },
                "handleStyle": {
                    "shadowBlur": 3,
                    "shadowColor": "rgba(0, 0, 0, 0.6)",
                    "shadowOffsetX": 2,
                    "shadowOffsetY": 2,
                },
            },
            { "type": "inside" },
        ],
        "animation": false,
        "series": series,
    });
    deep_merge(&mut options, overrides);
    options
}
