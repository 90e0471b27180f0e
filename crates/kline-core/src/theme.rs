// File: crates/kline-core/src/theme.rs
// Summary: Named color palette for the default chart styling.

/// Colors used by the default options tree. Up/down follow the red-rises
/// convention of the original chart.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub candle_up: &'static str,
    pub candle_down: &'static str,
    pub axis_line: &'static str,
    pub legend_text: &'static str,
    pub legend_inactive: &'static str,
    pub crosshair: &'static str,
    pub zoom_text: &'static str,
    pub zoom_fill: &'static str,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#21202D",
            candle_up: "#FD1050",
            candle_down: "#0CF49B",
            axis_line: "#8392A5",
            legend_text: "#fff",
            legend_inactive: "#777",
            crosshair: "#376df4",
            zoom_text: "#8392A5",
            zoom_fill: "#8392A5",
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
