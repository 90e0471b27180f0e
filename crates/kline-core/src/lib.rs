// File: crates/kline-core/src/lib.rs
// Summary: Core library entry point; exports dataset model, series derivation, and options assembly.

pub mod dataset;
pub mod error;
pub mod merge;
pub mod options;
pub mod theme;
pub mod tooltip;
pub mod transform;

pub use dataset::{dataset_from_rows, PriceRecord, FIELDS_PER_ROW};
pub use error::DataError;
pub use merge::deep_merge;
pub use options::{build_options, build_series};
pub use theme::Palette;
pub use tooltip::format_tooltip;
pub use transform::{build_moving_averages, dates, moving_average, normalize, MovingAverageSeries, GAP};
