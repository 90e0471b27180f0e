// File: crates/kline-component/src/lib.rs
// Summary: Component library entry point; exports the chart lifecycle API and its seams.

pub mod component;
pub mod engine;
pub mod error;
pub mod resize;
pub mod throttle;

pub use component::{ChartProps, StockChart, DEFAULT_WINDOWS, RESIZE_INTERVAL};
pub use engine::RenderEngine;
pub use error::LifecycleError;
pub use resize::{InertResizeSource, ResizeSource, ResizeSubscription};
pub use throttle::Throttle;
