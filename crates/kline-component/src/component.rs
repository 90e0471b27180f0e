// File: crates/kline-component/src/component.rs
// Summary: Host-framework-agnostic chart component with an explicit lifecycle.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use kline_core::{build_moving_averages, build_options, format_tooltip, Palette, PriceRecord};

use crate::engine::RenderEngine;
use crate::error::LifecycleError;
use crate::resize::{ResizeSource, ResizeSubscription};
use crate::throttle::Throttle;

/// Moving-average windows applied when the caller does not pick their own.
pub const DEFAULT_WINDOWS: [usize; 4] = [5, 10, 20, 30];

/// Minimum spacing between two engine relayouts driven by resize
/// notifications.
pub const RESIZE_INTERVAL: Duration = Duration::from_millis(100);

/// Everything the component needs for one render: the dataset, the display
/// name of the candlestick series, the moving-average windows, and an
/// options subtree merged over the defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChartProps {
    pub dataset: Vec<PriceRecord>,
    pub series_name: String,
    #[serde(default = "default_windows")]
    pub windows: Vec<usize>,
    #[serde(default = "empty_overrides")]
    pub overrides: Value,
}

impl ChartProps {
    pub fn new(dataset: Vec<PriceRecord>, series_name: impl Into<String>) -> Self {
        Self {
            dataset,
            series_name: series_name.into(),
            windows: DEFAULT_WINDOWS.to_vec(),
            overrides: empty_overrides(),
        }
    }
}

fn default_windows() -> Vec<usize> {
    DEFAULT_WINDOWS.to_vec()
}

fn empty_overrides() -> Value {
    Value::Object(serde_json::Map::new())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Unmounted,
    Mounted,
    Disposed,
}

/// Candlestick chart over an external rendering engine.
///
/// Lifecycle: Unmounted, then `attach` once, any number of `update` /
/// `notify_resize` calls while mounted, then `dispose`. Disposal is terminal
/// and idempotent; every later operation is rejected without touching the
/// released engine handle. All work is synchronous; the host's event
/// dispatch serializes calls.
pub struct StockChart {
    props: ChartProps,
    palette: Palette,
    phase: Phase,
    engine: Option<Box<dyn RenderEngine>>,
    subscription: Option<Box<dyn ResizeSubscription>>,
    resize_gate: Throttle,
}

impl StockChart {
    pub fn new(props: ChartProps) -> Self {
        Self {
            props,
            palette: Palette::default(),
            phase: Phase::Unmounted,
            engine: None,
            subscription: None,
            resize_gate: Throttle::new(RESIZE_INTERVAL),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.phase == Phase::Mounted
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    /// First attachment to a host surface: take ownership of the engine
    /// handle, acquire the resize subscription, and apply the initial
    /// options. Valid exactly once.
    pub fn attach(
        &mut self,
        mut engine: Box<dyn RenderEngine>,
        resize: &dyn ResizeSource,
    ) -> Result<(), LifecycleError> {
        match self.phase {
            Phase::Mounted => return Err(LifecycleError::AlreadyMounted),
            Phase::Disposed => return Err(LifecycleError::Disposed),
            Phase::Unmounted => {}
        }
        self.subscription = Some(resize.subscribe());
        engine.apply(&self.build());
        self.engine = Some(engine);
        self.phase = Phase::Mounted;
        debug!(
            series = %self.props.series_name,
            rows = self.props.dataset.len(),
            "chart attached"
        );
        Ok(())
    }

    /// Replace the props and re-apply the full options tree. There is no
    /// incremental path: every update rebuilds everything.
    pub fn update(&mut self, props: ChartProps) -> Result<(), LifecycleError> {
        match self.phase {
            Phase::Unmounted => return Err(LifecycleError::NotMounted),
            Phase::Disposed => return Err(LifecycleError::Disposed),
            Phase::Mounted => {}
        }
        self.props = props;
        let options = self.build();
        if let Some(engine) = self.engine.as_mut() {
            engine.apply(&options);
        }
        debug!(rows = self.props.dataset.len(), "chart updated");
        Ok(())
    }

    /// Viewport-resize notification. Relayouts the engine at most once per
    /// `RESIZE_INTERVAL`; notifications inside a closed window are dropped.
    pub fn notify_resize(&mut self) -> Result<(), LifecycleError> {
        self.notify_resize_at(Instant::now())
    }

    /// `notify_resize` with an explicit clock, for deterministic hosts.
    pub fn notify_resize_at(&mut self, now: Instant) -> Result<(), LifecycleError> {
        match self.phase {
            Phase::Unmounted => return Err(LifecycleError::NotMounted),
            Phase::Disposed => return Err(LifecycleError::Disposed),
            Phase::Mounted => {}
        }
        if self.resize_gate.allow(now) {
            if let Some(engine) = self.engine.as_mut() {
                engine.resize();
            }
        } else {
            trace!("resize dropped by throttle");
        }
        Ok(())
    }

    /// Detach from the host surface: drop the resize subscription, then
    /// release the engine handle. Safe to call more than once; only the
    /// first call releases anything.
    pub fn dispose(&mut self) {
        if self.phase == Phase::Disposed {
            return;
        }
        self.subscription = None;
        self.engine = None;
        self.phase = Phase::Disposed;
        debug!("chart disposed");
    }

    /// Tooltip text block for the record at `index`, derived from the
    /// current props. `None` out of range.
    pub fn tooltip(&self, index: usize) -> Option<String> {
        let mas = build_moving_averages(&self.props.dataset, &self.props.windows);
        format_tooltip(&self.props.dataset, &mas, &self.props.series_name, index)
    }

    fn build(&self) -> Value {
        build_options(
            &self.props.dataset,
            &self.props.series_name,
            &self.props.windows,
            self.props.overrides.clone(),
            &self.palette,
        )
    }
}
