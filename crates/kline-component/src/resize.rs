// File: crates/kline-component/src/resize.rs
// Summary: Scoped subscription to viewport-resize notifications.

/// Handle to an active resize subscription. Dropping it deregisters the
/// listener; the component drops its handle on dispose, before the engine
/// handle is released.
pub trait ResizeSubscription {}

/// Source of viewport-resize notifications: a window, a panel, or a test
/// harness. The host adapter forwards each notification to
/// `StockChart::notify_resize`.
pub trait ResizeSource {
    fn subscribe(&self) -> Box<dyn ResizeSubscription>;
}

/// Resize source for hosts without a resizable viewport (headless tools,
/// fixed surfaces). Subscriptions are inert.
pub struct InertResizeSource;

struct InertSubscription;

impl ResizeSubscription for InertSubscription {}

impl ResizeSource for InertResizeSource {
    fn subscribe(&self) -> Box<dyn ResizeSubscription> {
        Box::new(InertSubscription)
    }
}
