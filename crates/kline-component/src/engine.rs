// File: crates/kline-component/src/engine.rs
// Summary: Seam to the external declarative rendering engine.

use serde_json::Value;

/// The drawing engine behind the component. One handle is owned by exactly
/// one component instance and is released (dropped) exactly once, on dispose.
pub trait RenderEngine {
    /// Replace the engine's options tree with `options`. Whole-tree
    /// replacement; the engine never sees partial patches.
    fn apply(&mut self, options: &Value);

    /// Relayout against the current viewport. Data is untouched.
    fn resize(&mut self);
}
