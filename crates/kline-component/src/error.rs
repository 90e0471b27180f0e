// File: crates/kline-component/src/error.rs
// Summary: Lifecycle misuse errors.

use thiserror::Error;

/// An operation arrived in a state that cannot serve it. Disposal is
/// terminal: a disposed chart rejects updates and resizes instead of
/// touching a released engine handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LifecycleError {
    #[error("chart is already mounted")]
    AlreadyMounted,
    #[error("chart is not mounted")]
    NotMounted,
    #[error("chart has been disposed")]
    Disposed,
}
