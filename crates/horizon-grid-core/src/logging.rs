//! Logging facilities for Horizon Grid.
//!
//! Horizon Grid uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_grid=debug")
//!         .init();
//! }
//! ```
//!
//! Every event emitted by the workspace carries one of the [`targets`] below,
//! so subsystems can be filtered independently.

/// Target names for log filtering.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "horizon_grid_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_grid_core::signal";
    /// Deferred task queue target.
    pub const TASK: &str = "horizon_grid_core::task";
    /// Column registry target.
    pub const COLUMNS: &str = "horizon_grid::columns";
    /// Row store and materialization target.
    pub const ROWS: &str = "horizon_grid::rows";
    /// Lazy row loader target.
    pub const LOADER: &str = "horizon_grid::loader";
    /// Focus traversal snapshot target.
    pub const TRAVERSAL: &str = "horizon_grid::traversal";
    /// Selection and focus state machine target.
    pub const SELECTION: &str = "horizon_grid::selection";
    /// Keyboard row navigation target.
    pub const NAVIGATION: &str = "horizon_grid::navigation";
    /// Configuration loading target.
    pub const CONFIG: &str = "horizon_grid::config";
}

/// A performance span guard for timing a section of grid work.
///
/// The span stays entered until the guard is dropped; the elapsed time is
/// logged at `trace` level on drop.
pub struct PerfSpan {
    name: &'static str,
    start: std::time::Instant,
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Start timing a named section.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "horizon_grid::perf", "perf", operation = name);
        Self {
            name,
            start: std::time::Instant::now(),
            span: span.entered(),
        }
    }
}

impl Drop for PerfSpan {
    fn drop(&mut self) {
        tracing::trace!(
            target: targets::CORE,
            operation = self.name,
            elapsed_us = self.start.elapsed().as_micros() as u64,
            "perf span finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span_with_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .try_init();
        let _span = PerfSpan::new("test_operation");
    }
}
