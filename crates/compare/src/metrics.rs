// Metrics hooks for the `compare` crate.
//
// Callers install a global `CompareMetrics` implementation via
// [`set_compare_metrics`], then [`build_matrix`](crate::build_matrix) will
// report per-build latency, document counts, and row counts. This keeps
// instrumentation decoupled from any specific metrics backend.
use std::sync::{Arc, RwLock};
use std::time::Duration;

use once_cell::sync::OnceCell;

/// Metrics observer for matrix builds.
pub trait CompareMetrics: Send + Sync {
    /// Record the outcome of a matrix build.
    ///
    /// `main_file_name` names the reference document, `document_count` is the
    /// total number of documents involved (reference included), `entry_count`
    /// is the number of rows in the finished matrix, and `latency` is the
    /// wall-clock duration between the start and end of the build.
    fn record_compare(
        &self,
        main_file_name: &str,
        document_count: usize,
        entry_count: usize,
        latency: Duration,
    );
}

fn metrics_lock() -> &'static RwLock<Option<Arc<dyn CompareMetrics>>> {
    static METRICS: OnceCell<RwLock<Option<Arc<dyn CompareMetrics>>>> = OnceCell::new();
    METRICS.get_or_init(|| RwLock::new(None))
}

pub(crate) fn metrics_recorder() -> Option<Arc<dyn CompareMetrics>> {
    let guard = metrics_lock()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    guard.clone()
}

/// Install or clear the global compare metrics recorder.
///
/// This is typically called once during service startup so every matrix build
/// shares the same metrics backend.
pub fn set_compare_metrics(recorder: Option<Arc<dyn CompareMetrics>>) {
    let lock = metrics_lock();
    let mut guard = lock.write().expect("compare metrics lock poisoned");
    *guard = recorder;
}
