//! Host progress/cancellation channel.
//!
//! The host's long-task machinery (progress bar, cancel button) stays on its
//! side of this trait; the pipeline only reports ticks and polls for
//! cancellation at iteration boundaries.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Callbacks invoked by [`KmzExporter::export`][crate::KmzExporter::export]
/// as the run progresses.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait ProgressTicket {
    /// Total number of work items (valid nodes + edges) for this run.
    fn start(&mut self, _total: usize) {}

    /// A human-readable stage name, e.g. `"Exporting edges"`.
    fn stage(&mut self, _name: &str) {}

    /// One work item finished.
    fn tick(&mut self) {}

    /// Polled at every node and edge iteration boundary.  Returning `true`
    /// ends the run with [`ExportOutcome::Cancelled`][crate::ExportOutcome]
    /// before anything is written.
    fn is_cancelled(&self) -> bool {
        false
    }

    /// Called exactly once per run, on every path — success, error, or
    /// cancellation.
    fn finish(&mut self) {}
}

/// A [`ProgressTicket`] that does nothing.  Use when the caller needs no
/// progress reporting and never cancels.
pub struct NoopTicket;

impl ProgressTicket for NoopTicket {}

/// Clone-shared cooperative cancellation flag.
///
/// Hand one clone to the export call (it implements [`ProgressTicket`]) and
/// keep another on the UI thread; `cancel()` takes effect at the next
/// iteration boundary.
#[derive(Clone, Debug, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal cancellation.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl ProgressTicket for CancelToken {
    fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
