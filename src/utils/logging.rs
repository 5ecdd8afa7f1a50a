use log::{log_enabled, Level};
use std::time::{Duration, Instant};

/// Scoped timer for instrumenting query batches.
///
/// Emits a single trace record when dropped; does nothing unless trace
/// logging is enabled, so it is safe to leave in hot paths.
pub struct ScopedTimer<'a> {
    label: &'a str,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            log::trace!("{}: {} µs", self.label, self.start.elapsed().as_micros());
        }
    }
}
