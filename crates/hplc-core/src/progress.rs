//! Progress reporting for report parsing.
//!
//! The parser notifies a [`ProgressSink`] after each page with the fraction
//! of pages processed. Sinks only observe; they cannot change the outcome.

use std::sync::mpsc::Sender;

/// Receives the completion fraction of a running parse.
pub trait ProgressSink: Send + Sync {
    /// Called after each page with a value in `(0, 1]`, non-decreasing,
    /// ending at `1.0`.
    fn report(&self, fraction: f64);
}

/// Ignores all progress updates.
pub struct NullProgress;

impl ProgressSink for NullProgress {
    fn report(&self, _fraction: f64) {}
}

/// Forwards fractions over a channel. A closed receiver is ignored.
impl ProgressSink for Sender<f64> {
    fn report(&self, fraction: f64) {
        let _ = self.send(fraction);
    }
}

/// Logs each update at debug level, tagged with a label such as the file name.
pub struct LogProgress {
    label: String,
}

impl LogProgress {
    pub fn new(label: impl Into<String>) -> Self {
        LogProgress {
            label: label.into(),
        }
    }
}

impl ProgressSink for LogProgress {
    fn report(&self, fraction: f64) {
        log::debug!("[{}] {:.0}%", self.label, fraction * 100.0);
    }
}
