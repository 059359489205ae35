//! Range-rejection notifications
//!
//! A rejected range is returned to the caller and kept in the fetcher's
//! error slot; a [`Notifier`] additionally tells whoever is listening
//! (a log, a status line) without blocking the caller.

use crate::domain::RangeError;
use std::sync::Mutex;

/// Receives range-validation failures
pub trait Notifier: Send + Sync {
    fn notify(&self, error: &RangeError);
}

/// Writes rejections to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, error: &RangeError) {
        tracing::warn!(error = %error, "Date range rejected");
    }
}

/// Keeps every rejection in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    errors: Mutex<Vec<RangeError>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejections received so far, oldest first
    pub fn errors(&self) -> Vec<RangeError> {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, error: &RangeError) {
        self.errors
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(error.clone());
    }
}
