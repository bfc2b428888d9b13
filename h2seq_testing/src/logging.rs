//! Shared log capture for tests asserting on `h2seq` diagnostics.
//!
//! `logtest` installs a single process-wide `log` backend. [`LoggerHandle`]
//! serializes access to it so that records produced by one test are never
//! observed by another.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use log::Level;
use logtest::Logger;
use rstest::fixture;

/// Exclusive view of the captured log records.
pub struct LoggerHandle {
    guard: MutexGuard<'static, Logger>,
}

impl LoggerHandle {
    /// Lock the global capture and discard records left by earlier tests.
    ///
    /// A lock poisoned by a failing test is recovered rather than propagated.
    #[must_use]
    pub fn new() -> Self {
        static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

        let mut guard = LOGGER
            .get_or_init(|| Mutex::new(Logger::start()))
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        while guard.pop().is_some() {}

        Self { guard }
    }

    /// Drain every buffered record and keep the messages logged at `level`,
    /// oldest first.
    pub fn drain(&mut self, level: Level) -> Vec<String> {
        let mut messages = Vec::new();
        while let Some(record) = self.guard.pop() {
            if record.level() == level {
                messages.push(record.args().to_owned());
            }
        }
        messages
    }

    /// Whether any buffered record at `level` contains `needle`. Drains the
    /// buffer.
    pub fn contains(&mut self, level: Level, needle: &str) -> bool {
        self.drain(level).iter().any(|msg| msg.contains(needle))
    }
}

impl Default for LoggerHandle {
    fn default() -> Self { Self::new() }
}

#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
#[fixture]
pub fn logger() -> LoggerHandle { LoggerHandle::new() }
