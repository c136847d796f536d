//! Deduplicating diagnostic log
//!
//! Configuration problems (like a malformed ignore pattern) tend to be reported
//! every time a site is reloaded. `DistinctLogger` forwards each distinct message
//! to `tracing` exactly once and keeps a record of what it emitted, so callers
//! and tests can inspect the diagnostics of a single instance.

use std::sync::{Mutex, MutexGuard};

/// Severity used when forwarding a message to `tracing`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Warn,
    Error,
}

/// Logger that suppresses repeated identical messages
#[derive(Debug)]
pub struct DistinctLogger {
    level: LogLevel,
    // Distinct messages in emission order; diagnostics are few, so a linear scan is fine
    emitted: Mutex<Vec<String>>,
}

impl Default for DistinctLogger {
    fn default() -> Self {
        Self::new(LogLevel::Error)
    }
}

impl DistinctLogger {
    /// Create a logger that forwards messages at the given level
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            emitted: Mutex::new(Vec::new()),
        }
    }

    /// Log a message unless an identical one was logged before.
    ///
    /// Returns `true` if the message was emitted.
    pub fn log(&self, message: impl Into<String>) -> bool {
        let message = message.into();
        let mut emitted = self.lock();

        if emitted.contains(&message) {
            tracing::trace!("Suppressed repeated diagnostic: {}", message);
            return false;
        }

        match self.level {
            LogLevel::Warn => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
        emitted.push(message);
        true
    }

    /// Messages emitted so far, in emission order
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of distinct messages emitted
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while holding the lock cannot leave a half-pushed message, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.emitted.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_messages_are_logged_once() {
        let log = DistinctLogger::default();

        assert!(log.log("Invalid regexp \"(\""));
        assert!(!log.log("Invalid regexp \"(\""));
        assert!(log.log("Invalid regexp \"[\""));

        assert_eq!(log.len(), 2);
        assert_eq!(
            log.messages(),
            vec!["Invalid regexp \"(\"".to_string(), "Invalid regexp \"[\"".to_string()]
        );
    }

    #[test]
    fn test_repeats_keep_first_emission_order() {
        let log = DistinctLogger::new(LogLevel::Warn);

        for message in ["b", "a", "b", "c", "a", "b"] {
            log.log(message);
        }

        assert_eq!(log.messages(), vec!["b".to_string(), "a".to_string(), "c".to_string()]);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_instances_are_isolated() {
        let first = DistinctLogger::new(LogLevel::Warn);
        let second = DistinctLogger::new(LogLevel::Warn);

        first.log("only in first");

        assert_eq!(first.len(), 1);
        assert!(second.is_empty());
    }

    #[test]
    fn test_shared_across_threads() {
        let log = DistinctLogger::default();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    log.log("same message from every thread");
                });
            }
        });

        assert_eq!(log.len(), 1);
    }
}
