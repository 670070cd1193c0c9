//! In-memory logger

use std::sync::RwLock;

use super::traits::Logger;

/// Severity of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// A single recorded log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// Logger that keeps every entry in memory
///
/// # Example
///
/// ```
/// use ansible_vault_core::logging::{Logger, MemoryLogger};
///
/// let logger = MemoryLogger::new();
/// logger.info("Reading '/etc/ansible/ansible.cfg'...");
/// assert!(logger.contains("/etc/ansible/ansible.cfg"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: RwLock<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries recorded so far
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .read()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Messages only, in recording order
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }

    /// Whether any recorded message contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(needle))
    }

    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.write() {
            entries.clear();
        }
    }

    fn record(&self, level: LogLevel, message: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.push(LogEntry {
                level,
                message: message.to_string(),
            });
        }
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.record(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_records_in_order() {
        let logger = MemoryLogger::new();
        logger.debug("first");
        logger.warn("second");

        let entries = logger.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, LogLevel::Debug);
        assert_eq!(entries[1].message, "second");

        logger.clear();
        assert!(logger.entries().is_empty());
    }

    #[test]
    fn test_log_macros_format() {
        let logger = MemoryLogger::new();
        crate::log_info!(logger, "Reading '{}'...", "/tmp/ansible.cfg");
        assert_eq!(logger.messages(), vec!["Reading '/tmp/ansible.cfg'...".to_string()]);
    }
}
