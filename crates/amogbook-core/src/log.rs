//! Append-only session log
//!
//! User-authored timestamped notes. Entries are never edited or removed, so
//! insertion order is chronological order.

use crate::clock::Clock;
use crate::error::{Result, ValidationError};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt::{self, Display, Formatter};
use std::sync::Arc;

/// Timestamp rendering used in log lines
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One log line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// When the entry was written
    pub timestamp: NaiveDateTime,
    /// Entry text
    pub text: String,
}

impl Display for LogEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format(LOG_TIME_FORMAT), self.text)
    }
}

/// Ordered log of entries
#[derive(Debug, Clone)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
    clock: Arc<dyn Clock>,
}

impl SessionLog {
    /// Create empty log reading time from `clock`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Append `text` stamped with the current time
    ///
    /// # Errors
    /// Returns [`ValidationError::EmptyLogEntry`] if `text` is empty.
    pub fn append(&mut self, text: impl Into<String>) -> Result<&LogEntry> {
        let text = text.into();
        if text.is_empty() {
            tracing::warn!("rejected empty log entry");
            return Err(ValidationError::EmptyLogEntry.into());
        }

        let timestamp = self.clock.now();
        tracing::debug!(%timestamp, "log entry appended");
        self.entries.push(LogEntry { timestamp, text });

        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Full history, oldest first
    #[inline]
    #[must_use]
    pub fn render(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if log is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
