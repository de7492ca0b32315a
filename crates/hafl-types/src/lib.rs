//! Shared types for ha-filter-log
//!
//! This crate contains the record produced for every parsed log line.

use serde::{Deserialize, Serialize};

// ============================================================================
// Log Types
// ============================================================================

/// A single parsed log line
///
/// Field declaration order is the key order of the JSON output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Verbatim `YYYY-MM-DD HH:MM:SS.mmm` timestamp
    pub timestamp: String,

    /// Level name as it appears in the line
    pub level: String,

    /// Thread name from the parenthesised group
    pub thread: String,

    /// Component name from the bracketed group
    pub logger: String,

    /// Everything after the logger
    pub message: String,
}

impl LogRecord {
    pub fn new(
        timestamp: String,
        level: String,
        thread: String,
        logger: String,
        message: String,
    ) -> Self {
        Self {
            timestamp,
            level,
            thread,
            logger,
            message,
        }
    }
}
