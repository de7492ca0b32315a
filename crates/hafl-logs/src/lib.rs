//! Log processing for ha-filter-log
//!
//! This crate provides line parsing and logger filtering.

mod filter;
mod parser;

pub use filter::{LineEndings, LoggerFilter, filter_lines, read_records};
pub use parser::LineParser;

// Re-export types used in our public API
pub use hafl_types::LogRecord;
