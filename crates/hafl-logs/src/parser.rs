use std::sync::LazyLock;

use regex::Regex;

use hafl_types::LogRecord;

/// `<timestamp> <LEVEL> (<thread>) [<logger>] <message>`
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3})\s+(\w+)\s+\(([^)]+)\)\s+\[([^\]]+)\]\s+(.*)$",
    )
    .unwrap()
});

/// Parser for Home Assistant log lines
pub struct LineParser;

impl LineParser {
    /// Parse one line (without its terminator) into a LogRecord.
    ///
    /// Returns `None` unless the whole line matches; nothing is extracted from
    /// a partial match.
    pub fn parse(line: &str) -> Option<LogRecord> {
        let caps = LINE_PATTERN.captures(line)?;

        // every group is mandatory, so indexing cannot miss
        Some(LogRecord::new(
            caps[1].to_string(),
            caps[2].to_string(),
            caps[3].to_string(),
            caps[4].to_string(),
            caps[5].to_string(),
        ))
    }
}
