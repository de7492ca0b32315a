use std::io::{self, BufRead};

use hafl_types::LogRecord;

use crate::parser::LineParser;

/// Exact-match filter on the logger (component) name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoggerFilter {
    /// Logger to keep (None = all)
    logger: Option<String>,
}

impl LoggerFilter {
    /// Filter that keeps every parsed record
    pub fn all() -> Self {
        Self { logger: None }
    }

    /// Filter that keeps only records from the given logger
    pub fn logger(name: impl Into<String>) -> Self {
        Self {
            logger: Some(name.into()),
        }
    }

    /// Check if a record passes this filter (case-sensitive, whole name)
    pub fn matches(&self, record: &LogRecord) -> bool {
        match &self.logger {
            Some(name) => record.logger == *name,
            None => true,
        }
    }

    /// Get the logger name, if any
    pub fn name(&self) -> Option<&str> {
        self.logger.as_deref()
    }
}

/// Which characters end a line when reading from a stream
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineEndings {
    /// Only `\n` ends a line; a trailing `\r` is stripped
    #[default]
    Lf,
    /// `\r\n`, `\r` and `\n` all end a line
    Universal,
}

impl From<Option<String>> for LoggerFilter {
    fn from(logger: Option<String>) -> Self {
        Self { logger }
    }
}

/// Run a single line through the parser and the filter
fn filter_line(line: &str, filter: &LoggerFilter) -> Option<LogRecord> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.is_empty() {
        return None;
    }

    LineParser::parse(line).filter(|record| filter.matches(record))
}

/// Parse and filter an ordered sequence of lines.
///
/// Empty and unparseable lines are dropped; surviving records keep their
/// input order.
pub fn filter_lines<I, S>(lines: I, filter: &LoggerFilter) -> Vec<LogRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| filter_line(line.as_ref(), filter))
        .collect()
}

/// Parse and filter every line of a reader.
///
/// A read failure (including invalid UTF-8) aborts the whole run; no partial
/// result is returned.
pub fn read_records<R: BufRead>(
    mut reader: R,
    filter: &LoggerFilter,
    endings: LineEndings,
) -> io::Result<Vec<LogRecord>> {
    let mut records = Vec::new();
    let mut buf = String::new();

    loop {
        buf.clear();
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        match endings {
            LineEndings::Lf => records.extend(filter_line(&buf, filter)),
            // the empty pieces between `\r` and `\n` are skipped like blank lines
            LineEndings::Universal => records.extend(
                buf.split(['\r', '\n'])
                    .filter_map(|line| filter_line(line, filter)),
            ),
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const MIXED: &str = "\
2025-10-19 14:15:38.498 INFO (MainThread) [blueprint.test] test info
This is an invalid line
2025-10-19 14:15:39.123 WARNING (MainThread) [homeassistant.core] warning message

2025-10-19 14:15:40.456 ERROR (Thread-1) [blueprint.test] error message
";

    #[test]
    fn test_logger_filter_matches() {
        let record = LineParser::parse(
            "2025-10-19 14:15:38.498 INFO (MainThread) [blueprint.test] test info",
        )
        .unwrap();

        assert!(LoggerFilter::all().matches(&record));
        assert!(LoggerFilter::logger("blueprint.test").matches(&record));
        assert!(!LoggerFilter::logger("blueprint").matches(&record));
        assert!(!LoggerFilter::logger("Blueprint.Test").matches(&record));
        assert!(!LoggerFilter::logger("blueprint.test ").matches(&record));
    }

    #[test]
    fn test_from_option() {
        assert_eq!(LoggerFilter::from(None), LoggerFilter::all());
        let filter = LoggerFilter::from(Some("homeassistant.core".to_string()));
        assert_eq!(filter.name(), Some("homeassistant.core"));
    }

    #[test]
    fn test_unfiltered_drops_invalid_and_blank() {
        let records = filter_lines(MIXED.lines(), &LoggerFilter::all());
        assert_eq!(records.len(), 3);
        let loggers: Vec<_> = records.iter().map(|r| r.logger.as_str()).collect();
        assert_eq!(
            loggers,
            ["blueprint.test", "homeassistant.core", "blueprint.test"]
        );
    }

    #[test]
    fn test_filter_keeps_order() {
        let records = filter_lines(MIXED.lines(), &LoggerFilter::logger("blueprint.test"));
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.logger == "blueprint.test"));
        assert_eq!(records[0].message, "test info");
        assert_eq!(records[1].message, "error message");

        let records = filter_lines(MIXED.lines(), &LoggerFilter::logger("homeassistant.core"));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].level, "WARNING");
    }

    #[test]
    fn test_unknown_logger_yields_nothing() {
        let records = filter_lines(MIXED.lines(), &LoggerFilter::logger("nope"));
        assert!(records.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let records = filter_lines(Vec::<String>::new(), &LoggerFilter::all());
        assert!(records.is_empty());

        let records =
            read_records(Cursor::new(""), &LoggerFilter::all(), LineEndings::Lf).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_strips_only_line_terminators() {
        let input = "2025-10-19 14:15:38.498 INFO (MainThread) [a.b] trailing  \r\n\
                     2025-10-19 14:15:39.000 INFO (MainThread) [a.b] last\r\r";
        let records =
            read_records(Cursor::new(input), &LoggerFilter::all(), LineEndings::Lf).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "trailing  ");
        assert_eq!(records[1].message, "last");
    }

    #[test]
    fn test_carriage_return_separates_lines() {
        let input = "2025-10-19 14:15:38.498 INFO (MainThread) [blueprint.test] test info\r\
                     2025-10-19 14:15:39.123 WARNING (MainThread) [homeassistant.core] warning message\r\n\
                     2025-10-19 14:15:40.456 ERROR (Thread-1) [blueprint.test] error message\r";
        let records =
            read_records(Cursor::new(input), &LoggerFilter::all(), LineEndings::Universal)
                .unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].message, "test info");
        assert_eq!(records[1].logger, "homeassistant.core");
        assert_eq!(records[1].message, "warning message");
        assert_eq!(records[2].message, "error message");
    }

    #[test]
    fn test_lf_keeps_inner_carriage_return() {
        let input = "2025-10-19 14:15:38.498 INFO (MainThread) [a.b] one\rtwo\n";
        let records =
            read_records(Cursor::new(input), &LoggerFilter::all(), LineEndings::Lf).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].message, "one\rtwo");
    }

    #[test]
    fn test_whitespace_only_line_is_skipped() {
        let records = filter_lines(["   ", "\t"], &LoggerFilter::all());
        assert!(records.is_empty());
    }

    #[test]
    fn test_reader_matches_iterator() {
        let from_reader =
            read_records(Cursor::new(MIXED), &LoggerFilter::all(), LineEndings::Lf).unwrap();
        let from_lines = filter_lines(MIXED.lines(), &LoggerFilter::all());
        assert_eq!(from_reader, from_lines);
    }

    #[test]
    fn test_idempotent() {
        let filter = LoggerFilter::logger("blueprint.test");
        assert_eq!(
            filter_lines(MIXED.lines(), &filter),
            filter_lines(MIXED.lines(), &filter)
        );
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let input: &[u8] = b"2025-10-19 14:15:38.498 INFO (MainThread) [a.b] ok\n\xff\xfe\n";
        let err = read_records(Cursor::new(input), &LoggerFilter::all(), LineEndings::Lf)
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
