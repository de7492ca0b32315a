//! Input selection for the log reader
//!
//! A log comes either from a named file or, when the name is `-`, from stdin.

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use hafl_logs::{LineEndings, LogRecord, LoggerFilter, read_records};

/// Errors raised while opening or reading a log source
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("File '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to open '{}'", path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Error reading {name}")]
    Read { name: String, source: io::Error },
}

/// Where log lines are read from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSource {
    Stdin,
    File(PathBuf),
}

impl LogSource {
    /// Interpret a command-line argument, `-` meaning stdin
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Open the source for line-by-line reading
    pub fn open(&self) -> Result<Box<dyn BufRead>, SourceError> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|source| {
                    if source.kind() == io::ErrorKind::NotFound {
                        SourceError::NotFound { path: path.clone() }
                    } else {
                        SourceError::Open {
                            path: path.clone(),
                            source,
                        }
                    }
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    /// Line endings recognised for this source.
    ///
    /// Files accept `\r\n`, `\r` and `\n`; stdin is split on `\n` only.
    pub fn line_endings(&self) -> LineEndings {
        match self {
            Self::Stdin => LineEndings::Lf,
            Self::File(_) => LineEndings::Universal,
        }
    }

    /// Open the source and collect every record passing the filter
    pub fn read(&self, filter: &LoggerFilter) -> Result<Vec<LogRecord>, SourceError> {
        let reader = self.open()?;
        read_records(reader, filter, self.line_endings()).map_err(|source| SourceError::Read {
            name: self.to_string(),
            source,
        })
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => write!(f, "<stdin>"),
            Self::File(path) => write!(f, "'{}'", path.display()),
        }
    }
}
