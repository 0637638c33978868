use std::fmt;
use std::io;

/// Unrecoverable parsing errors
///
/// Any of these aborts the parse of the current file. No partially built
/// `Flight` is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("Invalid field at line {line_num}: {source}")]
    Decode {
        line_num: usize,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Igc(#[from] IgcError),

    #[error("Malformed record at line {line_num}: {line:?}")]
    MalformedLine { line_num: usize, line: String },
}

/// Malformed coordinate, number or extension field inside a recognized record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{field} is truncated (expected {expected} characters, found {found})")]
    Truncated {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid time of day: {0:?}")]
    InvalidTime(String),

    #[error("Invalid hemisphere {found:?} in {field}")]
    InvalidHemisphere { field: &'static str, found: char },

    #[error("Extension {name} declares an invalid byte range {start:02}..{end:02}")]
    InvalidExtensionRange {
        name: String,
        start: usize,
        end: usize,
    },
}

/// Structured IGC error carrying the offending line
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("IGC error at line {line_num}: {msg} ({line_text:?})")]
pub struct IgcError {
    pub line_num: usize,
    pub line_text: String,
    pub msg: String,
}

impl IgcError {
    pub fn new(line_num: usize, line_text: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            line_num,
            line_text: line_text.into(),
            msg: msg.into(),
        }
    }
}

/// Non-fatal issues encountered during parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Record type recognized by the IGC format but not interpreted here
    UnimplementedRecord { tag: char, line: String },

    /// Header subtype other than flight date or glider type
    UnimplementedHeader { subtype: String, line: String },

    /// Fix carries the same time of day as its predecessor
    NonIncreasingTime { line_num: usize },

    /// Fix is shorter than the declared extension fields
    TruncatedExtensions {
        line_num: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnimplementedRecord { tag, line } => {
                write!(f, "Record type {tag} not implemented: {line}")
            }
            Warning::UnimplementedHeader { subtype, line } => {
                write!(f, "Header type {subtype} not implemented: {line}")
            }
            Warning::NonIncreasingTime { line_num } => {
                write!(f, "Fix at line {line_num} does not advance the clock")
            }
            Warning::TruncatedExtensions {
                line_num,
                expected,
                found,
            } => write!(
                f,
                "Fix at line {line_num} is {found} bytes long, extensions need {expected}"
            ),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
