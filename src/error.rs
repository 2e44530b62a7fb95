//! # RDS Decoder Error Handling
//!
//! This module defines the `RdsError` enum used by the crate's ambient
//! surfaces — the offline log reader and the CLI. The core decoder itself
//! never returns a `Result`: per the protocol, every failure mode is silent
//! and observable only through the data record's validity bitmask.

use thiserror::Error;

/// Represents the different error types that can occur around the RDS
/// decoder (log parsing, CLI argument handling). The core `Decoder::decode`
/// path does not produce this type.
#[derive(Debug, Error)]
pub enum RdsError {
    /// A log line did not contain four whitespace-separated hex words.
    #[error("malformed log line {line_no}: {line:?}")]
    MalformedLogLine { line_no: usize, line: String },

    /// A hex word in a log line failed to parse.
    #[error("invalid hex word {0:?} on log line {1}")]
    InvalidHexWord(String, usize),

    /// The log file could not be opened or read.
    #[error("could not read log file {path:?}: {source}")]
    LogFileUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The log file contained no groups.
    #[error("log file {0:?} is empty")]
    LogFileEmpty(String),

    /// No log path was supplied to the CLI.
    #[error("missing required <log-path> argument")]
    MissingLogPath,
}
