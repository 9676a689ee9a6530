//! Centralised error types used across the crate.

use std::io;

use thiserror::Error;

/// Why a single argument-mode entry was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Not a number at all, or a number followed by junk.
    #[error("invalid number")]
    NotANumber,
    /// Parsed, but infinite or NaN.
    #[error("non-finite number")]
    NonFinite,
}

/// Argument-mode data could not be turned into a sequence.
///
/// `entry` is the 1-based position of the offending comma-separated entry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("entry {entry}: {kind} '{text}'")]
pub struct ParseDataError {
    pub entry: usize,
    pub text: String,
    pub kind: ParseErrorKind,
}

/// Missing or conflicting input configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing data")]
    MissingData,
    #[error("data argument passed but incompatible mode `{mode}` selected")]
    UnexpectedData { mode: &'static str },
    #[error("unrecognized option: '{0}'")]
    UnrecognizedOption(String),
    #[error("`{0}` must be at least 1")]
    Zero(&'static str),
    #[error("`rows` {0} is too large")]
    TooManyRows(usize),
}

/// Top-level error type bubbled up by public APIs.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("bad data format: {0}")]
    Data(#[from] ParseDataError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Cli(#[from] clap::Error),
}

impl GraphError {
    /// Process exit status for this error.
    ///
    /// Help and version requests surface through clap as errors but are not
    /// failures.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            GraphError::Cli(e) if !e.use_stderr() => 0,
            _ => 1,
        }
    }
}
