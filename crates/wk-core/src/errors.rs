//! Error types for weekcal.
//!
//! A single `thiserror`-derived enum covers the whole workspace.

use thiserror::Error;

/// The top-level error type used throughout weekcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error (out of range, invalid day of month, ...).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A required configuration key is absent.
    ///
    /// Callers are expected to show usage and exit without producing
    /// output.
    #[error("missing required configuration key `{key}`")]
    Config {
        /// Name of the missing key as it appears in the configuration file.
        key: &'static str,
    },

    /// Input that could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),
}

impl Error {
    /// Return `true` if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }
}

/// Shorthand `Result` type used throughout weekcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;
