//! Error types for page behavior.

use thiserror::Error;

/// Why a form submission did not produce a usable response.
///
/// Both variants are reported to the user the same way; the split only
/// matters for logging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never completed (network down, CORS, aborted).
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a status outside 200..=299.
    #[error("request failed with status {0}")]
    Status(u16),
}

/// Text that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("no numeric prefix in {0:?}")]
    NotANumber(String),
    #[error("{0} is not a positive measurement")]
    NotPositive(String),
}
