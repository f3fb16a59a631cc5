//! Error types for quadro-engine

use thiserror::Error;

/// Result type alias using [`ParseError`]
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while deriving a table from a sheet
///
/// The engine has no fatal path besides this: every malformed cell, missing
/// anchor, or ambiguous header degrades to a best-effort table instead.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The sheet declares no populated range, so there is nothing to derive
    #[error("no table could be derived from sheet '{0}'")]
    NoTable(String),
}
