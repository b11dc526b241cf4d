/*!
 * Error types for the fadein crate.
 *
 * This module contains custom error types for the different parse surfaces,
 * using the thiserror crate for ergonomic error definitions.
 *
 * The heuristic front end has no error type of its own: ambiguous input is
 * resolved by rule priority and always yields a best-effort screenplay. Only
 * collaborator failures (unreadable files, unparsable markup) surface here,
 * and they abort the whole document parse.
 */

use thiserror::Error;

/// Errors raised while walking structured (Final Draft) markup
#[derive(Error, Debug)]
pub enum MarkupError {
    /// The markup library rejected the document
    #[error("Failed to parse markup: {0}")]
    ParseFailed(String),

    /// The tree parsed but carries no screenplay content
    #[error("Markup has no screenplay content: {0}")]
    MissingContent(String),
}

impl From<roxmltree::Error> for MarkupError {
    fn from(error: roxmltree::Error) -> Self {
        Self::ParseFailed(error.to_string())
    }
}

/// Main error type surfaced to callers of the extraction pipeline
#[derive(Error, Debug)]
pub enum ScriptError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error from structured markup parsing
    #[error("Markup error: {0}")]
    Markup(#[from] MarkupError),

    /// Input file extension maps to no known front end
    #[error("Unsupported script format: {0}")]
    UnsupportedFormat(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for ScriptError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
