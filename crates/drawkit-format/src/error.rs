//! Structured errors for parsing and export.
//!
//! Every failure carries the name of the operation that detected it and the
//! 1-based line/column of the cursor at that moment. The first error aborts
//! the whole parse or export; no partial document ever escapes.

use thiserror::Error;

/// Errors produced while reading or writing the textual format.
#[derive(Error, Debug)]
pub enum FormatError {
    /// The input did not match the grammar.
    #[error("{op}: {message} (line {line}, column {column})")]
    Syntax {
        op: &'static str,
        message: String,
        line: u32,
        column: u32,
    },

    /// A shape's self-close was reached before a required attribute.
    #[error("{shape}: missing attribute '{attribute}' (line {line}, column {column})")]
    MissingAttribute {
        shape: &'static str,
        attribute: &'static str,
        line: u32,
        column: u32,
    },

    /// An integer literal exceeded the representable range.
    #[error("{op}: integer overflow (line {line}, column {column})")]
    Overflow {
        op: &'static str,
        line: u32,
        column: u32,
    },

    /// The underlying stream failed.
    #[error("{op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An export configuration was rejected.
    #[error("invalid export config: {0}")]
    Config(String),
}

/// Result alias used throughout the crate.
pub type FormatResult<T> = Result<T, FormatError>;
