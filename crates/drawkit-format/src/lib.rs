//! # Drawkit Format
//!
//! Parser and exporter for the Drawkit textual vector graphics format.
//!
//! The format is an SVG-flavoured dialect: a `<svg viewport="...">` root
//! containing ellipses, rectangles, lines, multilines, polygons, `draw`
//! paths and recursively nested groups, with `fill`/`outline`/`translate`/
//! `rotate` style attributes inherited from group to child. Parsing is a
//! single forward pass with one character of lookahead; export layout is
//! controlled by [`ExportConfig`] and always re-parses to an equal
//! document.

pub mod cursor;
pub mod error;
pub mod export;
pub mod parse;

pub use cursor::{Cursor, Writer};
pub use error::{FormatError, FormatResult};
pub use export::ExportConfig;

use drawkit_model::Document;
use std::io::{Read, Write as IoWrite};

/// Parse a document from a stream.
pub fn parse<R: Read>(reader: R) -> FormatResult<Document> {
    let mut cursor = Cursor::new(reader);
    parse::parse_document(&mut cursor)
}

/// Parse a document from a string.
pub fn parse_str(input: &str) -> FormatResult<Document> {
    parse(input.as_bytes())
}

/// Serialize a document to a stream.
pub fn export<W: IoWrite>(
    document: &Document,
    writer: W,
    config: &ExportConfig,
) -> FormatResult<()> {
    let mut writer = Writer::new(writer);
    export::export_document(document, &mut writer, config)
}

/// Serialize a document to a string.
pub fn export_to_string(document: &Document, config: &ExportConfig) -> FormatResult<String> {
    let mut out = Vec::new();
    export(document, &mut out, config)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
