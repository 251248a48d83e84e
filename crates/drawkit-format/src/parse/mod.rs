//! Recursive descent parser for the textual document format.
//!
//! Single forward pass over the stream, one character of lookahead, no
//! backtracking. Each sub-parser owns a fixed portion of the grammar and
//! reports failures through [`FormatError`](crate::FormatError) with the
//! position at which they were detected.

pub mod path;
pub mod primitive;
pub mod shape;
pub mod style;

use crate::cursor::Cursor;
use crate::error::FormatResult;
use crate::parse::primitive::{close_quote, parse_point};
use drawkit_model::{Document, Style, Viewport};
use std::io::Read;
use tracing::debug;

/// Parse the mandatory `viewport="x1 y1 x2 y2"` attribute of the root tag.
fn parse_viewport<R: Read>(cur: &mut Cursor<R>) -> FormatResult<Viewport> {
    const OP: &str = "parse_viewport";
    cur.consume_literal(OP, "viewport=\"")?;
    let start = parse_point(cur)?;
    let end = parse_point(cur)?;
    close_quote(cur, OP)?;
    Ok(Viewport::new(start, end))
}

/// Parse a whole document: `<svg viewport="...">` shapes `</svg>`.
pub fn parse_document<R: Read>(cur: &mut Cursor<R>) -> FormatResult<Document> {
    const OP: &str = "parse_document";
    cur.consume_literal(OP, "<svg")?;
    let viewport = parse_viewport(cur)?;
    cur.consume_char(OP, '>')?;

    // Top-level shapes inherit the baseline style.
    let baseline = Style::default();
    let mut shapes = Vec::new();
    loop {
        match cur.next_non_ws()? {
            Some('<') => {}
            Some(c) => return Err(cur.syntax(OP, format!("expected '<' got '{c}'"))),
            None => return Err(cur.eof(OP)),
        }
        match cur.next_non_ws()? {
            Some('/') => break,
            Some(_) => shapes.push(shape::parse_shape(cur, &baseline)?),
            None => return Err(cur.eof(OP)),
        }
    }
    cur.consume_literal(OP, "svg>")?;

    debug!(shapes = shapes.len(), "parsed document");
    Ok(Document { viewport, shapes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::{Point, Shape};

    fn parse(input: &str) -> FormatResult<Document> {
        parse_document(&mut Cursor::new(input.as_bytes()))
    }

    #[test]
    fn test_empty_document() {
        let doc = parse("<svg viewport=\"0 0 100 100\"></svg>").unwrap();
        assert_eq!(doc.viewport.start, Point::new(0, 0));
        assert_eq!(doc.viewport.end, Point::new(100, 100));
        assert!(doc.shapes.is_empty());
    }

    #[test]
    fn test_negative_viewport_coordinates() {
        let doc = parse("<svg viewport=\"-50 -50 50 50\"></svg>").unwrap();
        assert_eq!(doc.viewport.start, Point::new(-50, -50));
    }

    #[test]
    fn test_document_with_shapes() {
        let doc = parse(
            "<svg viewport=\"0 0 640 480\">\n  \
             <line start=\"0 0\" end=\"10 10\"/>\n  \
             <rectangle x=\"5\" y=\"5\" width=\"20\" height=\"10\"/>\n\
             </svg>",
        )
        .unwrap();
        assert_eq!(doc.shapes.len(), 2);
        assert!(matches!(doc.shapes[0], Shape::Line(_)));
        assert!(matches!(doc.shapes[1], Shape::Rectangle(_)));
    }

    #[test]
    fn test_whitespace_is_free_between_tokens() {
        let doc = parse(
            "<svg\n\tviewport=\"0 0 10 10\"  >\r\n<line start=\"0 0\" end=\"1 1\"/> </svg>",
        )
        .unwrap();
        assert_eq!(doc.shapes.len(), 1);
    }

    #[test]
    fn test_missing_viewport_fails() {
        assert!(parse("<svg></svg>").is_err());
    }

    #[test]
    fn test_missing_close_tag_fails() {
        assert!(parse("<svg viewport=\"0 0 1 1\">").is_err());
    }

    #[test]
    fn test_error_carries_position() {
        let err = parse("<svg viewport=\"0 0 1 1\">\n<bogus/></svg>").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
