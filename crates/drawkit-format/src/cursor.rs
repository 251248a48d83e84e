//! Position-tracking stream reader and writer.
//!
//! The whole parser family operates on the cursor's implicit one-character
//! lookahead: every read updates `last`, and a sub-parser that stops on an
//! unexpected character leaves it there for its caller to inspect.

use crate::error::{FormatError, FormatResult};
use std::io::{ErrorKind, Read, Write};

/// True for the whitespace set the grammar skips between tokens.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

// ==================== Cursor ====================

/// Character reader over an input stream with 1-based line/column tracking.
pub struct Cursor<R: Read> {
    reader: R,
    line: u32,
    column: u32,
    last: Option<char>,
}

impl<R: Read> Cursor<R> {
    /// Wrap a stream. Callers reading from files should hand in a
    /// `BufReader`; the cursor reads one byte at a time.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 1,
            column: 0,
            last: None,
        }
    }

    /// Line of the last consumed character (1-based).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the last consumed character (1-based; 0 before any read).
    pub fn column(&self) -> u32 {
        self.column
    }

    /// The last consumed character, or `None` at end of stream.
    pub fn last(&self) -> Option<char> {
        self.last
    }

    /// Read the next character, updating line/column. `None` at end of
    /// stream.
    pub fn next_char(&mut self) -> FormatResult<Option<char>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    self.last = None;
                    return Ok(None);
                }
                Ok(_) => break,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(FormatError::Io {
                        op: "next_char",
                        source: e,
                    })
                }
            }
        }
        let c = byte[0] as char;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        self.last = Some(c);
        Ok(Some(c))
    }

    /// Read the next character that is not whitespace.
    pub fn next_non_ws(&mut self) -> FormatResult<Option<char>> {
        loop {
            match self.next_char()? {
                Some(c) if is_whitespace(c) => continue,
                other => return Ok(other),
            }
        }
    }

    /// Consume one non-whitespace character, failing unless it equals
    /// `expected`.
    pub fn consume_char(&mut self, op: &'static str, expected: char) -> FormatResult<()> {
        match self.next_non_ws()? {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.syntax(op, format!("expected '{expected}' got '{c}'"))),
            None => Err(self.syntax(op, format!("expected '{expected}' got end of stream"))),
        }
    }

    /// Consume each character of `literal` in order, stopping at the first
    /// mismatch.
    pub fn consume_literal(&mut self, op: &'static str, literal: &str) -> FormatResult<()> {
        for expected in literal.chars() {
            self.consume_char(op, expected)?;
        }
        Ok(())
    }

    /// Build a syntax error at the current position.
    pub fn syntax(&self, op: &'static str, message: impl Into<String>) -> FormatError {
        FormatError::Syntax {
            op,
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    /// Build an unexpected-end-of-stream error at the current position.
    pub fn eof(&self, op: &'static str) -> FormatError {
        self.syntax(op, "unexpected end of stream")
    }

    /// Build an overflow error at the current position.
    pub fn overflow(&self, op: &'static str) -> FormatError {
        FormatError::Overflow {
            op,
            line: self.line,
            column: self.column,
        }
    }

    /// Build a missing-attribute error at the current position.
    pub fn missing_attribute(&self, shape: &'static str, attribute: &'static str) -> FormatError {
        FormatError::MissingAttribute {
            shape,
            attribute,
            line: self.line,
            column: self.column,
        }
    }
}

// ==================== Writer ====================

/// Character writer over an output stream, tracking the same line/column
/// pair as [`Cursor`] so export failures report a position too.
pub struct Writer<W: Write> {
    writer: W,
    line: u32,
    column: u32,
}

impl<W: Write> Writer<W> {
    /// Wrap an output stream.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line: 1,
            column: 0,
        }
    }

    /// Write a string, advancing the tracked position.
    pub fn write_str(&mut self, op: &'static str, text: &str) -> FormatResult<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(|source| FormatError::Io { op, source })?;
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        Ok(())
    }

    /// Write `amount` spaces (indentation).
    pub fn write_spaces(&mut self, op: &'static str, amount: usize) -> FormatResult<()> {
        for _ in 0..amount {
            self.write_str(op, " ")?;
        }
        Ok(())
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self, op: &'static str) -> FormatResult<()> {
        self.writer
            .flush()
            .map_err(|source| FormatError::Io { op, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(input: &str) -> Cursor<&[u8]> {
        Cursor::new(input.as_bytes())
    }

    #[test]
    fn test_next_char_tracks_position() {
        let mut cur = cursor("ab\ncd");
        assert_eq!(cur.next_char().unwrap(), Some('a'));
        assert_eq!((cur.line(), cur.column()), (1, 1));
        assert_eq!(cur.next_char().unwrap(), Some('b'));
        assert_eq!((cur.line(), cur.column()), (1, 2));
        assert_eq!(cur.next_char().unwrap(), Some('\n'));
        assert_eq!((cur.line(), cur.column()), (2, 0));
        assert_eq!(cur.next_char().unwrap(), Some('c'));
        assert_eq!((cur.line(), cur.column()), (2, 1));
    }

    #[test]
    fn test_next_char_at_end_of_stream() {
        let mut cur = cursor("x");
        assert_eq!(cur.next_char().unwrap(), Some('x'));
        assert_eq!(cur.next_char().unwrap(), None);
        assert_eq!(cur.last(), None);
    }

    #[test]
    fn test_next_non_ws_skips_whitespace() {
        let mut cur = cursor("  \t\r\n  z");
        assert_eq!(cur.next_non_ws().unwrap(), Some('z'));
        assert_eq!(cur.last(), Some('z'));
    }

    #[test]
    fn test_consume_char_mismatch_reports_both_chars() {
        let mut cur = cursor("y");
        let err = cur.consume_char("test", 'x').unwrap_err();
        let text = err.to_string();
        assert!(text.contains('x'));
        assert!(text.contains('y'));
    }

    #[test]
    fn test_consume_literal() {
        let mut cur = cursor("viewport=\"rest");
        cur.consume_literal("test", "viewport=\"").unwrap();
        assert_eq!(cur.next_char().unwrap(), Some('r'));
    }

    #[test]
    fn test_consume_literal_stops_at_first_mismatch() {
        let mut cur = cursor("vieXport");
        assert!(cur.consume_literal("test", "viewport").is_err());
        // The mismatched character was consumed; the rest is untouched.
        assert_eq!(cur.next_char().unwrap(), Some('p'));
    }

    #[test]
    fn test_writer_tracks_position() {
        let mut out = Vec::new();
        let mut w = Writer::new(&mut out);
        w.write_str("test", "ab\nc").unwrap();
        assert_eq!((w.line, w.column), (2, 1));
        w.write_spaces("test", 3).unwrap();
        assert_eq!(w.column, 4);
        drop(w);
        assert_eq!(out, b"ab\nc   ");
    }
}
