//! Style attribute parsing.
//!
//! Shapes and groups share the same four optional style attributes. The
//! caller dispatches on the first character of an attribute name and hands
//! over with that character pending in the cursor; each parsed attribute
//! overwrites the corresponding field of the style inherited from the
//! enclosing group.

use crate::cursor::Cursor;
use crate::error::FormatResult;
use crate::parse::primitive::{
    close_quote, is_digit, parse_color_parameter, parse_point_parameter, parse_signed_int_from,
};
use drawkit_model::{Rotate, Style};
use std::io::Read;

/// Parse one style attribute, dispatching on the pending character.
pub fn parse_style_attribute<R: Read>(cur: &mut Cursor<R>, style: &mut Style) -> FormatResult<()> {
    const OP: &str = "parse_style_attribute";
    match cur.last() {
        Some('f') => {
            style.fill = parse_color_parameter(cur, "ill")?;
            Ok(())
        }
        Some('o') => {
            style.outline = parse_color_parameter(cur, "utline")?;
            Ok(())
        }
        Some('t') => {
            style.translate = parse_point_parameter(cur, "ranslate")?;
            Ok(())
        }
        Some('r') => parse_rotate(cur, style),
        Some(c) => Err(cur.syntax(OP, format!("unknown attribute starting with '{c}'"))),
        None => Err(cur.eof(OP)),
    }
}

/// Parse `rotate="x"`, `rotate="y"` (either case) or `rotate="<degrees>"`.
fn parse_rotate<R: Read>(cur: &mut Cursor<R>, style: &mut Style) -> FormatResult<()> {
    const OP: &str = "parse_rotate";
    cur.consume_literal(OP, "otate=\"")?;
    let c = cur.next_non_ws()?.ok_or_else(|| cur.eof(OP))?;
    match c {
        'x' | 'X' => {
            cur.consume_char(OP, '"')?;
            style.rotate = Rotate::FlipX;
            Ok(())
        }
        'y' | 'Y' => {
            cur.consume_char(OP, '"')?;
            style.rotate = Rotate::FlipY;
            Ok(())
        }
        c if c == '-' || is_digit(c) => {
            let degrees = parse_signed_int_from(cur, OP, c)?;
            close_quote(cur, OP)?;
            style.rotate = Rotate::circular(degrees);
            Ok(())
        }
        c => Err(cur.syntax(
            OP,
            format!("expected 'x', 'y' or degrees got '{c}'"),
        )),
    }
}
