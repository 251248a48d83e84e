//! Path `data` attribute parsing.
//!
//! The value is a mini-language of single-letter commands (either case)
//! with space-separated integer operands: `M`/`L` take a point, `H`/`V`
//! one integer, `C` three points, `S`/`Q` two, `T` one, `Z` nothing.
//!
//! Operand parsing stops on the first character after the last digit, so
//! that character may already be the next command letter or the closing
//! quote. The loop therefore reuses the cursor's pending character when it
//! is meaningful and only reads ahead when the operand ended on whitespace.

use crate::cursor::{is_whitespace, Cursor};
use crate::error::FormatResult;
use crate::parse::primitive::{parse_point, parse_signed_int};
use drawkit_model::PathElement;
use std::io::Read;

/// Parse `data="..."` into a non-empty element list. The caller consumed
/// the leading `d`.
pub fn parse_path_data<R: Read>(cur: &mut Cursor<R>) -> FormatResult<Vec<PathElement>> {
    const OP: &str = "parse_path_data";
    cur.consume_literal(OP, "ata=\"")?;

    let mut elements = Vec::new();
    let mut c = cur.next_non_ws()?.ok_or_else(|| cur.eof(OP))?;
    loop {
        if c == '"' {
            if elements.is_empty() {
                return Err(cur.syntax(OP, "path data must contain at least one element"));
            }
            return Ok(elements);
        }

        let element = parse_path_element(cur, c)?;
        // Everything but Z ends by overshooting its last operand, leaving
        // the terminator pending; Z consumed only its own letter.
        let has_pending = !matches!(element, PathElement::EndPath);
        elements.push(element);

        c = match cur.last() {
            Some(ch) if has_pending && !is_whitespace(ch) => ch,
            _ => cur.next_non_ws()?.ok_or_else(|| cur.eof(OP))?,
        };
    }
}

fn parse_path_element<R: Read>(cur: &mut Cursor<R>, command: char) -> FormatResult<PathElement> {
    const OP: &str = "parse_path_element";
    match command.to_ascii_lowercase() {
        'm' => Ok(PathElement::MoveTo(parse_point(cur)?)),
        'l' => Ok(PathElement::LineTo(parse_point(cur)?)),
        'h' => Ok(PathElement::HorizontalLineTo(parse_signed_int(cur, OP)?)),
        'v' => Ok(PathElement::VerticalLineTo(parse_signed_int(cur, OP)?)),
        'c' => Ok(PathElement::CubicCurveTo {
            control1: parse_point(cur)?,
            control2: parse_point(cur)?,
            end: parse_point(cur)?,
        }),
        's' => Ok(PathElement::CubicCurveToShorthand {
            control: parse_point(cur)?,
            end: parse_point(cur)?,
        }),
        'q' => Ok(PathElement::QuadraticCurveTo {
            control: parse_point(cur)?,
            end: parse_point(cur)?,
        }),
        't' => Ok(PathElement::QuadraticCurveToShorthand(parse_point(cur)?)),
        'z' => Ok(PathElement::EndPath),
        _ => Err(cur.syntax(OP, format!("unknown path command '{command}'"))),
    }
}
