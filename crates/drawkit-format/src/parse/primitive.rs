//! Primitive literal parsers and their `name="value"` wrapped forms.
//!
//! These all follow the cursor's lookahead convention: a parser that stops
//! on a character it does not own leaves it in `Cursor::last` for the
//! caller.

use crate::cursor::{is_whitespace, Cursor};
use crate::error::FormatResult;
use drawkit_model::{Color, Point};
use std::io::Read;

/// True for an ASCII decimal digit.
pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

fn digit_value(c: char) -> i32 {
    c as i32 - '0' as i32
}

fn hex_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'a'..='f' => Some(c as u8 - b'a' + 10),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

// ==================== Integers ====================

/// Parse a run of digits continuing from `seed`.
///
/// The seed is the value accumulated so far by a caller that already
/// consumed the first digit (0 when nothing was consumed). A leading `-` is
/// only legal when the seed is still neutral. Digits accumulate with
/// checked arithmetic; exceeding the `i32` range is an overflow error, not
/// a wrap. The first non-digit character stops the parse and stays in the
/// cursor for the caller.
pub fn parse_int<R: Read>(
    cur: &mut Cursor<R>,
    seed: i32,
    require_digit: bool,
) -> FormatResult<i32> {
    const OP: &str = "parse_int";
    let mut negative = seed < 0;
    let mut c = cur.next_char()?;

    if c == Some('-') {
        if seed != 0 {
            return Err(cur.syntax(OP, "'-' is only legal before the first digit"));
        }
        negative = true;
        c = cur.next_char()?;
    }

    match c {
        Some(ch) if is_digit(ch) => {}
        _ if !require_digit => return Ok(seed),
        Some(ch) => return Err(cur.syntax(OP, format!("expected digit (0-9) got '{ch}'"))),
        None => return Err(cur.eof(OP)),
    }

    let mut value = seed;
    while let Some(ch) = c {
        if !is_digit(ch) {
            break;
        }
        let digit = digit_value(ch);
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or_else(|| cur.overflow(OP))?;
        c = cur.next_char()?;
    }
    Ok(value)
}

/// Parse a whole signed integer after the given first non-whitespace
/// character was already consumed.
pub(crate) fn parse_signed_int_from<R: Read>(
    cur: &mut Cursor<R>,
    op: &'static str,
    first: char,
) -> FormatResult<i32> {
    let mut negative = false;
    let mut c = first;
    if c == '-' {
        negative = true;
        c = match cur.next_non_ws()? {
            Some(ch) => ch,
            None => return Err(cur.eof(op)),
        };
    }
    if !is_digit(c) {
        return Err(cur.syntax(op, format!("expected digit (0-9) got '{c}'")));
    }
    let seed = if negative {
        -digit_value(c)
    } else {
        digit_value(c)
    };
    parse_int(cur, seed, false)
}

/// Skip whitespace and parse a whole signed integer.
pub(crate) fn parse_signed_int<R: Read>(cur: &mut Cursor<R>, op: &'static str) -> FormatResult<i32> {
    match cur.next_non_ws()? {
        Some(c) => parse_signed_int_from(cur, op, c),
        None => Err(cur.eof(op)),
    }
}

// ==================== Hex bytes and colors ====================

/// Parse two hex digits into a byte (high nibble first).
pub fn parse_hex_byte<R: Read>(cur: &mut Cursor<R>) -> FormatResult<u8> {
    const OP: &str = "parse_hex_byte";
    let mut value = 0u8;
    for _ in 0..2 {
        let c = cur.next_non_ws()?.ok_or_else(|| cur.eof(OP))?;
        let nibble = hex_value(c)
            .ok_or_else(|| cur.syntax(OP, format!("expected hex digit (0-9 A-F) got '{c}'")))?;
        value = value * 16 + nibble;
    }
    Ok(value)
}

/// Parse a `#RRGGBBAA` color literal.
pub fn parse_color<R: Read>(cur: &mut Cursor<R>) -> FormatResult<Color> {
    const OP: &str = "parse_color";
    match cur.next_non_ws()? {
        Some('#') => {}
        Some(c) => return Err(cur.syntax(OP, format!("expected '#' got '{c}'"))),
        None => return Err(cur.eof(OP)),
    }
    let red = parse_hex_byte(cur)?;
    let green = parse_hex_byte(cur)?;
    let blue = parse_hex_byte(cur)?;
    let alpha = parse_hex_byte(cur)?;
    Ok(Color::new(red, green, blue, alpha))
}

// ==================== Points ====================

/// Parse two integers separated by mandatory whitespace.
pub fn parse_point<R: Read>(cur: &mut Cursor<R>) -> FormatResult<Point> {
    const OP: &str = "parse_point";
    let x = parse_signed_int(cur, OP)?;
    match cur.last() {
        Some(c) if is_whitespace(c) => {}
        Some(c) => {
            return Err(cur.syntax(OP, format!("expected whitespace between coordinates got '{c}'")))
        }
        None => return Err(cur.eof(OP)),
    }
    let y = parse_signed_int(cur, OP)?;
    Ok(Point::new(x, y))
}

// ==================== Parameter wrappers ====================

/// Consume the closing `"` of a parameter whose value parser may have left
/// it (or a whitespace run before it) as the pending character.
pub(crate) fn close_quote<R: Read>(cur: &mut Cursor<R>, op: &'static str) -> FormatResult<()> {
    match cur.last() {
        Some('"') => Ok(()),
        Some(c) if is_whitespace(c) => cur.consume_char(op, '"'),
        Some(c) => Err(cur.syntax(op, format!("expected '\"' or whitespace got '{c}'"))),
        None => Err(cur.eof(op)),
    }
}

/// Parse `name="<int>"`. The leading dispatch character was already
/// consumed, so `name` is the remaining tag suffix (possibly empty).
pub fn parse_int_parameter<R: Read>(cur: &mut Cursor<R>, name: &str) -> FormatResult<i32> {
    const OP: &str = "parse_int_parameter";
    if !name.is_empty() {
        cur.consume_literal(OP, name)?;
    }
    cur.consume_literal(OP, "=\"")?;
    let value = parse_int(cur, 0, true)?;
    close_quote(cur, OP)?;
    Ok(value)
}

/// Parse `name="<point>"`.
pub fn parse_point_parameter<R: Read>(cur: &mut Cursor<R>, name: &str) -> FormatResult<Point> {
    const OP: &str = "parse_point_parameter";
    if !name.is_empty() {
        cur.consume_literal(OP, name)?;
    }
    cur.consume_literal(OP, "=\"")?;
    let value = parse_point(cur)?;
    close_quote(cur, OP)?;
    Ok(value)
}

/// Parse `name="<color>"`.
pub fn parse_color_parameter<R: Read>(cur: &mut Cursor<R>, name: &str) -> FormatResult<Color> {
    const OP: &str = "parse_color_parameter";
    if !name.is_empty() {
        cur.consume_literal(OP, name)?;
    }
    cur.consume_literal(OP, "=\"")?;
    let value = parse_color(cur)?;
    cur.consume_char(OP, '"')?;
    Ok(value)
}

/// Parse `name="x1 y1 x2 y2 ..."` into an ordered point list.
///
/// Driven character by character: a completed (x, y) pair is emitted at
/// each whitespace boundary after both coordinates were read, and at the
/// closing quote. A trailing coordinate without its partner is an error, as
/// is an empty list.
pub fn parse_points_parameter<R: Read>(cur: &mut Cursor<R>, name: &str) -> FormatResult<Vec<Point>> {
    const OP: &str = "parse_points_parameter";
    if !name.is_empty() {
        cur.consume_literal(OP, name)?;
    }
    cur.consume_literal(OP, "=\"")?;

    let mut points = Vec::new();
    let (mut a, mut b) = (0i32, 0i32);
    let (mut neg_a, mut neg_b) = (false, false);
    let mut a_set = false;
    let (mut writing_a, mut writing_b) = (false, false);

    let accumulate = |cur: &Cursor<R>, value: i32, negative: bool, c: char| {
        let digit = digit_value(c);
        value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or_else(|| cur.overflow(OP))
    };

    loop {
        let Some(c) = cur.next_char()? else {
            return Err(cur.eof(OP));
        };

        if is_digit(c) {
            if a_set {
                writing_b = true;
                b = accumulate(cur, b, neg_b, c)?;
            } else {
                writing_a = true;
                a = accumulate(cur, a, neg_a, c)?;
            }
            continue;
        }

        if c == '-' {
            let started = if a_set { writing_b || neg_b } else { writing_a || neg_a };
            if started {
                return Err(cur.syntax(OP, "'-' is only legal before the first digit"));
            }
            if a_set {
                neg_b = true;
            } else {
                neg_a = true;
            }
            continue;
        }

        if is_whitespace(c) {
            if !a_set && !writing_a {
                continue;
            }
            if !a_set {
                writing_a = false;
                a_set = true;
            }
            if !writing_b {
                continue;
            }
            points.push(Point::new(a, b));
            (a, b) = (0, 0);
            (neg_a, neg_b) = (false, false);
            a_set = false;
            writing_b = false;
            continue;
        }

        if c == '"' {
            if a_set && writing_b {
                points.push(Point::new(a, b));
                a_set = false;
                writing_a = false;
                writing_b = false;
                (neg_a, neg_b) = (false, false);
            }
            if writing_a || a_set || neg_a || neg_b {
                return Err(cur.syntax(OP, "missing integer value"));
            }
            if points.is_empty() {
                return Err(cur.syntax(OP, "must contain at least one point"));
            }
            return Ok(points);
        }

        return Err(cur.syntax(OP, format!("unexpected character '{c}'")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;

    fn cursor(input: &str) -> Cursor<&[u8]> {
        Cursor::new(input.as_bytes())
    }

    #[test]
    fn test_parse_int_stops_at_non_digit() {
        let mut cur = cursor("123x");
        assert_eq!(parse_int(&mut cur, 0, true).unwrap(), 123);
        assert_eq!(cur.last(), Some('x'));
    }

    #[test]
    fn test_parse_int_negative() {
        let mut cur = cursor("-35 ");
        assert_eq!(parse_int(&mut cur, 0, true).unwrap(), -35);
    }

    #[test]
    fn test_parse_int_continues_from_seed() {
        let mut cur = cursor("5 ");
        assert_eq!(parse_int(&mut cur, -3, false).unwrap(), -35);
        let mut cur = cursor("5 ");
        assert_eq!(parse_int(&mut cur, 3, false).unwrap(), 35);
    }

    #[test]
    fn test_parse_int_rejects_minus_after_seed() {
        let mut cur = cursor("-5");
        assert!(parse_int(&mut cur, 4, false).is_err());
    }

    #[test]
    fn test_parse_int_overflow() {
        let mut cur = cursor("99999999999999999999 ");
        match parse_int(&mut cur, 0, true) {
            Err(FormatError::Overflow { .. }) => {}
            other => panic!("expected overflow, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_int_negative_overflow() {
        let mut cur = cursor("-99999999999999999999 ");
        assert!(matches!(
            parse_int(&mut cur, 0, true),
            Err(FormatError::Overflow { .. })
        ));
    }

    #[test]
    fn test_parse_hex_byte() {
        let mut cur = cursor("ff");
        assert_eq!(parse_hex_byte(&mut cur).unwrap(), 255);
        let mut cur = cursor("0A");
        assert_eq!(parse_hex_byte(&mut cur).unwrap(), 10);
    }

    #[test]
    fn test_parse_hex_byte_rejects_non_hex() {
        let mut cur = cursor("g0");
        assert!(parse_hex_byte(&mut cur).is_err());
    }

    #[test]
    fn test_parse_point() {
        let mut cur = cursor("10 -20 ");
        assert_eq!(parse_point(&mut cur).unwrap(), Point::new(10, -20));
    }

    #[test]
    fn test_parse_point_requires_whitespace_separator() {
        let mut cur = cursor("10,20 ");
        assert!(parse_point(&mut cur).is_err());
    }

    #[test]
    fn test_parse_color() {
        let mut cur = cursor("#ff00a1cc");
        let color = parse_color(&mut cur).unwrap();
        assert_eq!(color, Color::new(255, 0, 161, 204));
    }

    #[test]
    fn test_parse_color_rejects_missing_hash() {
        let mut cur = cursor("ff00a1cc");
        assert!(parse_color(&mut cur).is_err());
    }

    #[test]
    fn test_parse_int_parameter() {
        // Dispatch character 'w' already consumed by the shape parser.
        let mut cur = cursor("idth=\"42\" ");
        assert_eq!(parse_int_parameter(&mut cur, "idth").unwrap(), 42);
    }

    #[test]
    fn test_parse_int_parameter_tolerates_space_before_quote() {
        let mut cur = cursor("=\"42 \" ");
        assert_eq!(parse_int_parameter(&mut cur, "").unwrap(), 42);
    }

    #[test]
    fn test_parse_point_parameter() {
        let mut cur = cursor("tart=\"1 2\" ");
        assert_eq!(
            parse_point_parameter(&mut cur, "tart").unwrap(),
            Point::new(1, 2)
        );
    }

    #[test]
    fn test_parse_color_parameter() {
        let mut cur = cursor("ill=\"#01020304\" ");
        assert_eq!(
            parse_color_parameter(&mut cur, "ill").unwrap(),
            Color::new(1, 2, 3, 4)
        );
    }

    #[test]
    fn test_parse_points_parameter() {
        let mut cur = cursor("oints=\"0 0 10 5 -3 4\" ");
        assert_eq!(
            parse_points_parameter(&mut cur, "oints").unwrap(),
            vec![Point::new(0, 0), Point::new(10, 5), Point::new(-3, 4)]
        );
    }

    #[test]
    fn test_parse_points_parameter_trailing_pair_before_quote() {
        let mut cur = cursor("=\"1 2\" ");
        assert_eq!(
            parse_points_parameter(&mut cur, "").unwrap(),
            vec![Point::new(1, 2)]
        );
    }

    #[test]
    fn test_parse_points_parameter_odd_count_fails() {
        let mut cur = cursor("=\"1 2 3\" ");
        assert!(parse_points_parameter(&mut cur, "").is_err());
    }

    #[test]
    fn test_parse_points_parameter_empty_fails() {
        let mut cur = cursor("=\"\" ");
        assert!(parse_points_parameter(&mut cur, "").is_err());
    }
}
