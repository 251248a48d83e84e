//! Shape element parsing.
//!
//! Tags are dispatched on their first letter, so the grammar never
//! backtracks: `e`llipse, `r`ectangle, `l`ine, `m`ultiline, `p`olygon,
//! `d`raw, `g`roup. Within a tag, attributes may appear in any order and
//! may repeat (the last occurrence wins); required attributes are checked
//! once the tag self-closes. Style attributes start from the style
//! inherited from the enclosing group.

use crate::cursor::Cursor;
use crate::error::FormatResult;
use crate::parse::path::parse_path_data;
use crate::parse::primitive::{
    parse_int_parameter, parse_point_parameter, parse_points_parameter,
};
use crate::parse::style::parse_style_attribute;
use drawkit_model::{
    Ellipse, Group, Line, Multiline, Path, Point, Polygon, Rectangle, Shape, Style,
};
use std::io::Read;
use tracing::trace;

/// Parse one shape element. The caller consumed `<` and the tag's first
/// letter, which is pending in the cursor.
pub fn parse_shape<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_shape";
    match cur.last() {
        Some('e') => parse_ellipse(cur, inherited),
        Some('r') => parse_rectangle(cur, inherited),
        Some('l') => parse_line(cur, inherited),
        Some('m') => parse_multiline(cur, inherited),
        Some('p') => parse_polygon(cur, inherited),
        Some('d') => parse_path(cur, inherited),
        Some('g') => parse_group(cur, inherited),
        Some(c) => Err(cur.syntax(OP, format!("unknown shape tag starting with '{c}'"))),
        None => Err(cur.eof(OP)),
    }
}

fn parse_ellipse<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_ellipse";
    cur.consume_literal(OP, "llipse")?;
    let mut style = *inherited;
    let (mut x, mut y, mut width, mut height) = (None, None, None, None);
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            'x' => x = Some(parse_int_parameter(cur, "")?),
            'y' => y = Some(parse_int_parameter(cur, "")?),
            'w' => width = Some(parse_int_parameter(cur, "idth")?),
            'h' => height = Some(parse_int_parameter(cur, "eight")?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed ellipse");
                return Ok(Shape::Ellipse(Ellipse {
                    style,
                    cx: x.ok_or_else(|| cur.missing_attribute("ellipse", "x"))?,
                    cy: y.ok_or_else(|| cur.missing_attribute("ellipse", "y"))?,
                    rx: width.ok_or_else(|| cur.missing_attribute("ellipse", "width"))?,
                    ry: height.ok_or_else(|| cur.missing_attribute("ellipse", "height"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_rectangle<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_rectangle";
    cur.consume_literal(OP, "ectangle")?;
    let mut style = *inherited;
    let (mut x, mut y, mut width, mut height) = (None, None, None, None);
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            'x' => x = Some(parse_int_parameter(cur, "")?),
            'y' => y = Some(parse_int_parameter(cur, "")?),
            'w' => width = Some(parse_int_parameter(cur, "idth")?),
            'h' => height = Some(parse_int_parameter(cur, "eight")?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed rectangle");
                return Ok(Shape::Rectangle(Rectangle {
                    style,
                    x: x.ok_or_else(|| cur.missing_attribute("rectangle", "x"))?,
                    y: y.ok_or_else(|| cur.missing_attribute("rectangle", "y"))?,
                    width: width.ok_or_else(|| cur.missing_attribute("rectangle", "width"))?,
                    height: height.ok_or_else(|| cur.missing_attribute("rectangle", "height"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_line<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_line";
    cur.consume_literal(OP, "ine")?;
    let mut style = *inherited;
    let (mut start, mut end): (Option<Point>, Option<Point>) = (None, None);
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            's' => start = Some(parse_point_parameter(cur, "tart")?),
            'e' => end = Some(parse_point_parameter(cur, "nd")?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed line");
                return Ok(Shape::Line(Line {
                    style,
                    start: start.ok_or_else(|| cur.missing_attribute("line", "start"))?,
                    end: end.ok_or_else(|| cur.missing_attribute("line", "end"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_multiline<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_multiline";
    cur.consume_literal(OP, "ultiline")?;
    let mut style = *inherited;
    let mut points: Option<Vec<Point>> = None;
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            'p' => points = Some(parse_points_parameter(cur, "oints")?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed multiline");
                return Ok(Shape::Multiline(Multiline {
                    style,
                    points: points.ok_or_else(|| cur.missing_attribute("multiline", "points"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_polygon<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_polygon";
    cur.consume_literal(OP, "olygon")?;
    let mut style = *inherited;
    let mut points: Option<Vec<Point>> = None;
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            'p' => points = Some(parse_points_parameter(cur, "oints")?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed polygon");
                return Ok(Shape::Polygon(Polygon {
                    style,
                    points: points.ok_or_else(|| cur.missing_attribute("polygon", "points"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_path<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_path";
    cur.consume_literal(OP, "raw")?;
    let mut style = *inherited;
    let mut elements = None;
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            'd' => elements = Some(parse_path_data(cur)?),
            '/' => {
                cur.consume_char(OP, '>')?;
                trace!("parsed path");
                return Ok(Shape::Path(Path {
                    style,
                    elements: elements.ok_or_else(|| cur.missing_attribute("draw", "data"))?,
                }));
            }
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }
}

fn parse_group<R: Read>(cur: &mut Cursor<R>, inherited: &Style) -> FormatResult<Shape> {
    const OP: &str = "parse_group";
    cur.consume_literal(OP, "roup")?;
    let mut style = *inherited;
    loop {
        let Some(c) = cur.next_non_ws()? else {
            return Err(cur.eof(OP));
        };
        match c {
            '>' => break,
            _ => parse_style_attribute(cur, &mut style)?,
        }
    }

    // Children inherit the group's resolved style, recursively.
    let mut shapes = Vec::new();
    loop {
        match cur.next_non_ws()? {
            Some('<') => {}
            Some(c) => return Err(cur.syntax(OP, format!("expected '<' got '{c}'"))),
            None => return Err(cur.eof(OP)),
        }
        match cur.next_non_ws()? {
            Some('/') => break,
            Some(_) => shapes.push(parse_shape(cur, &style)?),
            None => return Err(cur.eof(OP)),
        }
    }
    cur.consume_literal(OP, "group>")?;
    trace!(children = shapes.len(), "parsed group");
    Ok(Shape::Group(Group { style, shapes }))
}
