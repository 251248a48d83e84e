//! Serialization of documents back to the textual format.
//!
//! Output layout is driven by [`ExportConfig`]: in multi-line mode every
//! attribute sits on its own line, indented by `depth * tab_size` spaces;
//! in single-line mode attributes are separated by single spaces. Both
//! layouts re-parse to the same document.

pub mod path;
pub mod shape;
pub mod style;

use crate::cursor::Writer;
use crate::error::{FormatError, FormatResult};
use drawkit_model::{Color, Document, Point};
use std::io::Write;
use tracing::debug;

// ==================== Configuration ====================

/// Formatting knobs for the exporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportConfig {
    /// Spaces per indentation level. Must be at least 1.
    pub tab_size: usize,
    /// One attribute per line when true, everything on one line when false.
    pub line_break: bool,
}

impl ExportConfig {
    /// Build a config, rejecting a zero tab size.
    pub fn new(tab_size: usize, line_break: bool) -> FormatResult<Self> {
        if tab_size == 0 {
            return Err(FormatError::Config(
                "tab_size must be greater than zero".into(),
            ));
        }
        Ok(Self {
            tab_size,
            line_break,
        })
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            tab_size: 2,
            line_break: true,
        }
    }
}

// ==================== Shared building blocks ====================

/// Indent to `depth` in multi-line mode; no-op in single-line mode.
pub(crate) fn indent<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    op: &'static str,
    depth: usize,
) -> FormatResult<()> {
    if config.line_break {
        w.write_spaces(op, depth * config.tab_size)?;
    }
    Ok(())
}

/// Close a parameter value: the quote, then the attribute separator.
pub(crate) fn close_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    op: &'static str,
) -> FormatResult<()> {
    w.write_str(op, if config.line_break { "\"\n" } else { "\" " })
}

fn format_point(point: Point) -> String {
    format!("{} {}", point.x, point.y)
}

/// Write `name="<int>"`.
pub(crate) fn int_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    value: i32,
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_int_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, &format!("{name}=\"{value}"))?;
    close_parameter(w, config, OP)
}

/// Write `name="<x> <y>"`.
pub(crate) fn point_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    value: Point,
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_point_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, &format!("{name}=\"{}", format_point(value)))?;
    close_parameter(w, config, OP)
}

/// Write `name="#rrggbbaa"`.
pub(crate) fn color_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    value: Color,
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_color_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, &format!("{name}=\"{value}"))?;
    close_parameter(w, config, OP)
}

/// Write `name="<text>"` for a literal value like a flip marker.
pub(crate) fn literal_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    value: &str,
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_literal_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, &format!("{name}=\"{value}"))?;
    close_parameter(w, config, OP)
}

/// Write `name="x1 y1 x2 y2 ..."`.
pub(crate) fn points_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    points: &[Point],
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_points_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, &format!("{name}=\""))?;
    for (i, point) in points.iter().enumerate() {
        if i > 0 {
            w.write_str(OP, " ")?;
        }
        w.write_str(OP, &format_point(*point))?;
    }
    close_parameter(w, config, OP)
}

// ==================== Document ====================

/// Serialize a whole document.
pub fn export_document<W: Write>(
    document: &Document,
    writer: &mut Writer<W>,
    config: &ExportConfig,
) -> FormatResult<()> {
    const OP: &str = "export_document";
    writer.write_str(OP, "<svg")?;
    if config.line_break {
        writer.write_str(OP, "\n")?;
        writer.write_spaces(OP, config.tab_size)?;
    } else {
        writer.write_str(OP, " ")?;
    }
    writer.write_str(
        OP,
        &format!(
            "viewport=\"{} {}\"",
            format_point(document.viewport.start),
            format_point(document.viewport.end)
        ),
    )?;
    writer.write_str(OP, ">\n")?;
    for shape in &document.shapes {
        shape::export_shape(shape, writer, config, 1)?;
    }
    writer.write_str(OP, "</svg>")?;
    writer.flush(OP)?;
    debug!(shapes = document.shapes.len(), "exported document");
    Ok(())
}
