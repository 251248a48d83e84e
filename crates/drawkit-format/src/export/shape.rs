//! Shape element serialization.

use crate::cursor::Writer;
use crate::error::FormatResult;
use crate::export::{indent, int_parameter, path, point_parameter, points_parameter, ExportConfig};
use crate::export::style::export_style;
use drawkit_model::{Ellipse, Group, Line, Multiline, Path, Polygon, Rectangle, Shape};
use std::io::Write;

const OP: &str = "export_shape";

/// Open a tag: indentation, `<name`, then the attribute separator.
fn open_tag<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    name: &str,
    depth: usize,
) -> FormatResult<()> {
    w.write_spaces(OP, depth * config.tab_size)?;
    w.write_str(OP, &format!("<{name}"))?;
    w.write_str(OP, if config.line_break { "\n" } else { " " })
}

/// Close a self-closing tag at `depth`.
fn close_tag<W: Write>(w: &mut Writer<W>, config: &ExportConfig, depth: usize) -> FormatResult<()> {
    indent(w, config, OP, depth)?;
    w.write_str(OP, "/>")
}

/// Serialize one shape at the given depth, followed by a newline.
pub(crate) fn export_shape<W: Write>(
    shape: &Shape,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    match shape {
        Shape::Ellipse(e) => export_ellipse(e, w, config, depth)?,
        Shape::Rectangle(r) => export_rectangle(r, w, config, depth)?,
        Shape::Line(l) => export_line(l, w, config, depth)?,
        Shape::Multiline(m) => export_multiline(m, w, config, depth)?,
        Shape::Polygon(p) => export_polygon(p, w, config, depth)?,
        Shape::Path(p) => export_path(p, w, config, depth)?,
        Shape::Group(g) => export_group(g, w, config, depth)?,
    }
    w.write_str(OP, "\n")
}

fn export_ellipse<W: Write>(
    ellipse: &Ellipse,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "ellipse", depth)?;
    export_style(&ellipse.style, w, config, depth + 1)?;
    int_parameter(w, config, "x", ellipse.cx, depth + 1)?;
    int_parameter(w, config, "y", ellipse.cy, depth + 1)?;
    int_parameter(w, config, "width", ellipse.rx, depth + 1)?;
    int_parameter(w, config, "height", ellipse.ry, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_rectangle<W: Write>(
    rectangle: &Rectangle,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "rectangle", depth)?;
    export_style(&rectangle.style, w, config, depth + 1)?;
    int_parameter(w, config, "x", rectangle.x, depth + 1)?;
    int_parameter(w, config, "y", rectangle.y, depth + 1)?;
    int_parameter(w, config, "width", rectangle.width, depth + 1)?;
    int_parameter(w, config, "height", rectangle.height, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_line<W: Write>(
    line: &Line,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "line", depth)?;
    export_style(&line.style, w, config, depth + 1)?;
    point_parameter(w, config, "start", line.start, depth + 1)?;
    point_parameter(w, config, "end", line.end, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_multiline<W: Write>(
    multiline: &Multiline,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "multiline", depth)?;
    export_style(&multiline.style, w, config, depth + 1)?;
    points_parameter(w, config, "points", &multiline.points, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_polygon<W: Write>(
    polygon: &Polygon,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "polygon", depth)?;
    export_style(&polygon.style, w, config, depth + 1)?;
    points_parameter(w, config, "points", &polygon.points, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_path<W: Write>(
    path: &Path,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "draw", depth)?;
    export_style(&path.style, w, config, depth + 1)?;
    path::data_parameter(w, config, &path.elements, depth + 1)?;
    close_tag(w, config, depth)
}

fn export_group<W: Write>(
    group: &Group,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    open_tag(w, config, "group", depth)?;
    export_style(&group.style, w, config, depth + 1)?;
    indent(w, config, OP, depth)?;
    w.write_str(OP, ">\n")?;
    for child in &group.shapes {
        export_shape(child, w, config, depth + 1)?;
    }
    w.write_spaces(OP, depth * config.tab_size)?;
    w.write_str(OP, "</group>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::{Point, Style};

    fn export(shape: &Shape, config: &ExportConfig) -> String {
        let mut out = Vec::new();
        let mut w = Writer::new(&mut out);
        export_shape(shape, &mut w, config, 1).unwrap();
        drop(w);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_line_single_line_layout() {
        let shape = Shape::Line(Line {
            style: Style::default(),
            start: Point::new(0, 0),
            end: Point::new(5, 5),
        });
        let config = ExportConfig::new(2, false).unwrap();
        assert_eq!(
            export(&shape, &config),
            "  <line fill=\"#000000ff\" outline=\"#000000ff\" translate=\"0 0\" \
             rotate=\"0\" start=\"0 0\" end=\"5 5\" />\n"
        );
    }

    #[test]
    fn test_rectangle_multi_line_layout() {
        let shape = Shape::Rectangle(Rectangle {
            style: Style::default(),
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        });
        let config = ExportConfig::new(2, true).unwrap();
        let text = export(&shape, &config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "  <rectangle");
        assert!(lines[1..9].iter().all(|l| l.starts_with("    ")));
        assert_eq!(lines[5], "    x=\"1\"");
        assert_eq!(lines[8], "    height=\"4\"");
        assert_eq!(lines[9], "  />");
    }

    #[test]
    fn test_group_closes_with_full_tag() {
        let shape = Shape::Group(Group {
            style: Style::default(),
            shapes: vec![Shape::Line(Line {
                style: Style::default(),
                start: Point::new(0, 0),
                end: Point::new(1, 1),
            })],
        });
        let config = ExportConfig::new(2, true).unwrap();
        let text = export(&shape, &config);
        assert!(text.contains("  <group\n"));
        assert!(text.contains("    <line\n"));
        assert!(text.ends_with("  </group>\n"));
    }
}
