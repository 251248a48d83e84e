//! # Drawkit HTML
//!
//! One-way export of a Drawkit document as a standalone HTML page with
//! inline SVG. Shapes are flattened to their closest real SVG elements
//! and styles to `stroke`/`fill`/`transform` attributes, so the output
//! renders in any browser. There is no HTML parser; this is a terminal
//! format.

use drawkit_model::{Color, Document, PathElement, Point, Rotate, Shape, Style};
use std::io::Write;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during HTML export.
#[derive(Error, Debug)]
pub enum HtmlError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for HTML export operations.
pub type HtmlResult<T> = Result<T, HtmlError>;

const PAGE_START: &str = "<!DOCTYPE html>\n\
<html lang=\"en\">\n\
  <head>\n\
    <meta charset=\"utf-8\" />\n\
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
    <style>\n\
      * {\n\
        margin: 0;\n\
        padding: 0;\n\
      }\n\
      \n\
      svg {\n\
        width: 100vw;\n\
        width: 100dvw;\n\
        height: 100vh;\n\
        height: 100dvh;\n\
      }\n\
    </style>\n\
  </head>\n\
  <body>\n";

const PAGE_END: &str = "\t</body>\n</html>";

// ==================== Attribute formatting ====================

/// CSS rgba() color: byte channels, fractional alpha.
fn format_color(color: Color) -> String {
    format!(
        "rgba({}, {}, {}, {:.3})",
        color.red,
        color.green,
        color.blue,
        f64::from(color.alpha) / 255.0
    )
}

fn format_style(style: &Style) -> String {
    let rotate = match style.rotate {
        Rotate::FlipX => "rotateX(180)".to_string(),
        Rotate::FlipY => "rotateY(180)".to_string(),
        Rotate::Circular(degrees) => format!("rotate({degrees})"),
    };
    format!(
        "stroke=\"{}\" fill=\"{}\" transform=\"translate({}, {}) {}\"",
        format_color(style.outline),
        format_color(style.fill),
        style.translate.x,
        style.translate.y,
        rotate
    )
}

fn format_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_path_element(element: &PathElement) -> String {
    match element {
        PathElement::MoveTo(p) => format!("M {} {}", p.x, p.y),
        PathElement::LineTo(p) => format!("L {} {}", p.x, p.y),
        PathElement::HorizontalLineTo(x) => format!("H {x}"),
        PathElement::VerticalLineTo(y) => format!("V {y}"),
        PathElement::CubicCurveTo {
            control1,
            control2,
            end,
        } => format!(
            "C {} {} {} {} {} {}",
            control1.x, control1.y, control2.x, control2.y, end.x, end.y
        ),
        PathElement::CubicCurveToShorthand { control, end } => {
            format!("S {} {} {} {}", control.x, control.y, end.x, end.y)
        }
        PathElement::QuadraticCurveTo { control, end } => {
            format!("Q {} {} {} {}", control.x, control.y, end.x, end.y)
        }
        PathElement::QuadraticCurveToShorthand(p) => format!("T {} {}", p.x, p.y),
        PathElement::EndPath => "Z".to_string(),
    }
}

fn format_path_data(elements: &[PathElement]) -> String {
    elements
        .iter()
        .map(format_path_element)
        .collect::<Vec<_>>()
        .join(" ")
}

// ==================== Shapes ====================

fn write_tabs<W: Write>(writer: &mut W, depth: usize) -> HtmlResult<()> {
    for _ in 0..depth {
        writer.write_all(b"\t")?;
    }
    Ok(())
}

fn write_shape<W: Write>(writer: &mut W, shape: &Shape, depth: usize) -> HtmlResult<()> {
    write_tabs(writer, depth)?;
    match shape {
        Shape::Ellipse(e) => writeln!(
            writer,
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" {} />",
            e.cx,
            e.cy,
            e.rx,
            e.ry,
            format_style(&e.style)
        )?,
        Shape::Rectangle(r) => writeln!(
            writer,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {} />",
            r.x,
            r.y,
            r.width,
            r.height,
            format_style(&r.style)
        )?,
        Shape::Line(l) => writeln!(
            writer,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {} />",
            l.start.x,
            l.start.y,
            l.end.x,
            l.end.y,
            format_style(&l.style)
        )?,
        Shape::Multiline(m) => writeln!(
            writer,
            "<polyline points=\"{}\" {} />",
            format_points(&m.points),
            format_style(&m.style)
        )?,
        Shape::Polygon(p) => writeln!(
            writer,
            "<polygon points=\"{}\" {} />",
            format_points(&p.points),
            format_style(&p.style)
        )?,
        Shape::Path(p) => writeln!(
            writer,
            "<path d=\"{}\" {} />",
            format_path_data(&p.elements),
            format_style(&p.style)
        )?,
        Shape::Group(g) => {
            writeln!(writer, "<g {}>", format_style(&g.style))?;
            for child in &g.shapes {
                write_shape(writer, child, depth + 1)?;
            }
            write_tabs(writer, depth)?;
            writeln!(writer, "</g>")?;
        }
    }
    Ok(())
}

// ==================== Document ====================

/// Write a whole document as an HTML page to a stream.
pub fn export_html<W: Write>(document: &Document, mut writer: W) -> HtmlResult<()> {
    writer.write_all(PAGE_START.as_bytes())?;
    let start = document.viewport.start;
    let end = document.viewport.end;
    writeln!(
        writer,
        "\t\t<svg viewBox=\"{} {} {} {}\">",
        start.x,
        start.y,
        i64::from(end.x) - i64::from(start.x),
        i64::from(end.y) - i64::from(start.y)
    )?;
    for shape in &document.shapes {
        write_shape(&mut writer, shape, 3)?;
    }
    writer.write_all(b"\t\t</svg>\n")?;
    writer.write_all(PAGE_END.as_bytes())?;
    writer.flush()?;
    debug!(shapes = document.shapes.len(), "exported HTML page");
    Ok(())
}

/// Write a whole document as an HTML page into a string.
pub fn export_html_to_string(document: &Document) -> HtmlResult<String> {
    let mut out = Vec::new();
    export_html(document, &mut out)?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
