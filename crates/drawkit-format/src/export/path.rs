//! Path `data` attribute serialization.

use crate::cursor::Writer;
use crate::error::FormatResult;
use crate::export::{close_parameter, indent, ExportConfig};
use drawkit_model::PathElement;
use std::io::Write;

fn format_element(element: &PathElement) -> String {
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

/// Write `data="..."` with elements separated by single spaces.
pub(crate) fn data_parameter<W: Write>(
    w: &mut Writer<W>,
    config: &ExportConfig,
    elements: &[PathElement],
    depth: usize,
) -> FormatResult<()> {
    const OP: &str = "export_data_parameter";
    indent(w, config, OP, depth)?;
    w.write_str(OP, "data=\"")?;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            w.write_str(OP, " ")?;
        }
        w.write_str(OP, &format_element(element))?;
    }
    close_parameter(w, config, OP)
}
