//! Path drawing commands.

use crate::Point;
use std::fmt;

/// One command of the path mini-language.
///
/// Each variant corresponds to a single-letter command in a `<draw>`
/// shape's `data` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathElement {
    /// `M x y`: move the pen without drawing.
    MoveTo(Point),
    /// `L x y`: straight line to the point.
    LineTo(Point),
    /// `H x`: horizontal line to the given x.
    HorizontalLineTo(i32),
    /// `V y`: vertical line to the given y.
    VerticalLineTo(i32),
    /// `C c1x c1y c2x c2y x y`: cubic Bézier with two control points.
    CubicCurveTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// `S cx cy x y`: cubic Bézier reflecting the previous control point.
    CubicCurveToShorthand { control: Point, end: Point },
    /// `Q cx cy x y`: quadratic Bézier with one control point.
    QuadraticCurveTo { control: Point, end: Point },
    /// `T x y`: quadratic Bézier reflecting the previous control point.
    QuadraticCurveToShorthand(Point),
    /// `Z`: close the current sub-path.
    EndPath,
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathElement::MoveTo(p) => write!(f, "move to {p}"),
            PathElement::LineTo(p) => write!(f, "line to {p}"),
            PathElement::HorizontalLineTo(x) => write!(f, "horizontal line to {x}"),
            PathElement::VerticalLineTo(y) => write!(f, "vertical line to {y}"),
            PathElement::CubicCurveTo {
                control1,
                control2,
                end,
            } => write!(f, "cubic curve {control1} {control2} to {end}"),
            PathElement::CubicCurveToShorthand { control, end } => {
                write!(f, "cubic curve {control} to {end}")
            }
            PathElement::QuadraticCurveTo { control, end } => {
                write!(f, "quadratic curve {control} to {end}")
            }
            PathElement::QuadraticCurveToShorthand(p) => {
                write!(f, "quadratic curve to {p}")
            }
            PathElement::EndPath => write!(f, "end of path"),
        }
    }
}
