//! Shape variants and the document shape tree.

use crate::{PathElement, Point, Style};
use std::fmt;

// ==================== Shape payloads ====================

/// Ellipse centered at (cx, cy) with per-axis radii.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ellipse {
    pub style: Style,
    pub cx: i32,
    pub cy: i32,
    pub rx: i32,
    pub ry: i32,
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rectangle {
    pub style: Style,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Straight segment between two points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub style: Style,
    pub start: Point,
    pub end: Point,
}

/// Open polyline through an ordered point list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Multiline {
    pub style: Style,
    pub points: Vec<Point>,
}

/// Closed polygon through an ordered point list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    pub style: Style,
    pub points: Vec<Point>,
}

/// Free-form path described by drawing commands.
///
/// A parsed path always holds at least one element; the parser rejects an
/// empty `data` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    pub style: Style,
    pub elements: Vec<PathElement>,
}

/// Group of child shapes sharing an inherited style baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub style: Style,
    pub shapes: Vec<Shape>,
}

// ==================== Shape ====================

/// One node of the document shape tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Ellipse(Ellipse),
    Rectangle(Rectangle),
    Line(Line),
    Multiline(Multiline),
    Polygon(Polygon),
    Path(Path),
    Group(Group),
}

impl Shape {
    /// The shape's own style.
    pub fn style(&self) -> &Style {
        match self {
            Shape::Ellipse(s) => &s.style,
            Shape::Rectangle(s) => &s.style,
            Shape::Line(s) => &s.style,
            Shape::Multiline(s) => &s.style,
            Shape::Polygon(s) => &s.style,
            Shape::Path(s) => &s.style,
            Shape::Group(s) => &s.style,
        }
    }

    /// Mutable access to the shape's style.
    pub fn style_mut(&mut self) -> &mut Style {
        match self {
            Shape::Ellipse(s) => &mut s.style,
            Shape::Rectangle(s) => &mut s.style,
            Shape::Line(s) => &mut s.style,
            Shape::Multiline(s) => &mut s.style,
            Shape::Polygon(s) => &mut s.style,
            Shape::Path(s) => &mut s.style,
            Shape::Group(s) => &mut s.style,
        }
    }

    /// The tag name used by the textual grammar for this variant.
    pub fn tag_name(&self) -> &'static str {
        match self {
            Shape::Ellipse(_) => "ellipse",
            Shape::Rectangle(_) => "rectangle",
            Shape::Line(_) => "line",
            Shape::Multiline(_) => "multiline",
            Shape::Polygon(_) => "polygon",
            Shape::Path(_) => "draw",
            Shape::Group(_) => "group",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Ellipse(e) => write!(
                f,
                "Ellipse {{ center=({}, {}) rx={} ry={} }}",
                e.cx, e.cy, e.rx, e.ry
            ),
            Shape::Rectangle(r) => write!(
                f,
                "Rectangle {{ x={} y={} width={} height={} }}",
                r.x, r.y, r.width, r.height
            ),
            Shape::Line(l) => write!(f, "Line {{ start={} end={} }}", l.start, l.end),
            Shape::Multiline(m) => write!(f, "Multiline {{ {} points }}", m.points.len()),
            Shape::Polygon(p) => write!(f, "Polygon {{ {} points }}", p.points.len()),
            Shape::Path(p) => write!(f, "Path {{ {} elements }}", p.elements.len()),
            Shape::Group(g) => write!(f, "Group {{ {} shapes }}", g.shapes.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle() -> Shape {
        Shape::Rectangle(Rectangle {
            style: Style::default(),
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        })
    }

    #[test]
    fn test_style_accessors_agree() {
        let mut shape = rectangle();
        shape.style_mut().translate = Point::new(7, 8);
        assert_eq!(shape.style().translate, Point::new(7, 8));
    }

    #[test]
    fn test_tag_names() {
        assert_eq!(rectangle().tag_name(), "rectangle");
        let path = Shape::Path(Path {
            style: Style::default(),
            elements: vec![PathElement::EndPath],
        });
        assert_eq!(path.tag_name(), "draw");
    }

    #[test]
    fn test_group_owns_subtree() {
        let group = Shape::Group(Group {
            style: Style::default(),
            shapes: vec![rectangle(), rectangle()],
        });
        let clone = group.clone();
        assert_eq!(group, clone);
        drop(group);
        // The clone is unaffected by dropping the original.
        assert_eq!(clone.style().rotate, crate::Rotate::Circular(0));
    }
}
