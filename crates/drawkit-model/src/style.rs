//! Shape styling: fill, outline, translation, rotation.

use crate::{Color, Point, Rotate};
use std::fmt;

/// Styling attributes attached to every shape.
///
/// A group supplies its resolved style as the baseline for its children:
/// each child starts from a clone of it and overrides field by field, so an
/// omitted attribute inherits rather than resetting to a hard default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub fill: Color,
    pub outline: Color,
    pub translate: Point,
    pub rotate: Rotate,
}

impl Default for Style {
    /// The document-root baseline: opaque black, no translation, 0°.
    fn default() -> Self {
        Self {
            fill: Color::BLACK,
            outline: Color::BLACK,
            translate: Point::new(0, 0),
            rotate: Rotate::circular(0),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fill={} outline={} translate={} rotate={}",
            self.fill, self.outline, self.translate, self.rotate
        )
    }
}
