//! Top-level document: viewport plus shape tree.

use crate::{Point, Shape};
use std::fmt;

/// The document's coordinate bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub start: Point,
    pub end: Point,
}

impl Viewport {
    /// Create a viewport spanning the two corner points.
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}

/// A complete vector document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    pub viewport: Viewport,
    pub shapes: Vec<Shape>,
}

impl Document {
    /// Create an empty document with the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            shapes: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new(Viewport::new(Point::new(0, 0), Point::new(100, 100)));
        assert!(doc.shapes.is_empty());
        assert_eq!(doc.viewport.end, Point::new(100, 100));
    }
}
