//! # Drawkit Model
//!
//! In-memory document model for the Drawkit vector graphics format.
//!
//! ## Features
//!
//! - **Shapes**: ellipse, rectangle, line, multiline, polygon, path, group
//! - **Styles**: fill/outline colors, translation, rotation, inherited from
//!   the enclosing group
//! - **Paths**: the M/L/H/V/C/S/Q/T/Z drawing-command mini-language
//! - **Lists**: ordered, index-addressable sequences with validated
//!   insert/remove
//!
//! ## Architecture
//!
//! ```text
//! Document
//!    ├── Viewport (start/end points)
//!    └── Shapes
//!           ├── Ellipse / Rectangle / Line / Multiline / Polygon / Path
//!           └── Group
//!              └── Shapes (recursive)
//! ```
//!
//! Every value is owned: a shape owns its style and payload, a group owns
//! its whole subtree. Dropping a document releases everything recursively.

pub mod color;
pub mod document;
pub mod list;
pub mod path;
pub mod point;
pub mod rotate;
pub mod shape;
pub mod style;

pub use color::Color;
pub use document::{Document, Viewport};
pub use list::{insert_at, remove_at};
pub use path::PathElement;
pub use point::Point;
pub use rotate::Rotate;
pub use shape::{Ellipse, Group, Line, Multiline, Path, Polygon, Rectangle, Shape};
pub use style::Style;
