//! Rotation attribute variants.

use std::fmt;

/// A shape rotation: an axis flip or a circular rotation in degrees.
///
/// Circular values are kept reduced modulo 360 with their sign preserved,
/// so the stored degree is always in (-360, 360).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotate {
    /// Mirror across the X axis.
    FlipX,
    /// Mirror across the Y axis.
    FlipY,
    /// Rotation by the contained number of degrees.
    Circular(i32),
}

impl Rotate {
    /// Create a circular rotation, reducing the degree modulo 360.
    ///
    /// The sign survives the reduction: `circular(-370)` stores `-10`.
    pub fn circular(degree: i32) -> Self {
        Rotate::Circular(degree % 360)
    }

    /// The stored degree, if this is a circular rotation.
    pub fn degree(&self) -> Option<i32> {
        match self {
            Rotate::Circular(d) => Some(*d),
            _ => None,
        }
    }
}

impl Default for Rotate {
    fn default() -> Self {
        Rotate::Circular(0)
    }
}

impl fmt::Display for Rotate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rotate::FlipX => write!(f, "flip X"),
            Rotate::FlipY => write!(f, "flip Y"),
            Rotate::Circular(d) => write!(f, "{d}°"),
        }
    }
}
