//! RGBA colors with byte channels.

use std::fmt;

/// An RGBA color. Channels are 0-255; alpha 255 is fully opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    /// Opaque black, the baseline for both fill and outline.
    pub const BLACK: Color = Color::new(0, 0, 0, 255);

    /// Create a color from its four channels.
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl fmt::Display for Color {
    /// Formats as the textual grammar's `#RRGGBBAA` literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02x}{:02x}{:02x}{:02x}",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display() {
        assert_eq!(Color::new(255, 0, 16, 255).to_string(), "#ff0010ff");
        assert_eq!(Color::BLACK.to_string(), "#000000ff");
    }
}
