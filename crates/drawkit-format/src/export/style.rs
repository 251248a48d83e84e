//! Style attribute serialization.

use crate::cursor::Writer;
use crate::error::FormatResult;
use crate::export::{color_parameter, int_parameter, literal_parameter, point_parameter, ExportConfig};
use drawkit_model::{Rotate, Style};
use std::io::Write;

/// Write all four style attributes of a shape or group.
///
/// Every attribute is written unconditionally, including values equal to
/// the defaults; the parser treats each one as an overwrite, so the output
/// is self-contained regardless of nesting.
pub(crate) fn export_style<W: Write>(
    style: &Style,
    w: &mut Writer<W>,
    config: &ExportConfig,
    depth: usize,
) -> FormatResult<()> {
    color_parameter(w, config, "fill", style.fill, depth)?;
    color_parameter(w, config, "outline", style.outline, depth)?;
    point_parameter(w, config, "translate", style.translate, depth)?;
    match style.rotate {
        Rotate::FlipX => literal_parameter(w, config, "rotate", "X", depth),
        Rotate::FlipY => literal_parameter(w, config, "rotate", "Y", depth),
        // Reduce modulo 360 here as well: the variant payload is public, so
        // a value can bypass `Rotate::circular` and exceed the stored range.
        Rotate::Circular(degrees) => int_parameter(w, config, "rotate", degrees % 360, depth),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::{Color, Point};

    fn export(style: &Style, config: &ExportConfig) -> String {
        let mut out = Vec::new();
        let mut w = Writer::new(&mut out);
        export_style(style, &mut w, config, 1).unwrap();
        drop(w);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_default_style_single_line() {
        let config = ExportConfig::new(2, false).unwrap();
        assert_eq!(
            export(&Style::default(), &config),
            "fill=\"#000000ff\" outline=\"#000000ff\" translate=\"0 0\" rotate=\"0\" "
        );
    }

    #[test]
    fn test_multi_line_indents_each_attribute() {
        let config = ExportConfig::new(4, true).unwrap();
        let text = export(&Style::default(), &config);
        for line in text.lines() {
            assert!(line.starts_with("    "));
        }
    }

    #[test]
    fn test_flips_and_translate() {
        let config = ExportConfig::new(2, false).unwrap();
        let style = Style {
            fill: Color::new(255, 0, 0, 128),
            translate: Point::new(-3, 7),
            rotate: Rotate::FlipY,
            ..Style::default()
        };
        let text = export(&style, &config);
        assert!(text.contains("fill=\"#ff000080\""));
        assert!(text.contains("translate=\"-3 7\""));
        assert!(text.contains("rotate=\"Y\""));
    }

    #[test]
    fn test_unreduced_circular_rotation_is_normalized() {
        let config = ExportConfig::new(2, false).unwrap();
        let style = Style {
            rotate: Rotate::Circular(400),
            ..Style::default()
        };
        assert!(export(&style, &config).contains("rotate=\"40\""));

        let style = Style {
            rotate: Rotate::Circular(-400),
            ..Style::default()
        };
        assert!(export(&style, &config).contains("rotate=\"-40\""));
    }
}
