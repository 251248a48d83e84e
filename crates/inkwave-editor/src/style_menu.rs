//! Style editing menu shared by all shape editors.

use crate::prompt::{Answer, Prompt};
use anyhow::Result;
use drawkit_model::{Rotate, Style};
use std::io::{BufRead, Write};

/// Interactive style editing: loop until the user backs out.
pub fn edit_style<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    style: &mut Style,
) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        prompt.say(&format!("Style {{ {style} }}\n\n"))?;
        prompt.say("Select the style attribute to edit:\n")?;
        prompt.say("- Fill color (1)\n")?;
        prompt.say("- Outline color (2)\n")?;
        prompt.say("- Translation (3)\n")?;
        prompt.say("- Rotation (4)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => {
                if let Answer::Value(color) = prompt.ask_color("Fill color")? {
                    style.fill = color;
                }
            }
            Answer::Value(2) => {
                if let Answer::Value(color) = prompt.ask_color("Outline color")? {
                    style.outline = color;
                }
            }
            Answer::Value(3) => {
                if let Answer::Value(point) = prompt.ask_point("Translation")? {
                    style.translate = point;
                }
            }
            Answer::Value(4) => {
                if let Answer::Value(rotate) = ask_rotate(prompt)? {
                    style.rotate = rotate;
                }
            }
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

/// Ask for a rotation: `x`/`y` for the flips, or a degree count.
pub fn ask_rotate<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Answer<Rotate>> {
    loop {
        let text = match prompt.ask_string("Rotation: 'x', 'y' or degrees")? {
            Answer::Empty => return Ok(Answer::Empty),
            Answer::Value(text) => text,
        };
        match text.to_lowercase().as_str() {
            "x" => return Ok(Answer::Value(Rotate::FlipX)),
            "y" => return Ok(Answer::Value(Rotate::FlipY)),
            other => match other.parse::<i32>() {
                Ok(degrees) => return Ok(Answer::Value(Rotate::circular(degrees))),
                Err(_) => prompt.error("Enter 'x', 'y' or an integer.\n")?,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::{Color, Point};

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_edit_fill_then_back_out() {
        let mut p = prompt("1\n#11223344\n\n");
        let mut style = Style::default();
        edit_style(&mut p, &mut style).unwrap();
        assert_eq!(style.fill, Color::new(0x11, 0x22, 0x33, 0x44));
        assert_eq!(style.outline, Color::BLACK);
    }

    #[test]
    fn test_edit_translate() {
        let mut p = prompt("3\n7\n-2\n\n");
        let mut style = Style::default();
        edit_style(&mut p, &mut style).unwrap();
        assert_eq!(style.translate, Point::new(7, -2));
    }

    #[test]
    fn test_ask_rotate_variants() {
        assert_eq!(
            ask_rotate(&mut prompt("X\n")).unwrap(),
            Answer::Value(Rotate::FlipX)
        );
        assert_eq!(
            ask_rotate(&mut prompt("y\n")).unwrap(),
            Answer::Value(Rotate::FlipY)
        );
        assert_eq!(
            ask_rotate(&mut prompt("370\n")).unwrap(),
            Answer::Value(Rotate::Circular(10))
        );
    }

    #[test]
    fn test_ask_rotate_reprompts_on_garbage() {
        assert_eq!(
            ask_rotate(&mut prompt("sideways\n90\n")).unwrap(),
            Answer::Value(Rotate::Circular(90))
        );
    }
}
