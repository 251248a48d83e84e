//! Terminal prompting primitives.
//!
//! Every `ask_*` method re-prompts until it reads a valid value, and an
//! empty line always means "go back", reported as [`Answer::Empty`]. The
//! prompt is generic over its streams so menu flows can be driven from
//! scripted input in tests.

use anyhow::Result;
use drawkit_model::{Color, Point};
use std::io::{BufRead, Write};

const RED: &str = "\x1b[1;31m";
const GREEN: &str = "\x1b[1;32m";
const RESET: &str = "\x1b[0m";

/// Outcome of a prompt: a value, or an empty line meaning "go back".
#[derive(Debug, PartialEq, Eq)]
pub enum Answer<T> {
    Value(T),
    Empty,
}

impl<T> Answer<T> {
    /// The answered value, or `default` when the prompt was skipped.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Answer::Value(v) => v,
            Answer::Empty => default,
        }
    }

    /// Apply `f` to the answered value, if any.
    pub fn map_value<U>(self, f: impl FnOnce(T) -> U) -> Answer<U> {
        match self {
            Answer::Value(v) => Answer::Value(f(v)),
            Answer::Empty => Answer::Empty,
        }
    }
}

/// Line-oriented prompter over arbitrary input/output streams.
pub struct Prompt<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Clear the screen and home the cursor.
    pub fn clear_screen(&mut self) -> Result<()> {
        write!(self.output, "\x1b[1;1H\x1b[2J")?;
        Ok(())
    }

    /// Print plain text.
    pub fn say(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print an error line in red.
    pub fn error(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{RED}{text}{RESET}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Print a success line in green.
    pub fn success(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{GREEN}{text}{RESET}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Wait for the user to press enter.
    pub fn press_enter(&mut self) -> Result<()> {
        self.say("Press enter to continue...")?;
        self.read_line()?;
        Ok(())
    }

    /// Read one line, trimmed. `None` means the line was empty or the
    /// input reached end of stream.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        Ok(Some(trimmed.to_string()))
    }

    /// Ask for an integer, re-prompting until valid.
    pub fn ask_int(&mut self, prompt: &str) -> Result<Answer<i32>> {
        loop {
            self.say(prompt)?;
            self.say("\nEnter an integer value (or nothing to go back): ")?;
            let Some(text) = self.read_line()? else {
                return Ok(Answer::Empty);
            };
            match text.parse::<i32>() {
                Ok(value) => return Ok(Answer::Value(value)),
                Err(_) => self.error("Enter a valid integer.\n")?,
            }
        }
    }

    /// Ask for a non-empty free-form string.
    pub fn ask_string(&mut self, prompt: &str) -> Result<Answer<String>> {
        self.say(prompt)?;
        self.say("\nEnter your input (or nothing to go back): ")?;
        match self.read_line()? {
            Some(text) => Ok(Answer::Value(text)),
            None => Ok(Answer::Empty),
        }
    }

    /// Ask for `true` or `false`, re-prompting until valid.
    pub fn ask_bool(&mut self, prompt: &str) -> Result<Answer<bool>> {
        loop {
            self.say(prompt)?;
            self.say("\nEnter 'true' or 'false' (or nothing to go back): ")?;
            let Some(text) = self.read_line()? else {
                return Ok(Answer::Empty);
            };
            match text.to_lowercase().as_str() {
                "true" => return Ok(Answer::Value(true)),
                "false" => return Ok(Answer::Value(false)),
                _ => self.error("Enter 'true' or 'false'.\n")?,
            }
        }
    }

    /// Ask for an index in `0..=max`, re-prompting until in range.
    pub fn ask_index(&mut self, prompt: &str, max: usize) -> Result<Answer<usize>> {
        loop {
            match self.ask_int(&format!("{prompt} (range [0, {max}])"))? {
                Answer::Empty => return Ok(Answer::Empty),
                Answer::Value(value) => {
                    if value >= 0 && (value as usize) <= max {
                        return Ok(Answer::Value(value as usize));
                    }
                    self.error("Select a valid index.\n")?;
                }
            }
        }
    }

    /// Ask for a `#rrggbbaa` color, re-prompting until valid.
    pub fn ask_color(&mut self, prompt: &str) -> Result<Answer<Color>> {
        loop {
            self.say(prompt)?;
            self.say("\nEnter a color as #rrggbbaa (or nothing to go back): ")?;
            let Some(text) = self.read_line()? else {
                return Ok(Answer::Empty);
            };
            if let Some(color) = parse_color(&text) {
                return Ok(Answer::Value(color));
            }
            self.error("Enter a valid color (four hex byte channels).\n")?;
        }
    }

    /// Ask for the two coordinates of a point. Backing out of either
    /// coordinate backs out of the whole point.
    pub fn ask_point(&mut self, prompt: &str) -> Result<Answer<Point>> {
        let Answer::Value(x) = self.ask_int(&format!("{prompt}: X coordinate"))? else {
            return Ok(Answer::Empty);
        };
        let Answer::Value(y) = self.ask_int(&format!("{prompt}: Y coordinate"))? else {
            return Ok(Answer::Empty);
        };
        Ok(Answer::Value(Point::new(x, y)))
    }
}

fn parse_color(text: &str) -> Option<Color> {
    let hex = text.strip_prefix('#')?;
    if hex.len() != 8 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_ask_int_reprompts_until_valid() {
        let mut p = prompt("abc\n42\n");
        assert_eq!(p.ask_int("n").unwrap(), Answer::Value(42));
    }

    #[test]
    fn test_ask_int_empty_line_backs_out() {
        let mut p = prompt("\n");
        assert_eq!(p.ask_int("n").unwrap(), Answer::Empty);
    }

    #[test]
    fn test_ask_int_end_of_stream_backs_out() {
        let mut p = prompt("");
        assert_eq!(p.ask_int("n").unwrap(), Answer::Empty);
    }

    #[test]
    fn test_ask_bool() {
        let mut p = prompt("yes\nTRUE\n");
        assert_eq!(p.ask_bool("b").unwrap(), Answer::Value(true));
    }

    #[test]
    fn test_ask_index_rejects_out_of_range() {
        let mut p = prompt("5\n-1\n3\n");
        assert_eq!(p.ask_index("i", 3).unwrap(), Answer::Value(3));
    }

    #[test]
    fn test_ask_color() {
        let mut p = prompt("#ff8000cc\n");
        assert_eq!(
            p.ask_color("c").unwrap(),
            Answer::Value(Color::new(255, 128, 0, 204))
        );
    }

    #[test]
    fn test_ask_color_rejects_bad_formats() {
        let mut p = prompt("red\n#ff00\n#gg8000cc\n#00000000\n");
        assert_eq!(
            p.ask_color("c").unwrap(),
            Answer::Value(Color::new(0, 0, 0, 0))
        );
    }

    #[test]
    fn test_ask_point() {
        let mut p = prompt("3\n-4\n");
        assert_eq!(p.ask_point("p").unwrap(), Answer::Value(Point::new(3, -4)));
    }

    #[test]
    fn test_ask_point_backs_out_midway() {
        let mut p = prompt("3\n\n");
        assert_eq!(p.ask_point("p").unwrap(), Answer::Empty);
    }
}
