//! Path element list editing.

use crate::prompt::{Answer, Prompt};
use anyhow::Result;
use drawkit_model::{list, PathElement};
use std::io::{BufRead, Write};

fn print_elements<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    elements: &[PathElement],
) -> Result<()> {
    prompt.say("Path elements [\n")?;
    for (i, element) in elements.iter().enumerate() {
        prompt.say(&format!("  ({i}) {element}\n"))?;
    }
    prompt.say("]\n\n")?;
    Ok(())
}

/// Interactive editing of a path's element list.
pub fn edit_elements<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    elements: &mut Vec<PathElement>,
) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        print_elements(prompt, elements)?;
        prompt.say("Select action to perform:\n")?;
        prompt.say("- Add element (1)\n")?;
        prompt.say("- Edit element (2)\n")?;
        prompt.say("- Remove element (3)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => add_element(prompt, elements)?,
            Answer::Value(2) => {
                if elements.is_empty() {
                    prompt.error("There is no element to edit.\n")?;
                    prompt.press_enter()?;
                    continue;
                }
                if let Answer::Value(index) =
                    prompt.ask_index("Select the element to edit", elements.len() - 1)?
                {
                    edit_element(prompt, &mut elements[index])?;
                }
            }
            Answer::Value(3) => {
                if elements.is_empty() {
                    prompt.error("There is no element to remove.\n")?;
                    prompt.press_enter()?;
                    continue;
                }
                if let Answer::Value(index) =
                    prompt.ask_index("Select the element to remove", elements.len() - 1)?
                {
                    list::remove_at(elements, index);
                }
            }
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

fn add_element<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    elements: &mut Vec<PathElement>,
) -> Result<()> {
    let Answer::Value(element) = new_element(prompt)? else {
        return Ok(());
    };
    let Answer::Value(index) = prompt.ask_index("Select where to insert", elements.len())? else {
        return Ok(());
    };
    if !list::insert_at(elements, index, element) {
        prompt.error("Select a valid index.\n")?;
    }
    Ok(())
}

/// Ask for a new path element, prompting for its operands.
pub fn new_element<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<Answer<PathElement>> {
    loop {
        prompt.clear_screen()?;
        prompt.say("Select the element kind:\n")?;
        prompt.say("- Move to (1)\n")?;
        prompt.say("- Line to (2)\n")?;
        prompt.say("- Horizontal line to (3)\n")?;
        prompt.say("- Vertical line to (4)\n")?;
        prompt.say("- Cubic curve to (5)\n")?;
        prompt.say("- Cubic curve shorthand (6)\n")?;
        prompt.say("- Quadratic curve to (7)\n")?;
        prompt.say("- Quadratic curve shorthand (8)\n")?;
        prompt.say("- End of path (9)\n")?;
        let kind = match prompt.ask_int("")? {
            Answer::Empty => return Ok(Answer::Empty),
            Answer::Value(kind) => kind,
        };
        let element = match kind {
            1 => prompt.ask_point("Target")?.map_value(PathElement::MoveTo),
            2 => prompt.ask_point("Target")?.map_value(PathElement::LineTo),
            3 => prompt
                .ask_int("Target X")?
                .map_value(PathElement::HorizontalLineTo),
            4 => prompt
                .ask_int("Target Y")?
                .map_value(PathElement::VerticalLineTo),
            5 => ask_cubic(prompt)?,
            6 => ask_cubic_shorthand(prompt)?,
            7 => ask_quadratic(prompt)?,
            8 => prompt
                .ask_point("End point")?
                .map_value(PathElement::QuadraticCurveToShorthand),
            9 => Answer::Value(PathElement::EndPath),
            _ => {
                prompt.error("Enter a valid option.\n")?;
                continue;
            }
        };
        return Ok(element);
    }
}

fn ask_cubic<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Answer<PathElement>> {
    let Answer::Value(control1) = prompt.ask_point("First control point")? else {
        return Ok(Answer::Empty);
    };
    let Answer::Value(control2) = prompt.ask_point("Second control point")? else {
        return Ok(Answer::Empty);
    };
    let Answer::Value(end) = prompt.ask_point("End point")? else {
        return Ok(Answer::Empty);
    };
    Ok(Answer::Value(PathElement::CubicCurveTo {
        control1,
        control2,
        end,
    }))
}

fn ask_cubic_shorthand<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
) -> Result<Answer<PathElement>> {
    let Answer::Value(control) = prompt.ask_point("Control point")? else {
        return Ok(Answer::Empty);
    };
    let Answer::Value(end) = prompt.ask_point("End point")? else {
        return Ok(Answer::Empty);
    };
    Ok(Answer::Value(PathElement::CubicCurveToShorthand {
        control,
        end,
    }))
}

fn ask_quadratic<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Answer<PathElement>> {
    let Answer::Value(control) = prompt.ask_point("Control point")? else {
        return Ok(Answer::Empty);
    };
    let Answer::Value(end) = prompt.ask_point("End point")? else {
        return Ok(Answer::Empty);
    };
    Ok(Answer::Value(PathElement::QuadraticCurveTo { control, end }))
}

/// Replace an existing element with a freshly prompted one of any kind.
fn edit_element<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    element: &mut PathElement,
) -> Result<()> {
    if let Answer::Value(new) = new_element(prompt)? {
        *element = new;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::Point;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_new_move_to() {
        let mut p = prompt("1\n10\n20\n");
        assert_eq!(
            new_element(&mut p).unwrap(),
            Answer::Value(PathElement::MoveTo(Point::new(10, 20)))
        );
    }

    #[test]
    fn test_new_end_path_takes_no_operands() {
        let mut p = prompt("9\n");
        assert_eq!(
            new_element(&mut p).unwrap(),
            Answer::Value(PathElement::EndPath)
        );
    }

    #[test]
    fn test_add_then_remove_element() {
        // Add: kind 2 (line to) to (1, 2) at index 0; remove index 0; back out.
        let mut p = prompt("1\n2\n1\n2\n0\n3\n0\n\n");
        let mut elements = Vec::new();
        edit_elements(&mut p, &mut elements).unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_edit_replaces_element() {
        // Edit index 0, replacing it with a vertical line to 9; back out.
        let mut p = prompt("2\n0\n4\n9\n\n");
        let mut elements = vec![PathElement::EndPath];
        edit_elements(&mut p, &mut elements).unwrap();
        assert_eq!(elements, vec![PathElement::VerticalLineTo(9)]);
    }
}
