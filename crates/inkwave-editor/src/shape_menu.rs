//! Shape list and per-shape editing menus.

use crate::path_menu;
use crate::prompt::{Answer, Prompt};
use crate::style_menu;
use anyhow::Result;
use drawkit_model::{
    list, Ellipse, Group, Line, Multiline, Path, PathElement, Point, Polygon, Rectangle, Shape,
    Style,
};
use std::io::{BufRead, Write};

fn print_shapes<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, shapes: &[Shape]) -> Result<()> {
    prompt.say("Shapes [\n")?;
    for (i, shape) in shapes.iter().enumerate() {
        prompt.say(&format!("  ({i}) {shape}\n"))?;
    }
    prompt.say("]\n\n")?;
    Ok(())
}

/// Ask for the kind of a new shape and edit it into shape, starting from
/// the inherited style.
fn new_shape<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    inherited: &Style,
) -> Result<Answer<Shape>> {
    let style = *inherited;
    loop {
        prompt.clear_screen()?;
        prompt.say("Select the shape kind:\n")?;
        prompt.say("- Ellipse (1)\n")?;
        prompt.say("- Rectangle (2)\n")?;
        prompt.say("- Line (3)\n")?;
        prompt.say("- Multiline (4)\n")?;
        prompt.say("- Polygon (5)\n")?;
        prompt.say("- Path (6)\n")?;
        prompt.say("- Group (7)\n")?;
        let kind = match prompt.ask_int("")? {
            Answer::Empty => return Ok(Answer::Empty),
            Answer::Value(kind) => kind,
        };
        let mut shape = match kind {
            1 => Shape::Ellipse(Ellipse {
                style,
                cx: 0,
                cy: 0,
                rx: 1,
                ry: 1,
            }),
            2 => Shape::Rectangle(Rectangle {
                style,
                x: 0,
                y: 0,
                width: 1,
                height: 1,
            }),
            3 => Shape::Line(Line {
                style,
                start: Point::new(0, 0),
                end: Point::new(0, 0),
            }),
            4 => Shape::Multiline(Multiline {
                style,
                points: vec![Point::new(0, 0)],
            }),
            5 => Shape::Polygon(Polygon {
                style,
                points: vec![Point::new(0, 0)],
            }),
            6 => Shape::Path(Path {
                style,
                elements: vec![PathElement::EndPath],
            }),
            7 => Shape::Group(Group {
                style,
                shapes: Vec::new(),
            }),
            _ => {
                prompt.error("Enter a valid option.\n")?;
                continue;
            }
        };
        edit_geometry(prompt, &mut shape)?;
        return Ok(Answer::Value(shape));
    }
}

/// Add a new shape at a prompted index.
pub fn add_shape<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    shapes: &mut Vec<Shape>,
    inherited: &Style,
) -> Result<()> {
    prompt.clear_screen()?;
    print_shapes(prompt, shapes)?;
    let Answer::Value(index) = prompt.ask_index("Select the index for the new shape", shapes.len())?
    else {
        return Ok(());
    };
    let Answer::Value(shape) = new_shape(prompt, inherited)? else {
        return Ok(());
    };
    if !list::insert_at(shapes, index, shape) {
        prompt.error("Select a valid index.\n")?;
    }
    Ok(())
}

/// Remove the shape at a prompted index.
pub fn remove_shape<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    shapes: &mut Vec<Shape>,
) -> Result<()> {
    if shapes.is_empty() {
        prompt.error("There is no shape to remove.\n")?;
        prompt.press_enter()?;
        return Ok(());
    }
    prompt.clear_screen()?;
    print_shapes(prompt, shapes)?;
    if let Answer::Value(index) =
        prompt.ask_index("Select the shape to remove", shapes.len() - 1)?
    {
        list::remove_at(shapes, index);
    }
    Ok(())
}

/// Edit the shape at a prompted index.
pub fn edit_shapes<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    shapes: &mut [Shape],
) -> Result<()> {
    if shapes.is_empty() {
        prompt.error("There is no shape to edit.\n")?;
        prompt.press_enter()?;
        return Ok(());
    }
    prompt.clear_screen()?;
    print_shapes(prompt, shapes)?;
    if let Answer::Value(index) = prompt.ask_index("Select the shape to edit", shapes.len() - 1)? {
        edit_shape(prompt, &mut shapes[index])?;
    }
    Ok(())
}

/// Top-level editor for one shape: styles or geometry.
pub fn edit_shape<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    shape: &mut Shape,
) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        prompt.say(&format!("{shape}\n\n"))?;
        prompt.say("Select action to perform:\n")?;
        prompt.say("- Edit styles (1)\n")?;
        prompt.say("- Edit shape (2)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => style_menu::edit_style(prompt, shape.style_mut())?,
            Answer::Value(2) => edit_geometry(prompt, shape)?,
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

fn edit_geometry<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    shape: &mut Shape,
) -> Result<()> {
    match shape {
        Shape::Ellipse(e) => {
            ask_into(prompt, "Select the ellipse's X coordinate", &mut e.cx)?;
            ask_into(prompt, "Select the ellipse's Y coordinate", &mut e.cy)?;
            ask_positive_into(prompt, "Select the ellipse's width", &mut e.rx)?;
            ask_positive_into(prompt, "Select the ellipse's height", &mut e.ry)?;
        }
        Shape::Rectangle(r) => {
            ask_into(prompt, "Select the rectangle's X coordinate", &mut r.x)?;
            ask_into(prompt, "Select the rectangle's Y coordinate", &mut r.y)?;
            ask_positive_into(prompt, "Select the rectangle's width", &mut r.width)?;
            ask_positive_into(prompt, "Select the rectangle's height", &mut r.height)?;
        }
        Shape::Line(l) => {
            if let Answer::Value(point) = prompt.ask_point("Start point")? {
                l.start = point;
            }
            if let Answer::Value(point) = prompt.ask_point("End point")? {
                l.end = point;
            }
        }
        Shape::Multiline(m) => edit_points(prompt, &mut m.points)?,
        Shape::Polygon(p) => edit_points(prompt, &mut p.points)?,
        Shape::Path(p) => path_menu::edit_elements(prompt, &mut p.elements)?,
        Shape::Group(g) => edit_group(prompt, g)?,
    }
    Ok(())
}

fn edit_group<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>, group: &mut Group) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        print_shapes(prompt, &group.shapes)?;
        prompt.say("Select action to perform:\n")?;
        prompt.say("- Add new shape (1)\n")?;
        prompt.say("- Edit shape (2)\n")?;
        prompt.say("- Remove shape (3)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => {
                // Children start from the group's style, as in the format.
                let inherited = group.style;
                add_shape(prompt, &mut group.shapes, &inherited)?;
            }
            Answer::Value(2) => edit_shapes(prompt, &mut group.shapes)?,
            Answer::Value(3) => remove_shape(prompt, &mut group.shapes)?,
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

fn edit_points<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    points: &mut Vec<Point>,
) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        prompt.say("Points [ ")?;
        for (i, point) in points.iter().enumerate() {
            prompt.say(&format!("({i}) {point} "))?;
        }
        prompt.say("]\n\n")?;
        prompt.say("Select action to perform:\n")?;
        prompt.say("- Add point (1)\n")?;
        prompt.say("- Edit point (2)\n")?;
        prompt.say("- Remove point (3)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => {
                let Answer::Value(point) = prompt.ask_point("New point")? else {
                    continue;
                };
                if let Answer::Value(index) =
                    prompt.ask_index("Select where to insert", points.len())?
                {
                    list::insert_at(points, index, point);
                }
            }
            Answer::Value(2) => {
                if points.is_empty() {
                    prompt.error("There is no point to edit.\n")?;
                    prompt.press_enter()?;
                    continue;
                }
                let Answer::Value(index) =
                    prompt.ask_index("Select the point to edit", points.len() - 1)?
                else {
                    continue;
                };
                if let Answer::Value(point) = prompt.ask_point("New value")? {
                    points[index] = point;
                }
            }
            Answer::Value(3) => {
                if points.is_empty() {
                    prompt.error("There is no point to remove.\n")?;
                    prompt.press_enter()?;
                    continue;
                }
                if let Answer::Value(index) =
                    prompt.ask_index("Select the point to remove", points.len() - 1)?
                {
                    list::remove_at(points, index);
                }
            }
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

/// Ask for an integer, keeping the current value when skipped.
fn ask_into<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    text: &str,
    value: &mut i32,
) -> Result<()> {
    if let Answer::Value(new) = prompt.ask_int(text)? {
        *value = new;
    }
    Ok(())
}

/// Like [`ask_into`] but only accepts strictly positive values.
fn ask_positive_into<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    text: &str,
    value: &mut i32,
) -> Result<()> {
    loop {
        match prompt.ask_int(text)? {
            Answer::Empty => return Ok(()),
            Answer::Value(new) if new > 0 => {
                *value = new;
                return Ok(());
            }
            Answer::Value(_) => prompt.error("Enter an integer greater than zero.\n")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_add_rectangle_to_empty_list() {
        // Index 0, kind 2, then x/y/width/height.
        let mut p = prompt("0\n2\n5\n6\n10\n20\n");
        let mut shapes = Vec::new();
        add_shape(&mut p, &mut shapes, &Style::default()).unwrap();
        let Shape::Rectangle(ref r) = shapes[0] else {
            panic!("expected rectangle");
        };
        assert_eq!((r.x, r.y, r.width, r.height), (5, 6, 10, 20));
    }

    #[test]
    fn test_new_shape_inherits_style() {
        let inherited = Style {
            translate: Point::new(9, 9),
            ..Style::default()
        };
        // Kind 3 (line), then both points skipped.
        let mut p = prompt("3\n\n\n");
        let Answer::Value(shape) = new_shape(&mut p, &inherited).unwrap() else {
            panic!("expected a shape");
        };
        assert_eq!(shape.style().translate, Point::new(9, 9));
    }

    #[test]
    fn test_positive_dimension_is_enforced() {
        // Width 0 and -4 rejected, then 3 accepted.
        let mut p = prompt("1\n2\n0\n-4\n3\n7\n");
        let mut shape = Shape::Ellipse(Ellipse {
            style: Style::default(),
            cx: 0,
            cy: 0,
            rx: 1,
            ry: 1,
        });
        edit_geometry(&mut p, &mut shape).unwrap();
        let Shape::Ellipse(ref e) = shape else {
            panic!("expected ellipse");
        };
        assert_eq!((e.cx, e.cy, e.rx, e.ry), (1, 2, 3, 7));
    }

    #[test]
    fn test_remove_shape_out_of_range_reprompts() {
        // 5 is out of range, 0 removes.
        let mut p = prompt("5\n0\n");
        let mut shapes = vec![Shape::Line(Line {
            style: Style::default(),
            start: Point::new(0, 0),
            end: Point::new(1, 1),
        })];
        remove_shape(&mut p, &mut shapes).unwrap();
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_skipping_keeps_current_geometry() {
        let mut p = prompt("\n\n\n\n");
        let mut shape = Shape::Rectangle(Rectangle {
            style: Style::default(),
            x: 1,
            y: 2,
            width: 3,
            height: 4,
        });
        edit_geometry(&mut p, &mut shape).unwrap();
        let Shape::Rectangle(ref r) = shape else {
            panic!("expected rectangle");
        };
        assert_eq!((r.x, r.y, r.width, r.height), (1, 2, 3, 4));
    }
}
