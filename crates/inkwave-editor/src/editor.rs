//! Main menu: document lifecycle and the top-level edit loop.

use crate::prompt::{Answer, Prompt};
use crate::shape_menu;
use anyhow::Result;
use drawkit_format::ExportConfig;
use drawkit_model::{Document, Point, Style, Viewport};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use tracing::{info, warn};

/// Run the editor until the user quits.
pub fn run<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<()> {
    let mut document: Option<Document> = None;
    loop {
        prompt.clear_screen()?;
        if let Some(doc) = &document {
            print_document(prompt, doc)?;
        }
        prompt.say("Choose action to perform:\n")?;
        if document.is_none() {
            prompt.say("- Create (1)\n")?;
            prompt.say("- Open (2)\n")?;
        } else {
            prompt.say("- Edit (1)\n")?;
            prompt.say("- Save (2)\n")?;
            prompt.say("- Export to HTML (3)\n")?;
            prompt.say("- Close (4)\n")?;
        }
        let choice = match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(choice) => choice,
        };
        match (choice, document.as_mut()) {
            (1, None) => document = Some(create_document(prompt)?),
            (2, None) => document = open_document(prompt)?,
            (1, Some(doc)) => edit_document(prompt, doc)?,
            (2, Some(doc)) => save_document(prompt, doc)?,
            (3, Some(doc)) => export_html(prompt, doc)?,
            (4, Some(_)) => document = None,
            _ => prompt.error("Enter a valid option.\n")?,
        }
    }
}

fn print_document<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    document: &Document,
) -> Result<()> {
    match drawkit_format::export_to_string(document, &ExportConfig::default()) {
        Ok(text) => prompt.say(&format!("{text}\n\n"))?,
        Err(e) => prompt.error(&format!("Could not display the document: {e}\n"))?,
    }
    Ok(())
}

/// Prompt for the viewport corners of a fresh document. Coordinates are
/// normalized so start is the minimum corner.
fn create_document<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Document> {
    let x1 = prompt
        .ask_int("Viewport start X coordinate (default 0)")?
        .unwrap_or(0);
    let y1 = prompt
        .ask_int("Viewport start Y coordinate (default 0)")?
        .unwrap_or(0);
    let x2 = prompt
        .ask_int("Viewport end X coordinate (default 0)")?
        .unwrap_or(0);
    let y2 = prompt
        .ask_int("Viewport end Y coordinate (default 0)")?
        .unwrap_or(0);
    let viewport = Viewport::new(
        Point::new(x1.min(x2), y1.min(y2)),
        Point::new(x1.max(x2), y1.max(y2)),
    );
    info!(%viewport, "created document");
    Ok(Document::new(viewport))
}

fn open_document<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<Option<Document>> {
    loop {
        let Answer::Value(path) = prompt.ask_string("Select the file to open")? else {
            return Ok(None);
        };
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path, error = %e, "could not open file");
                prompt.error("Enter a valid file path.\n")?;
                continue;
            }
        };
        match drawkit_format::parse(BufReader::new(file)) {
            Ok(document) => {
                info!(path = %path, shapes = document.shapes.len(), "opened document");
                return Ok(Some(document));
            }
            Err(e) => {
                prompt.error(&format!("Could not parse the file: {e}\n"))?;
                prompt.press_enter()?;
            }
        }
    }
}

fn edit_document<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    document: &mut Document,
) -> Result<()> {
    loop {
        prompt.clear_screen()?;
        print_document(prompt, document)?;
        prompt.say("Select action to perform:\n")?;
        prompt.say("- Edit viewport (1)\n")?;
        prompt.say("- Add new shape (2)\n")?;
        prompt.say("- Edit shape (3)\n")?;
        prompt.say("- Remove shape (4)\n")?;
        match prompt.ask_int("")? {
            Answer::Empty => return Ok(()),
            Answer::Value(1) => edit_viewport(prompt, &mut document.viewport)?,
            Answer::Value(2) => {
                shape_menu::add_shape(prompt, &mut document.shapes, &Style::default())?
            }
            Answer::Value(3) => shape_menu::edit_shapes(prompt, &mut document.shapes)?,
            Answer::Value(4) => shape_menu::remove_shape(prompt, &mut document.shapes)?,
            Answer::Value(_) => prompt.error("Enter a valid option.\n")?,
        }
    }
}

/// Edit the four viewport coordinates; skipping one keeps it.
fn edit_viewport<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    viewport: &mut Viewport,
) -> Result<()> {
    prompt.say(&format!("Viewport {viewport}\n\n"))?;
    if let Answer::Value(x) = prompt.ask_int("Viewport start X coordinate")? {
        viewport.start.x = x;
    }
    if let Answer::Value(y) = prompt.ask_int("Viewport start Y coordinate")? {
        viewport.start.y = y;
    }
    if let Answer::Value(x) = prompt.ask_int("Viewport end X coordinate")? {
        viewport.end.x = x;
    }
    if let Answer::Value(y) = prompt.ask_int("Viewport end Y coordinate")? {
        viewport.end.y = y;
    }
    Ok(())
}

/// Prompt for export configuration, starting from the defaults.
fn ask_export_config<R: BufRead, W: Write>(prompt: &mut Prompt<R, W>) -> Result<ExportConfig> {
    let mut config = ExportConfig::default();
    loop {
        match prompt.ask_int(&format!("Tab size (default {})", config.tab_size))? {
            Answer::Empty => break,
            Answer::Value(n) if n > 0 => {
                config.tab_size = n as usize;
                break;
            }
            Answer::Value(_) => prompt.error("Enter an integer greater than zero.\n")?,
        }
    }
    if let Answer::Value(line_break) = prompt.ask_bool("Insert line breaks")? {
        config.line_break = line_break;
    }
    Ok(config)
}

fn save_document<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    document: &Document,
) -> Result<()> {
    loop {
        let Answer::Value(path) = prompt.ask_string("Select the file to save to")? else {
            return Ok(());
        };
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path, error = %e, "could not create file");
                prompt.error("Enter a valid file path.\n")?;
                continue;
            }
        };
        let config = ask_export_config(prompt)?;
        match drawkit_format::export(document, BufWriter::new(file), &config) {
            Ok(()) => {
                info!(path = %path, "saved document");
                prompt.success("Document saved.\n")?;
                prompt.press_enter()?;
                return Ok(());
            }
            Err(e) => {
                prompt.error(&format!("Could not save the document: {e}\n"))?;
                prompt.press_enter()?;
                return Ok(());
            }
        }
    }
}

fn export_html<R: BufRead, W: Write>(
    prompt: &mut Prompt<R, W>,
    document: &Document,
) -> Result<()> {
    loop {
        let Answer::Value(path) = prompt.ask_string("Select the file to export to")? else {
            return Ok(());
        };
        let file = match File::create(&path) {
            Ok(file) => file,
            Err(e) => {
                warn!(path = %path, error = %e, "could not create file");
                prompt.error("Enter a valid file path.\n")?;
                continue;
            }
        };
        match drawkit_html::export_html(document, BufWriter::new(file)) {
            Ok(()) => {
                info!(path = %path, "exported HTML page");
                prompt.success("HTML page exported.\n")?;
            }
            Err(e) => prompt.error(&format!("Could not export the document: {e}\n"))?,
        }
        prompt.press_enter()?;
        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawkit_model::Shape;

    fn prompt(input: &str) -> Prompt<&[u8], Vec<u8>> {
        Prompt::new(input.as_bytes(), Vec::new())
    }

    #[test]
    fn test_create_document_normalizes_corners() {
        let mut p = prompt("50\n60\n-10\n-20\n");
        let document = create_document(&mut p).unwrap();
        assert_eq!(document.viewport.start, Point::new(-10, -20));
        assert_eq!(document.viewport.end, Point::new(50, 60));
    }

    #[test]
    fn test_create_document_defaults_to_zero() {
        let mut p = prompt("\n\n\n\n");
        let document = create_document(&mut p).unwrap();
        assert_eq!(document.viewport, Viewport::default());
    }

    #[test]
    fn test_edit_viewport_keeps_skipped_coordinates() {
        let mut p = prompt("\n5\n\n\n");
        let mut viewport = Viewport::new(Point::new(1, 2), Point::new(3, 4));
        edit_viewport(&mut p, &mut viewport).unwrap();
        assert_eq!(viewport.start, Point::new(1, 5));
        assert_eq!(viewport.end, Point::new(3, 4));
    }

    #[test]
    fn test_ask_export_config() {
        let mut p = prompt("4\nfalse\n");
        let config = ask_export_config(&mut p).unwrap();
        assert_eq!(config.tab_size, 4);
        assert!(!config.line_break);
    }

    #[test]
    fn test_run_create_add_shape_quit() {
        // Create a document with default viewport, add a line from (0, 0)
        // to (3, 4) at index 0, back out of the edit menu, then quit.
        let input = "1\n\n\n\n\n1\n2\n0\n3\n0\n0\n3\n4\n\n\n\n";
        let mut p = prompt(input);
        run(&mut p).unwrap();
    }

    #[test]
    fn test_run_quits_on_empty_input() {
        let mut p = prompt("");
        run(&mut p).unwrap();
    }

    #[test]
    fn test_open_document_roundtrip() {
        let dir = std::env::temp_dir().join("inkwave-editor-test-open");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("doc.svg");
        let document = Document {
            viewport: Viewport::new(Point::new(0, 0), Point::new(10, 10)),
            shapes: vec![Shape::Rectangle(drawkit_model::Rectangle {
                style: Style::default(),
                x: 1,
                y: 2,
                width: 3,
                height: 4,
            })],
        };
        let text = drawkit_format::export_to_string(&document, &ExportConfig::default()).unwrap();
        std::fs::write(&path, text).unwrap();

        let input = format!("{}\n", path.display());
        let mut p = prompt(&input);
        let opened = open_document(&mut p).unwrap().unwrap();
        assert_eq!(opened, document);
    }
}
