//! Inkwave - Interactive Drawkit Document Editor
//!
//! Menu-driven terminal editor for the Drawkit textual vector graphics
//! format: create or open a document, edit its viewport, shapes, styles
//! and paths, then save it back or export it as an HTML page.

mod editor;
mod path_menu;
mod prompt;
mod shape_menu;
mod style_menu;

use anyhow::Result;
use drawkit_common::{init_logging, LogConfig};
use prompt::Prompt;

fn main() -> Result<()> {
    let log_config = if std::env::args().any(|arg| arg == "--debug") {
        LogConfig::debug()
    } else {
        LogConfig::default()
    };
    init_logging(log_config);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
    editor::run(&mut prompt)
}
