//! Terminal rendering for markdown output.
//!
//! Rich output styles inline markdown through termimad; plain mode
//! prints the markdown untouched for piping and tests.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer with a rich and a plain mode.
pub struct TerminalRenderer {
    skin: Option<MadSkin>,
}

impl TerminalRenderer {
    /// Create a renderer; `rich_enabled = false` yields plain text.
    pub fn new(rich_enabled: bool) -> Self {
        let skin = rich_enabled.then(|| {
            let mut skin = MadSkin::default();
            skin.set_headers_fg(Color::Cyan);
            skin.bold.set_fg(Color::Yellow);
            skin.italic.set_fg(Color::Magenta);
            skin.inline_code.set_bg(Color::AnsiValue(238));
            skin
        });
        Self { skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        match &self.skin {
            Some(skin) => {
                // Headers keep their hash prefix so week and day
                // structure survives in scrollback.
                for line in markdown.lines() {
                    if line.starts_with('#') {
                        println!("\x1b[36m{line}\x1b[0m");
                    } else {
                        skin.print_inline(line);
                        println!();
                    }
                }
            }
            None => print!("{markdown}"),
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
