//! Terminal rendering for menus.
//!
//! Row and prompt renderers produce strings; [`MenuFrame`] writes them and
//! repositions the cursor so each redraw overwrites the previous one in place.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use crate::ui::primitives::text::ColoredText;
use crate::ui::theme::markers;

use super::menu::MenuMode;
use super::option::MenuOption;

/// Per-mode row decoration, chosen once when the menu is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowRenderer {
    /// `> ` gutter on the cursor row (Select)
    Cursor,
    /// `[*]` / `[ ]` gutter from the selection flag (MultiSelect)
    Checkbox,
    /// No decoration (Confirmation)
    Plain,
}

impl RowRenderer {
    pub fn for_mode(mode: MenuMode) -> Self {
        match mode {
            MenuMode::Select => RowRenderer::Cursor,
            MenuMode::MultiSelect => RowRenderer::Checkbox,
            MenuMode::Confirmation => RowRenderer::Plain,
        }
    }

    /// Render a single option row: gutter, one space, label
    pub fn render_row(&self, option: &MenuOption, is_cursor: bool, supports_color: bool) -> String {
        let (gutter, label) = match self {
            RowRenderer::Cursor if is_cursor => (
                ColoredText::select(markers::CURSOR).render(supports_color),
                ColoredText::select(option.text.as_str()).render(supports_color),
            ),
            RowRenderer::Cursor => (markers::BLANK.to_string(), option.text.clone()),
            RowRenderer::Checkbox => {
                let gutter = if option.selected {
                    ColoredText::multi(markers::CHECKED).render(supports_color)
                } else {
                    markers::UNCHECKED.to_string()
                };
                let label = if is_cursor {
                    ColoredText::multi(option.text.as_str()).render(supports_color)
                } else {
                    option.text.clone()
                };
                (gutter, label)
            }
            RowRenderer::Plain => (markers::BLANK.to_string(), option.text.clone()),
        };

        format!("{} {}", gutter, label)
    }
}

/// Render the prompt line (bold, prompt color, trailing colon)
pub fn render_prompt(prompt: &str, supports_color: bool) -> String {
    format!(
        "{}{}",
        ColoredText::prompt(prompt).bold().render(supports_color),
        ColoredText::prompt(markers::PROMPT_SUFFIX).render(supports_color)
    )
}

/// Render the notice shown after a refused confirmation
pub fn render_notice(notice: &str, supports_color: bool) -> String {
    ColoredText::warning(notice).render(supports_color)
}

/// Redraw-in-place writer for the option list.
///
/// The last line is written without a line break, so moving up
/// `lines - 1` rows lands on the first line of the previous frame.
#[derive(Debug, Default)]
pub struct MenuFrame {
    last_lines: usize,
}

impl MenuFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines written by the last draw
    pub fn line_count(&self) -> usize {
        self.last_lines
    }

    pub fn draw(&mut self, out: &mut impl Write, lines: &[String]) -> io::Result<()> {
        // ESC[0A still moves one row on most terminals.
        if self.last_lines > 1 {
            let up = u16::try_from(self.last_lines - 1).unwrap_or(u16::MAX);
            out.queue(cursor::MoveUp(up))?;
        }

        for (i, line) in lines.iter().enumerate() {
            out.write_all(b"\r")?;
            out.write_all(line.as_bytes())?;
            out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
            if i + 1 < lines.len() {
                out.write_all(b"\r\n")?;
            }
        }

        if lines.len() < self.last_lines {
            out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        out.flush()?;
        self.last_lines = lines.len();
        Ok(())
    }
}
