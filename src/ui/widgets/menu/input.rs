//! Keyboard input handling and interactive loop.
//!
//! This module maps keyboard events to menu actions and runs the blocking
//! display loop against a [`Terminal`].

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, trace};

use crate::error::MenuResult;
use crate::ui::terminal::{detect_capabilities, CrosstermTerminal, RawSession, Terminal};

use super::menu::{Choice, Menu, MenuAction, Outcome};
use super::render::{render_prompt, MenuFrame};

/// Key categories the menu understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Space,
    Enter,
    Escape,
    /// Anything else; ignored by the loop
    Other,
}

impl Key {
    pub fn action(self) -> Option<MenuAction> {
        match self {
            Key::Up => Some(MenuAction::Up),
            Key::Down => Some(MenuAction::Down),
            Key::Space => Some(MenuAction::Toggle),
            Key::Enter => Some(MenuAction::Confirm),
            Key::Escape => Some(MenuAction::Cancel),
            Key::Other => None,
        }
    }
}

/// Convert a keyboard event to a menu key
pub fn key_from_event(key: KeyEvent) -> Key {
    // Raw mode swallows SIGINT, so Ctrl+C has to cancel explicitly.
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Key::Escape,
            _ => Key::Other,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Key::Up,
        KeyCode::Down | KeyCode::Char('j') => Key::Down,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

impl Menu {
    /// Display the menu on the process terminal and wait for the user.
    ///
    /// Returns [`Choice::Cancelled`] when the user presses Escape.
    pub fn display(&mut self) -> MenuResult<Choice> {
        let caps = detect_capabilities();
        debug!(?caps, "detected terminal capabilities");
        self.display_on(&mut CrosstermTerminal::new(), caps.color_by_default())
    }

    /// Display the menu on `term`.
    ///
    /// Preconditions are checked before the terminal is touched. Raw mode is
    /// released on every return path.
    pub fn display_on<T: Terminal>(
        &mut self,
        term: &mut T,
        supports_color: bool,
    ) -> MenuResult<Choice> {
        self.validate()?;

        let mut session = RawSession::enter(term)?;
        let choice = self.run_loop(session.terminal(), supports_color)?;
        session.exit()?;

        debug!(?choice, "menu finished");
        Ok(choice)
    }

    fn run_loop<T: Terminal>(&mut self, term: &mut T, supports_color: bool) -> MenuResult<Choice> {
        let mut frame = MenuFrame::new();

        let out = term.output();
        write!(out, "{}\r\n", render_prompt(self.prompt(), supports_color))?;
        frame.draw(out, &self.frame_lines(supports_color))?;

        let choice = loop {
            let key = term.read_key()?;
            trace!(?key, "key pressed");

            let Some(action) = key.action() else {
                continue;
            };

            match self.handle_action(action) {
                Outcome::Continue => {}
                Outcome::Redraw => frame.draw(term.output(), &self.frame_lines(supports_color))?,
                Outcome::Done(choice) => break choice,
            }
        };

        // Drop a notice left over from a refused confirm
        let lines = self.frame_lines(supports_color);
        if lines.len() != frame.line_count() {
            frame.draw(term.output(), &lines)?;
        }

        let out = term.output();
        out.write_all(b"\r\n")?;
        out.flush()?;
        Ok(choice)
    }
}
