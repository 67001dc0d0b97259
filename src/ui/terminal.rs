//! Terminal access for interactive menus.
//!
//! The menu talks to the terminal only through the [`Terminal`] trait: raw mode
//! on/off, one blocking key read, and an output sink. [`RawSession`] owns the
//! raw-mode + hidden-cursor state for the duration of one interaction.

use std::io::{self, Stdout, Write};

use crossterm::{cursor, event, QueueableCommand};
use is_terminal::IsTerminal;

use crate::error::{MenuError, MenuResult};
use crate::ui::widgets::menu::{key_from_event, Key};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub is_tty: bool,
    pub supports_color: bool,
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Whether menus are styled when the caller expresses no preference.
    ///
    /// CI logs capture escape codes verbatim, so color is off there even
    /// when the runner allocates a tty.
    pub fn color_by_default(&self) -> bool {
        self.supports_color && !self.is_ci
    }
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), io::stdout().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");

    let no_color = get_env("NO_COLOR").is_some();
    let is_ci = is_ci_env(&get_env);

    let supports_color = is_tty && !term_is_dumb && !no_color;

    TerminalCapabilities {
        is_tty,
        supports_color,
        is_ci,
    }
}

fn is_ci_env(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    const KEYS: &[&str] = &[
        "CI",
        "GITHUB_ACTIONS",
        "JENKINS_HOME",
        "BUILDKITE",
        "CIRCLECI",
        "TRAVIS",
        "TEAMCITY_VERSION",
    ];

    KEYS.iter().any(|k| get_env(k).is_some())
}

/// Input source and output sink used by the menu loop.
pub trait Terminal {
    type Output: Write;

    /// Switch to delivering discrete key events instead of buffered lines
    fn enable_raw_mode(&mut self) -> io::Result<()>;

    /// Restore the mode that was active before [`Terminal::enable_raw_mode`]
    fn disable_raw_mode(&mut self) -> io::Result<()>;

    /// Block until the next key press
    fn read_key(&mut self) -> io::Result<Key>;

    fn output(&mut self) -> &mut Self::Output;
}

/// The process terminal: crossterm for input and raw mode, stdout for output.
pub struct CrosstermTerminal {
    out: Stdout,
}

impl CrosstermTerminal {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for CrosstermTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for CrosstermTerminal {
    type Output = Stdout;

    fn enable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::enable_raw_mode()
    }

    fn disable_raw_mode(&mut self) -> io::Result<()> {
        crossterm::terminal::disable_raw_mode()
    }

    fn read_key(&mut self) -> io::Result<Key> {
        use crossterm::event::{Event, KeyEventKind};

        loop {
            // Resize, focus and paste events carry no menu meaning.
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Ok(key_from_event(key));
            }
        }
    }

    fn output(&mut self) -> &mut Stdout {
        &mut self.out
    }
}

/// Scoped ownership of raw mode and cursor visibility.
///
/// Returned by [`RawSession::enter`] and consumed by [`RawSession::exit`].
/// If the session is dropped without `exit` (early return, panic) the terminal
/// is restored in `Drop`. Restoration runs exactly once either way.
pub struct RawSession<'a, T: Terminal> {
    term: &'a mut T,
    active: bool,
}

impl<'a, T: Terminal> RawSession<'a, T> {
    /// Enable raw mode and hide the cursor.
    pub fn enter(term: &'a mut T) -> MenuResult<Self> {
        term.enable_raw_mode()
            .map_err(MenuError::TerminalUnavailable)?;
        tracing::debug!("raw mode enabled");

        // From here on, Drop undoes raw mode even if hiding the cursor fails.
        let mut session = Self { term, active: true };
        session
            .hide_cursor()
            .map_err(MenuError::TerminalUnavailable)?;
        Ok(session)
    }

    pub fn terminal(&mut self) -> &mut T {
        self.term
    }

    /// Show the cursor and leave raw mode.
    pub fn exit(mut self) -> io::Result<()> {
        self.active = false;
        self.restore()
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        let out = self.term.output();
        out.queue(cursor::Hide)?;
        out.flush()
    }

    fn restore(&mut self) -> io::Result<()> {
        let out = self.term.output();
        let shown = out.queue(cursor::Show).and_then(|w| w.flush());
        let raw = self.term.disable_raw_mode();
        tracing::debug!("raw mode disabled");
        shown.and(raw)
    }
}

impl<T: Terminal> Drop for RawSession<'_, T> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(err) = self.restore() {
                tracing::warn!(error = %err, "failed to restore terminal");
            }
        }
    }
}
