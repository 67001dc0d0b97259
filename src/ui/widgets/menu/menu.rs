//! Menu state management and action handling.
//!
//! This module contains the Menu component: construction, the cursor and
//! selection state machine, and frame line generation for rendering.

use tracing::{debug, trace};

use crate::error::{MenuError, MenuResult};

use super::option::MenuOption;
use super::render::{render_notice, RowRenderer};

/// How many options a menu lets the user pick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    /// Exactly one option, marked with a cursor gutter
    Select,
    /// Any number of options within [`SelectionBounds`]
    MultiSelect,
    /// Exactly one option, listed without decoration
    Confirmation,
}

/// Bounds on how many options a multi-select menu accepts.
///
/// `None` on either side means that side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionBounds {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl SelectionBounds {
    pub const fn new(min: Option<usize>, max: Option<usize>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self::new(None, None)
    }

    pub const fn exactly_one() -> Self {
        Self::new(Some(1), Some(1))
    }

    /// Build bounds from signed values where any negative value means unbounded
    pub fn from_signed(min: i64, max: i64) -> Self {
        Self::new(usize::try_from(min).ok(), usize::try_from(max).ok())
    }

    pub fn contains(&self, count: usize) -> bool {
        self.min.map_or(true, |min| count >= min) && self.max.map_or(true, |max| count <= max)
    }

    /// Check that the bounds can be met by a menu with `available` options
    pub fn validate(&self, available: usize) -> MenuResult<()> {
        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(MenuError::InvalidBounds { min, max });
            }
        }
        if let Some(min) = self.min {
            if min > available {
                return Err(MenuError::UnsatisfiableBounds { min, available });
            }
        }
        Ok(())
    }

    /// Explain why `count` is out of bounds, if it is
    fn violation(&self, count: usize) -> Option<String> {
        let plural = |n: usize| if n == 1 { "option" } else { "options" };
        match (self.min, self.max) {
            (Some(min), _) if count < min => {
                Some(format!("Select at least {} {}", min, plural(min)))
            }
            (_, Some(max)) if count > max => {
                Some(format!("Select at most {} {}", max, plural(max)))
            }
            _ => None,
        }
    }
}

/// Result of a completed menu interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// The user pressed Escape
    Cancelled,
    /// Id of the option under the cursor (Select / Confirmation)
    Single(String),
    /// Ids of all selected options in display order (MultiSelect)
    Multiple(Vec<String>),
}

impl Choice {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Choice::Cancelled)
    }

    /// Chosen ids regardless of mode; empty when cancelled
    pub fn ids(&self) -> Vec<&str> {
        match self {
            Choice::Cancelled => Vec::new(),
            Choice::Single(id) => vec![id.as_str()],
            Choice::Multiple(ids) => ids.iter().map(String::as_str).collect(),
        }
    }
}

/// Menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Move cursor up, wrapping to the last option
    Up,
    /// Move cursor down, wrapping to the first option
    Down,
    /// Toggle selection of the option under the cursor
    Toggle,
    /// Accept the current selection
    Confirm,
    /// Leave without a selection
    Cancel,
}

/// What the input loop should do after an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed
    Continue,
    /// State changed, redraw the option list
    Redraw,
    /// Interaction finished
    Done(Choice),
}

/// Interactive selection menu
#[derive(Debug, Clone)]
pub struct Menu {
    mode: MenuMode,
    prompt: String,
    options: Vec<MenuOption>,
    cursor: usize,
    bounds: SelectionBounds,
    renderer: RowRenderer,
    notice: Option<String>,
}

impl Menu {
    fn with_mode(
        mode: MenuMode,
        prompt: impl Into<String>,
        bounds: SelectionBounds,
        options: impl IntoIterator<Item = MenuOption>,
    ) -> Self {
        Self {
            mode,
            prompt: prompt.into(),
            options: options.into_iter().collect(),
            cursor: 0,
            bounds,
            renderer: RowRenderer::for_mode(mode),
            notice: None,
        }
    }

    /// Create a single-select menu
    pub fn select(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = MenuOption>,
    ) -> Self {
        Self::with_mode(
            MenuMode::Select,
            prompt,
            SelectionBounds::exactly_one(),
            options,
        )
    }

    /// Create a multi-select menu accepting between `min` and `max` selections
    pub fn multi_select(
        prompt: impl Into<String>,
        min: Option<usize>,
        max: Option<usize>,
        options: impl IntoIterator<Item = MenuOption>,
    ) -> Self {
        Self::with_mode(
            MenuMode::MultiSelect,
            prompt,
            SelectionBounds::new(min, max),
            options,
        )
    }

    /// Create a confirmation menu (plain listing, exactly one choice)
    pub fn confirmation(
        prompt: impl Into<String>,
        options: impl IntoIterator<Item = MenuOption>,
    ) -> Self {
        Self::with_mode(
            MenuMode::Confirmation,
            prompt,
            SelectionBounds::exactly_one(),
            options,
        )
    }

    /// Append an unselected option
    pub fn add_option(&mut self, id: impl Into<String>, text: impl Into<String>) -> &mut Self {
        self.options.push(MenuOption::new(id, text));
        self
    }

    /// Builder form of [`Menu::add_option`]
    pub fn with_option(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.add_option(id, text);
        self
    }

    pub fn mode(&self) -> MenuMode {
        self.mode
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    /// Get current cursor position
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn bounds(&self) -> SelectionBounds {
        self.bounds
    }

    /// Message shown below the options after a refused confirm
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selected_ids(&self) -> Vec<String> {
        self.options
            .iter()
            .filter(|o| o.selected)
            .map(|o| o.id.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.options.iter().filter(|o| o.selected).count()
    }

    /// Check preconditions for displaying the menu
    pub fn validate(&self) -> MenuResult<()> {
        if self.options.is_empty() {
            return Err(MenuError::NoOptions);
        }
        if self.mode == MenuMode::MultiSelect {
            self.bounds.validate(self.options.len())?;
        }
        Ok(())
    }

    /// Handle a menu action
    pub fn handle_action(&mut self, action: MenuAction) -> Outcome {
        let n = self.options.len();
        if n == 0 {
            return match action {
                MenuAction::Cancel => Outcome::Done(Choice::Cancelled),
                _ => Outcome::Continue,
            };
        }

        let had_notice = self.notice.take().is_some();
        let outcome = match action {
            MenuAction::Cancel => Outcome::Done(Choice::Cancelled),
            MenuAction::Up => {
                self.cursor = (self.cursor + n - 1) % n;
                Outcome::Redraw
            }
            MenuAction::Down => {
                self.cursor = (self.cursor + 1) % n;
                Outcome::Redraw
            }
            MenuAction::Toggle => match self.mode {
                MenuMode::MultiSelect => {
                    self.options[self.cursor].toggle();
                    Outcome::Redraw
                }
                MenuMode::Select | MenuMode::Confirmation => Outcome::Continue,
            },
            MenuAction::Confirm => self.confirm(),
        };
        trace!(?action, cursor = self.cursor, "menu action handled");

        match outcome {
            Outcome::Continue if had_notice => Outcome::Redraw,
            other => other,
        }
    }

    fn confirm(&mut self) -> Outcome {
        match self.mode {
            MenuMode::Select | MenuMode::Confirmation => {
                Outcome::Done(Choice::Single(self.options[self.cursor].id.clone()))
            }
            MenuMode::MultiSelect => {
                let count = self.selected_count();
                match self.bounds.violation(count) {
                    Some(message) => {
                        debug!(count, bounds = ?self.bounds, "confirm refused");
                        self.notice = Some(message);
                        Outcome::Redraw
                    }
                    None => Outcome::Done(Choice::Multiple(self.selected_ids())),
                }
            }
        }
    }

    /// Lines of the option list (plus any notice), without line terminators
    pub fn frame_lines(&self, supports_color: bool) -> Vec<String> {
        let mut lines: Vec<String> = self
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| self.renderer.render_row(option, i == self.cursor, supports_color))
            .collect();

        if let Some(notice) = &self.notice {
            lines.push(render_notice(notice, supports_color));
        }

        lines
    }
}
