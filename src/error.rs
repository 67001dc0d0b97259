//! Error types for pullycat
//!
//! Uses `thiserror` for library errors. Cancelling a menu is not an error;
//! see [`crate::Choice::Cancelled`].

use std::io;
use thiserror::Error;

/// Result type alias for menu operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menu operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// The terminal could not be switched into raw mode
    #[error("cannot acquire terminal: {0}")]
    TerminalUnavailable(#[source] io::Error),

    /// A menu was displayed without any options
    #[error("menu has no options to display")]
    NoOptions,

    /// Both selection bounds are set but the minimum exceeds the maximum
    #[error("invalid selection bounds: min {min} is greater than max {max}")]
    InvalidBounds { min: usize, max: usize },

    /// The minimum selection count can never be reached
    #[error("selection minimum {min} exceeds the {available} available options")]
    UnsatisfiableBounds { min: usize, available: usize },

    /// IO error while drawing or reading keys
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl MenuError {
    /// Whether the error was raised before the terminal was touched
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            MenuError::NoOptions
                | MenuError::InvalidBounds { .. }
                | MenuError::UnsatisfiableBounds { .. }
        )
    }
}
