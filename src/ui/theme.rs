use crossterm::style::Color;

/// Design tokens for menu rendering.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All gutter markers must be sourced from this module
pub mod colors {
    use super::Color;

    /// Cursor highlight in single-select menus
    pub const SELECT: Color = Color::Yellow;
    /// Markers and cursor highlight in multi-select menus
    pub const MULTI: Color = Color::Green;
    /// Prompt line
    pub const PROMPT: Color = Color::Cyan;
    /// Refused confirmation notice
    pub const WARNING: Color = Color::Red;
}

/// Gutter markers. Every gutter variant of a mode has the same width.
pub mod markers {
    pub const CURSOR: &str = "> ";
    pub const BLANK: &str = "  ";

    // Selection states (for MultiSelect).
    pub const CHECKED: &str = "[*]";
    pub const UNCHECKED: &str = "[ ]";

    pub const PROMPT_SUFFIX: &str = ":";
}
