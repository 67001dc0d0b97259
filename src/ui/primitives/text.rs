use std::fmt;

use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticColor {
    Select,
    Multi,
    Prompt,
    Warning,
}

/// Text with an optional accent color and bold attribute.
///
/// Styling is plain text insertion: [`ColoredText::render`] returns a `String`
/// with embedded ANSI codes that composes with ordinary writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColoredText {
    text: String,
    color: Option<SemanticColor>,
    bold: bool,
}

impl ColoredText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn select(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Select)
    }

    pub fn multi(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Multi)
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Prompt)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::plain(text).with_color(SemanticColor::Warning)
    }

    pub fn with_color(mut self, color: SemanticColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn render(&self, supports_color: bool) -> String {
        if !supports_color {
            return self.text.clone();
        }

        let Some(color) = self.color else {
            if self.bold {
                return format!("{}", self.text.as_str().bold());
            }
            return self.text.clone();
        };

        let mut styled = match color {
            SemanticColor::Select => self.text.as_str().with(theme::colors::SELECT),
            SemanticColor::Multi => self.text.as_str().with(theme::colors::MULTI),
            SemanticColor::Prompt => self.text.as_str().with(theme::colors::PROMPT),
            SemanticColor::Warning => self.text.as_str().with(theme::colors::WARNING),
        };

        if self.bold {
            styled = styled.bold();
        }

        format!("{}", styled)
    }
}

impl fmt::Display for ColoredText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Wrap `text` in the styling codes for `color`, optionally bold.
pub fn style(text: &str, color: SemanticColor, bold: bool, supports_color: bool) -> String {
    let mut t = ColoredText::plain(text).with_color(color);
    if bold {
        t = t.bold();
    }
    t.render(supports_color)
}
