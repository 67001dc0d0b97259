/// A single entry in a menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    /// Identifier handed back to the caller, never displayed
    pub id: String,
    /// Display label
    pub text: String,
    /// Selection flag (only meaningful in multi-select menus)
    pub selected: bool,
}

impl MenuOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            selected: false,
        }
    }

    /// Start the option in the given selection state
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

impl<I: Into<String>, T: Into<String>> From<(I, T)> for MenuOption {
    fn from((id, text): (I, T)) -> Self {
        Self::new(id, text)
    }
}
