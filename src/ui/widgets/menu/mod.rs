//! Menu Widget
//!
//! A flat option list for picking one entry (select, confirmation) or several
//! entries (multi-select), redrawn in place as the user moves the cursor.
//!
//! # Module Structure
//!
//! - `option` - MenuOption data structure
//! - `menu` - Menu state management and action handling
//! - `render` - Row rendering and redraw-in-place
//! - `input` - Keyboard input handling and interactive loop

mod input;
mod menu;
mod option;
mod render;

pub use input::{key_from_event, Key};
pub use menu::{Choice, Menu, MenuAction, MenuMode, Outcome, SelectionBounds};
pub use option::MenuOption;
pub use render::{render_notice, render_prompt, MenuFrame, RowRenderer};
