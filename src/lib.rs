//! pullycat - interactive terminal selection menus
//!
//! Render a list of options, let the user move with the arrow keys, pick one
//! or several entries, and hand the chosen ids back to the caller.
//!
//! ```no_run
//! use pullycat::{Choice, Menu, MenuOption};
//!
//! let mut menu = Menu::select(
//!     "Choose a colour",
//!     [MenuOption::new("red", "Red"), MenuOption::new("blue", "Blue")],
//! );
//! match menu.display()? {
//!     Choice::Single(id) => println!("picked {id}"),
//!     _ => println!("cancelled"),
//! }
//! # Ok::<(), pullycat::MenuError>(())
//! ```

pub mod error;
pub mod presentation;
pub mod ui;

// Re-exports for convenience
pub use error::{MenuError, MenuResult};
pub use ui::terminal::{CrosstermTerminal, RawSession, Terminal};
pub use ui::widgets::menu::{Choice, Key, Menu, MenuAction, MenuMode, MenuOption, SelectionBounds};
