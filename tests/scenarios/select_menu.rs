//! Scenario: Single-select and confirmation menus
//!
//! Journey: A program asks the user to pick one colour.
//!
//! Success Criteria:
//! - Enter returns the id under the cursor
//! - Escape returns Cancelled
//! - Labels are shown, ids never are

use pullycat::{Choice, Key, Menu, MenuOption};

use crate::common::*;

/// SCENARIO: Down then Enter picks the second option
#[test]
fn scenario_select_down_enter_returns_second_id() {
    let mut menu = Menu::select(
        "Choose a colour",
        [MenuOption::new("red", "Red"), MenuOption::new("blue", "Blue")],
    );
    let mut term = ScriptedTerminal::new([Key::Down, Key::Enter]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Single("blue".to_string()));
    assert_eq!(menu.cursor(), 1);
}

/// SCENARIO: Up from the first option wraps to the last one
#[test]
fn scenario_select_up_wraps_to_last() {
    let mut menu = Menu::select("Choose a colour", colour_options());
    let mut term = ScriptedTerminal::new([Key::Up, Key::Enter]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Single("green".to_string()));
}

/// SCENARIO: Escape leaves without a choice
#[test]
fn scenario_select_escape_cancels() {
    let mut menu = Menu::select("Choose a colour", colour_options());
    let mut term = ScriptedTerminal::new([Key::Down, Key::Down, Key::Escape]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Cancelled);
    assert!(choice.ids().is_empty());
}

/// SCENARIO: Space does nothing in a single-select menu
#[test]
fn scenario_select_space_has_no_effect() {
    let mut menu = Menu::select("Choose a colour", colour_options());
    let mut term = ScriptedTerminal::new([Key::Space, Key::Space, Key::Enter]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Single("red".to_string()));
    assert_eq!(menu.selected_count(), 0);
}

/// SCENARIO: Labels are printed, ids are not
#[test]
fn scenario_select_shows_labels_not_ids() {
    let mut menu = Menu::select(
        "Pick a region",
        [
            MenuOption::new("eu-west-1", "Ireland"),
            MenuOption::new("us-east-1", "Virginia"),
        ],
    );
    let mut term = ScriptedTerminal::new([Key::Enter]);
    menu.display_on(&mut term, false).unwrap();

    let out = term.output_str();
    assert!(out.contains("Pick a region:"));
    assert!(out.contains("Ireland"));
    assert!(out.contains("Virginia"));
    assert!(!out.contains("eu-west-1"));
    assert!(!out.contains("us-east-1"));
}

/// SCENARIO: Confirmation menu returns the id under the cursor
#[test]
fn scenario_confirmation_returns_cursor_id() {
    let mut menu = Menu::confirmation(
        "Overwrite existing file",
        [MenuOption::new("yes", "Yes"), MenuOption::new("no", "No")],
    );
    let mut term = ScriptedTerminal::new([Key::Down, Key::Enter]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Single("no".to_string()));
    assert!(!term.output_str().contains("> "), "no cursor gutter");
}

/// SCENARIO: Options added one by one keep their order
#[test]
fn scenario_add_option_builds_menu_incrementally() {
    let mut menu = Menu::select("Choose a colour", Vec::new());
    menu.add_option("red", "Red")
        .add_option("blue", "Blue")
        .add_option("green", "Green");
    let mut term = ScriptedTerminal::new([Key::Down, Key::Down, Key::Enter]);

    let choice = menu.display_on(&mut term, false).unwrap();

    assert_eq!(choice, Choice::Single("green".to_string()));
}
