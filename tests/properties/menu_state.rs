//! Property tests for the menu cursor and selection state machine.

use proptest::prelude::*;

use pullycat::{Choice, Key, Menu, MenuAction};

use crate::common::{numbered_options, ScriptedTerminal};

fn action() -> impl Strategy<Value = MenuAction> {
    prop_oneof![
        Just(MenuAction::Up),
        Just(MenuAction::Down),
        Just(MenuAction::Toggle),
    ]
}

fn navigation_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        Just(Key::Up),
        Just(Key::Down),
        Just(Key::Space),
        Just(Key::Other),
    ]
}

fn any_menu(n: usize, kind: u8) -> Menu {
    match kind % 3 {
        0 => Menu::select("Pick", numbered_options(n)),
        1 => Menu::multi_select("Pick", None, None, numbered_options(n)),
        _ => Menu::confirmation("Pick", numbered_options(n)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: pressing Down `n` times returns the cursor to where it started.
    #[test]
    fn property_down_n_times_is_identity(
        n in 1usize..20,
        start in 0usize..20,
        kind in any::<u8>(),
    ) {
        let mut menu = any_menu(n, kind);
        for _ in 0..(start % n) {
            menu.handle_action(MenuAction::Down);
        }
        let before = menu.cursor();

        for _ in 0..n {
            menu.handle_action(MenuAction::Down);
        }

        prop_assert_eq!(menu.cursor(), before);
    }

    /// PROPERTY: Up from the first option lands on the last one.
    #[test]
    fn property_up_from_top_wraps(n in 1usize..20, kind in any::<u8>()) {
        let mut menu = any_menu(n, kind);
        prop_assert_eq!(menu.cursor(), 0);

        menu.handle_action(MenuAction::Up);

        prop_assert_eq!(menu.cursor(), n - 1);
    }

    /// PROPERTY: toggling the same option twice restores its flag.
    #[test]
    fn property_double_toggle_restores_selection(
        n in 1usize..10,
        actions in proptest::collection::vec(action(), 0..30),
    ) {
        let mut menu = Menu::multi_select("Pick", None, None, numbered_options(n));
        for a in actions {
            menu.handle_action(a);
        }
        let before: Vec<bool> = menu.options().iter().map(|o| o.selected).collect();

        menu.handle_action(MenuAction::Toggle);
        menu.handle_action(MenuAction::Toggle);

        let after: Vec<bool> = menu.options().iter().map(|o| o.selected).collect();
        prop_assert_eq!(before, after);
    }

    /// PROPERTY: the cursor always stays within the option list.
    #[test]
    fn property_cursor_stays_in_bounds(
        n in 1usize..10,
        kind in any::<u8>(),
        actions in proptest::collection::vec(action(), 0..50),
    ) {
        let mut menu = any_menu(n, kind);
        for a in actions {
            menu.handle_action(a);
            prop_assert!(menu.cursor() < n);
        }
    }

    /// PROPERTY: rendering twice without a state change gives identical frames.
    #[test]
    fn property_render_is_idempotent(
        n in 1usize..10,
        kind in any::<u8>(),
        color in any::<bool>(),
        actions in proptest::collection::vec(action(), 0..30),
    ) {
        let mut menu = any_menu(n, kind);
        for a in actions {
            menu.handle_action(a);
        }

        prop_assert_eq!(menu.frame_lines(color), menu.frame_lines(color));
        prop_assert_eq!(menu.frame_lines(color).len(), n);
    }

    /// PROPERTY: Escape after any navigation cancels and restores the terminal.
    #[test]
    fn property_escape_always_cancels(
        n in 1usize..8,
        kind in any::<u8>(),
        keys in proptest::collection::vec(navigation_key(), 0..30),
    ) {
        let mut menu = any_menu(n, kind);
        let mut script = keys;
        script.push(Key::Escape);
        let mut term = ScriptedTerminal::new(script);

        let choice = menu.display_on(&mut term, false).unwrap();

        prop_assert_eq!(choice, Choice::Cancelled);
        prop_assert!(!term.raw);
        prop_assert_eq!(term.raw_disables, 1);
        prop_assert_eq!(term.keys_left(), 0);
    }
}
