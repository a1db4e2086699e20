//! Property tests for input decoding and movement

use mazepad_core::game::{GamePhase, GameState, Outcome};
use mazepad_core::input::{is_pressed, ButtonMask, LogicalButton, MaskFilter, BUTTON_MAP};
use mazepad_core::maze::{Cell, Maze, REFERENCE_LAYOUT};
use proptest::prelude::*;

fn any_button() -> impl Strategy<Value = LogicalButton> {
    prop::sample::select(BUTTON_MAP.iter().map(|m| m.button).collect::<Vec<_>>())
}

fn any_direction() -> impl Strategy<Value = LogicalButton> {
    prop::sample::select(vec![
        LogicalButton::Up,
        LogicalButton::Down,
        LogicalButton::Left,
        LogicalButton::Right,
    ])
}

proptest! {
    #[test]
    fn is_pressed_matches_bit_test(raw in any::<u16>(), button in any_button()) {
        let expected = (raw >> (button as u8)) & 1 == 1;
        prop_assert_eq!(is_pressed(ButtonMask::from_raw(raw), button), expected);
    }

    #[test]
    fn pressed_lists_exactly_the_set_bits(raw in any::<u16>()) {
        let mask = ButtonMask::from_raw(raw);
        let listed: Vec<_> = mask.pressed().collect();
        for mapping in BUTTON_MAP.iter() {
            prop_assert_eq!(listed.contains(&mapping.button), is_pressed(mask, mapping.button));
        }
    }

    #[test]
    fn filter_accepts_only_changed_nonzero(masks in prop::collection::vec(any::<u16>(), 1..32)) {
        let mut filter = MaskFilter::new();
        let mut previous = MaskFilter::INITIAL.raw();
        for raw in masks {
            let accepted = filter.update(ButtonMask::from_raw(raw)).accepted();
            prop_assert_eq!(accepted.is_some(), raw != previous && raw != 0);
            previous = raw;
            prop_assert_eq!(filter.previous().raw(), previous);
        }
    }

    #[test]
    fn character_never_on_a_wall(presses in prop::collection::vec(any_button(), 0..200)) {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let mut state = GameState::new();
        for button in presses {
            let before = state.character();
            let outcome = state.handle_button(button, &maze);
            if outcome == Outcome::Blocked {
                prop_assert_eq!(state.character(), before);
            }
            if state.character().is_placed() {
                prop_assert!(maze.cell(state.character()) != Cell::Wall);
            }
        }
    }

    #[test]
    fn idle_ignores_directions(presses in prop::collection::vec(any_direction(), 0..50)) {
        let maze = Maze::parse(REFERENCE_LAYOUT).unwrap();
        let mut state = GameState::new();
        for button in presses {
            prop_assert_eq!(state.handle_button(button, &maze), Outcome::Ignored);
        }
        prop_assert_eq!(state.phase(), GamePhase::Idle);
        prop_assert!(!state.character().is_placed());
    }
}
