//! Logical buttons and the mask bit layout
//!
//! The pad shifts out 16 bits per read. Only six of them are used by
//! the game. A [`LogicalButton`]'s discriminant is its bit position;
//! [`BUTTON_MAP`] names the buttons, and its order is the order in
//! which simultaneously pressed buttons are handled.

use crate::maze::Direction;

/// Buttons the game reacts to
///
/// The discriminant is the bit index the pad reports the button on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogicalButton {
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
    /// Decoded but has no gameplay effect
    ActionX = 9,
}

/// One entry of the button table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMapping {
    /// Logical button; its discriminant is the bit index
    pub button: LogicalButton,
    /// Display name
    pub name: &'static str,
}

/// Number of buttons the game reacts to
pub const BUTTON_COUNT: usize = 6;

/// Button table in handling priority order
pub static BUTTON_MAP: [ButtonMapping; BUTTON_COUNT] = [
    ButtonMapping { button: LogicalButton::Start, name: "Start" },
    ButtonMapping { button: LogicalButton::Up, name: "Up" },
    ButtonMapping { button: LogicalButton::Down, name: "Down" },
    ButtonMapping { button: LogicalButton::Left, name: "Left" },
    ButtonMapping { button: LogicalButton::Right, name: "Right" },
    ButtonMapping { button: LogicalButton::ActionX, name: "X" },
];

impl LogicalButton {
    /// Bit index of this button in a [`ButtonMask`]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        BUTTON_MAP
            .iter()
            .find(|m| m.button == self)
            .map_or("?", |m| m.name)
    }

    /// Movement direction for the D-pad buttons
    pub fn direction(self) -> Option<Direction> {
        match self {
            LogicalButton::Up => Some(Direction::Up),
            LogicalButton::Down => Some(Direction::Down),
            LogicalButton::Left => Some(Direction::Left),
            LogicalButton::Right => Some(Direction::Right),
            LogicalButton::Start | LogicalButton::ActionX => None,
        }
    }
}

/// Button state for one poll; bit `i` set means pressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u16);

impl ButtonMask {
    /// No buttons pressed
    pub const NONE: ButtonMask = ButtonMask(0);

    /// Every line reported pressed
    pub const ALL: ButtonMask = ButtonMask(0xFFFF);

    /// Wrap a raw mask as read from the pad
    pub const fn from_raw(raw: u16) -> Self {
        ButtonMask(raw)
    }

    /// Raw mask value, unassigned bits included
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Check if no bit is set
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Mask with every bit outside [`BUTTON_MAP`] cleared
    pub fn assigned(self) -> Self {
        let known = BUTTON_MAP
            .iter()
            .fold(0u16, |acc, m| acc | (1 << m.button.bit()));
        ButtonMask(self.0 & known)
    }

    /// Mask with only `button` pressed
    pub fn only(button: LogicalButton) -> Self {
        ButtonMask(1 << button.bit())
    }

    /// Mask with `button` additionally pressed
    pub fn with(self, button: LogicalButton) -> Self {
        ButtonMask(self.0 | (1 << button.bit()))
    }

    /// Pressed buttons, in handling priority order
    pub fn pressed(self) -> impl Iterator<Item = LogicalButton> {
        BUTTON_MAP
            .iter()
            .filter(move |m| self.0 & (1 << m.button.bit()) != 0)
            .map(|m| m.button)
    }
}

/// Test whether `button` is pressed in `mask`
pub fn is_pressed(mask: ButtonMask, button: LogicalButton) -> bool {
    (mask.raw() >> button.bit()) & 1 == 1
}
