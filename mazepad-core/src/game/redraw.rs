//! Per-tick redraw plan

use heapless::Vec;

use super::state::GamePhase;
use crate::maze::Point;
use crate::traits::Colour;

/// Fill one grid cell with a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DrawCommand {
    pub at: Point,
    pub colour: Colour,
}

/// Cells to repaint after a tick: at most an erase and a marker
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Redraw {
    commands: Vec<DrawCommand, 2>,
}

impl Redraw {
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, command: DrawCommand) {
        let pushed = self.commands.push(command);
        debug_assert!(pushed.is_ok(), "redraw holds an erase and a marker");
    }

    /// Commands in the order they must be applied
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

/// Marker colour for the character in `phase`; `None` when not drawn
pub fn marker_colour(phase: GamePhase) -> Option<Colour> {
    match phase {
        GamePhase::Idle => None,
        GamePhase::InProgress => Some(Colour::RED),
        GamePhase::Won => Some(Colour::GREEN),
    }
}
