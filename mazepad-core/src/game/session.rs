//! One game session: filter, state and maze tied together
//!
//! The firmware calls [`Session::tick`] once per poll with the raw mask,
//! applies the returned redraw to the surface, and calls
//! [`Session::commit_redraw`] once the surface accepted it.

use heapless::Vec;

use super::redraw::Redraw;
use super::state::{GameState, Outcome};
use crate::input::{ButtonMask, LogicalButton, MaskChange, MaskFilter, BUTTON_COUNT};
use crate::maze::Maze;

/// Everything that happened during one tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickReport {
    /// Filter decision for the polled mask
    pub change: MaskChange,
    /// Handled buttons in priority order, with their outcome
    pub outcomes: Vec<(LogicalButton, Outcome), BUTTON_COUNT>,
    /// Cells to repaint
    pub redraw: Redraw,
}

/// Owns the game state for one maze
pub struct Session<'m> {
    maze: &'m Maze,
    state: GameState,
    filter: MaskFilter,
}

impl<'m> Session<'m> {
    pub fn new(maze: &'m Maze) -> Self {
        Self {
            maze,
            state: GameState::new(),
            filter: MaskFilter::new(),
        }
    }

    pub fn maze(&self) -> &'m Maze {
        self.maze
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Run one poll's worth of game logic
    ///
    /// The redraw is planned on every tick, even when the mask was
    /// filtered out. Until [`Session::commit_redraw`] is called the last
    /// rendered position is unchanged, so a redraw that failed to reach
    /// the surface is planned again on the next tick.
    pub fn tick(&mut self, mask: ButtonMask) -> TickReport {
        let change = self.filter.update(mask);
        let mut outcomes = Vec::new();

        if let Some(accepted) = change.accepted() {
            for button in accepted.pressed() {
                let outcome = self.state.handle_button(button, self.maze);
                let pushed = outcomes.push((button, outcome));
                debug_assert!(pushed.is_ok(), "more pressed buttons than BUTTON_COUNT");
            }
        }

        TickReport {
            change,
            outcomes,
            redraw: self.state.plan_redraw(self.maze),
        }
    }

    /// Record the last tick's redraw as shown on the surface
    pub fn commit_redraw(&mut self) {
        self.state.commit_redraw();
    }
}
