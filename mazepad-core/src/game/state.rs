//! Game state machine
//!
//! The phase and character position change only through
//! [`GameState::handle_button`]; every move is checked against the maze
//! before it is committed.

use super::redraw::{marker_colour, DrawCommand, Redraw};
use crate::input::LogicalButton;
use crate::maze::{Direction, Maze, Point};
use crate::render::colour_for;

/// Game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// Waiting for Start; character not placed
    Idle,
    /// Character is walking the maze
    InProgress,
    /// Character reached the exit
    Won,
}

/// Result of handling one button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// First Start: character placed on the entrance
    Started,
    /// Start after winning: character back on the entrance
    Restarted,
    /// Character moved to a new cell
    Moved(Point),
    /// Move rejected by a wall or the grid edge
    Blocked,
    /// Move landed on the exit
    Won(Point),
    /// X pressed; no effect on play
    Bonus,
    /// Button has no meaning in the current phase
    Ignored,
}

/// Phase plus current and last-rendered character positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GameState {
    phase: GamePhase,
    character: Point,
    previous_character: Point,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Idle with the character unplaced
    pub const fn new() -> Self {
        Self {
            phase: GamePhase::Idle,
            character: Point::UNPLACED,
            previous_character: Point::UNPLACED,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn character(&self) -> Point {
        self.character
    }

    /// Position the character was last rendered at
    pub fn previous_character(&self) -> Point {
        self.previous_character
    }

    /// Apply one pressed button
    pub fn handle_button(&mut self, button: LogicalButton, maze: &Maze) -> Outcome {
        use GamePhase::*;

        match (self.phase, button) {
            (_, LogicalButton::ActionX) => Outcome::Bonus,

            (Idle, LogicalButton::Start) => {
                self.character = maze.entrance();
                self.phase = InProgress;
                Outcome::Started
            }
            (Won, LogicalButton::Start) => {
                self.character = maze.entrance();
                self.phase = InProgress;
                Outcome::Restarted
            }
            (InProgress, LogicalButton::Start) => Outcome::Ignored,

            (InProgress, button) => match button.direction() {
                Some(direction) => self.try_move(direction, maze),
                None => Outcome::Ignored,
            },

            // Movement before Start or after winning
            (Idle | Won, _) => Outcome::Ignored,
        }
    }

    fn try_move(&mut self, direction: Direction, maze: &Maze) -> Outcome {
        if direction == Direction::Left && self.character.x <= 0 {
            return Outcome::Blocked;
        }

        let candidate = self.character.step(direction);
        match maze.get(candidate) {
            Some(cell) if cell.is_passable() => {
                self.character = candidate;
                if candidate == maze.exit() {
                    self.phase = GamePhase::Won;
                    Outcome::Won(candidate)
                } else {
                    Outcome::Moved(candidate)
                }
            }
            _ => Outcome::Blocked,
        }
    }

    /// Draw commands bringing the screen in line with the current state
    ///
    /// Erases the last rendered position if the character has left it,
    /// then draws the marker for the current phase.
    pub fn plan_redraw(&self, maze: &Maze) -> Redraw {
        let mut redraw = Redraw::new();

        if self.character != self.previous_character && self.previous_character.is_placed() {
            redraw.push(DrawCommand {
                at: self.previous_character,
                colour: colour_for(maze.cell(self.previous_character)),
            });
        }

        if let Some(colour) = marker_colour(self.phase) {
            redraw.push(DrawCommand {
                at: self.character,
                colour,
            });
        }

        redraw
    }

    /// Mark the current position as rendered
    pub fn commit_redraw(&mut self) {
        self.previous_character = self.character;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::REFERENCE_LAYOUT;
    use crate::traits::Colour;

    fn reference() -> Maze {
        Maze::parse(REFERENCE_LAYOUT).unwrap()
    }

    fn started(maze: &Maze) -> GameState {
        let mut state = GameState::new();
        assert_eq!(state.handle_button(LogicalButton::Start, maze), Outcome::Started);
        state
    }

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.phase(), GamePhase::Idle);
        assert_eq!(state.character(), Point::UNPLACED);
        assert_eq!(state.previous_character(), Point::UNPLACED);
    }

    #[test]
    fn test_idle_ignores_movement() {
        let maze = reference();
        let mut state = GameState::new();
        for button in [
            LogicalButton::Up,
            LogicalButton::Down,
            LogicalButton::Left,
            LogicalButton::Right,
        ] {
            assert_eq!(state.handle_button(button, &maze), Outcome::Ignored);
            assert_eq!(state.phase(), GamePhase::Idle);
            assert_eq!(state.character(), Point::UNPLACED);
        }
    }

    #[test]
    fn test_start_places_on_entrance() {
        let maze = reference();
        let state = started(&maze);
        assert_eq!(state.phase(), GamePhase::InProgress);
        assert_eq!(state.character(), Point::new(0, 2));
    }

    #[test]
    fn test_start_while_in_progress_keeps_position() {
        let maze = reference();
        let mut state = started(&maze);
        state.handle_button(LogicalButton::Right, &maze);
        assert_eq!(state.handle_button(LogicalButton::Start, &maze), Outcome::Ignored);
        assert_eq!(state.character(), Point::new(1, 2));
        assert_eq!(state.phase(), GamePhase::InProgress);
    }

    #[test]
    fn test_walls_block() {
        let maze = reference();
        let mut state = started(&maze);

        // Entrance sits on the left edge
        assert_eq!(state.handle_button(LogicalButton::Left, &maze), Outcome::Blocked);
        assert_eq!(state.handle_button(LogicalButton::Up, &maze), Outcome::Blocked);
        assert_eq!(state.handle_button(LogicalButton::Down, &maze), Outcome::Blocked);
        assert_eq!(state.character(), Point::new(0, 2));

        for x in 1..=3 {
            assert_eq!(
                state.handle_button(LogicalButton::Right, &maze),
                Outcome::Moved(Point::new(x, 2))
            );
        }
        assert_eq!(state.handle_button(LogicalButton::Right, &maze), Outcome::Blocked);
        assert_eq!(state.character(), Point::new(3, 2));
    }

    #[test]
    fn test_x_is_bonus_in_every_phase() {
        let maze = reference();
        let mut state = GameState::new();
        assert_eq!(state.handle_button(LogicalButton::ActionX, &maze), Outcome::Bonus);
        assert_eq!(state, GameState::new());

        let mut state = started(&maze);
        let before = state;
        assert_eq!(state.handle_button(LogicalButton::ActionX, &maze), Outcome::Bonus);
        assert_eq!(state, before);
    }

    #[test]
    fn test_redraw_idle_draws_nothing() {
        let maze = reference();
        assert!(GameState::new().plan_redraw(&maze).commands().is_empty());
    }

    #[test]
    fn test_redraw_after_start() {
        let maze = reference();
        let state = started(&maze);
        let redraw = state.plan_redraw(&maze);
        // Nothing rendered yet, so only the marker
        assert_eq!(
            redraw.commands(),
            &[DrawCommand {
                at: Point::new(0, 2),
                colour: Colour::RED
            }]
        );
    }

    #[test]
    fn test_redraw_after_move_erases_previous() {
        let maze = reference();
        let mut state = started(&maze);
        state.commit_redraw();
        state.handle_button(LogicalButton::Right, &maze);

        let redraw = state.plan_redraw(&maze);
        assert_eq!(
            redraw.commands(),
            &[
                DrawCommand {
                    at: Point::new(0, 2),
                    colour: Colour::WHITE
                },
                DrawCommand {
                    at: Point::new(1, 2),
                    colour: Colour::RED
                },
            ]
        );

        state.commit_redraw();
        assert_eq!(state.previous_character(), Point::new(1, 2));
        // Standing still repaints only the marker
        assert_eq!(state.plan_redraw(&maze).commands().len(), 1);
    }
}
