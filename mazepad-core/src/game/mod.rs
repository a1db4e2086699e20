//! Game logic
//!
//! ```text
//!            Start              exit reached
//!   Idle ───────────▶ InProgress ───────────▶ Won
//!                         ▲                    │
//!                         └────── Start ───────┘
//! ```
//!
//! Movement is only handled while in progress. Start during play keeps
//! the current position.

pub mod redraw;
pub mod session;
pub mod state;

pub use redraw::{marker_colour, DrawCommand, Redraw};
pub use session::{Session, TickReport};
pub use state::{GamePhase, GameState, Outcome};
