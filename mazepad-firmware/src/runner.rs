//! Game loop
//!
//! Polls the pad, runs one session tick and applies the redraw, then
//! sleeps for a fixed interval. The sleep follows the tick rather than
//! a fixed period, so the effective rate is slightly below `POLL_HZ`.

use defmt::*;
use embassy_time::{Duration, Timer};

use mazepad_core::game::{Outcome, Session};
use mazepad_core::input::{LogicalButton, MaskChange};
use mazepad_core::maze::Maze;
use mazepad_core::render::MazeRenderer;
use mazepad_core::traits::{Gamepad, RenderSurface};

use crate::config::POLL_INTERVAL_US;

/// Run the game forever
pub async fn run<G, S>(pad: &mut G, surface: &mut S, maze: &Maze, renderer: MazeRenderer) -> !
where
    G: Gamepad,
    S: RenderSurface,
{
    let mut session = Session::new(maze);
    info!("Waiting for Start");

    loop {
        let mask = pad.poll();
        let report = session.tick(mask);

        if report.change != MaskChange::Unchanged {
            debug!("Controller mask: {=u16:#x}", mask.raw());
        }

        for &(button, outcome) in report.outcomes.iter() {
            log_outcome(button, outcome);
        }

        match renderer.apply(surface, &report.redraw) {
            Ok(()) => session.commit_redraw(),
            Err(e) => warn!("Redraw failed: {}", e),
        }

        Timer::after(Duration::from_micros(POLL_INTERVAL_US)).await;
    }
}

fn log_outcome(button: LogicalButton, outcome: Outcome) {
    match outcome {
        Outcome::Started => info!("Game started"),
        Outcome::Restarted => info!("Game restarted"),
        Outcome::Won(at) => info!("Exit reached at {}", at),
        Outcome::Moved(at) => debug!("{}: moved to {}", button.name(), at),
        Outcome::Blocked => debug!("{}: blocked", button.name()),
        Outcome::Bonus => debug!("Acid bonus"),
        Outcome::Ignored => trace!("{}: ignored", button.name()),
    }
}
