//! Mazepad - SNES Controller Maze Firmware
//!
//! Main firmware binary for RP2040-based boards with an SNES pad on
//! three GPIO lines and an ST7789 panel on SPI0.
//!
//! Board wiring:
//!
//! | Signal        | GPIO |
//! |---------------|------|
//! | Pad LATCH     | 9    |
//! | Pad DATA      | 10   |
//! | Pad CLOCK     | 11   |
//! | Display DC    | 16   |
//! | Display CS    | 17   |
//! | Display SCK   | 18   |
//! | Display MOSI  | 19   |
//! | Backlight     | 20   |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{self, Output};
use embassy_rp::spi::{self, Spi};
use embassy_time::Delay;
use embedded_hal_bus::spi::ExclusiveDevice;
use mipidsi::interface::SpiInterface;
use mipidsi::models::ST7789;
use mipidsi::options::{ColorInversion, Orientation, Rotation};
use mipidsi::Builder;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use mazepad_core::maze::Maze;
use mazepad_core::render::MazeRenderer;
use mazepad_core::traits::RenderSurface;
use mazepad_drivers::controller::SnesController;
use mazepad_drivers::display::GraphicsSurface;
use mazepad_hal_rp2040::{Level, RpInput, RpOutput, TimerDelay};

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MAZE_LAYOUT, POLL_HZ, TILE_SIZE};

mod config;
mod runner;

/// SPI clock for the display
const DISPLAY_SPI_HZ: u32 = 62_500_000;

// Pixel staging buffer for the display interface (must live forever)
static DISPLAY_BUF: StaticCell<[u8; 1024]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Mazepad firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Controller lines: LATCH idles low, CLOCK idles high, DATA floats
    let mut pad = SnesController::new(
        RpOutput::new(p.PIN_9, Level::Low),
        RpOutput::new(p.PIN_11, Level::High),
        RpInput::floating(p.PIN_10),
        TimerDelay::new(),
    );

    // ST7789 display
    let _backlight = Output::new(p.PIN_20, gpio::Level::High);
    let mut spi_config = spi::Config::default();
    spi_config.frequency = DISPLAY_SPI_HZ;
    let spi_bus = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_config);
    let cs = Output::new(p.PIN_17, gpio::Level::High);
    let dc = Output::new(p.PIN_16, gpio::Level::Low);
    let spi_device = match ExclusiveDevice::new_no_delay(spi_bus, cs) {
        Ok(device) => device,
        Err(_) => defmt::panic!("Display chip select unavailable"),
    };
    let di = SpiInterface::new(spi_device, dc, DISPLAY_BUF.init([0u8; 1024]));

    // Panel is portrait; rotated into landscape
    let display = match Builder::new(ST7789, di)
        .display_size(DISPLAY_HEIGHT, DISPLAY_WIDTH)
        .invert_colors(ColorInversion::Inverted)
        .orientation(Orientation::new().rotate(Rotation::Deg90))
        .init(&mut Delay)
    {
        Ok(display) => display,
        Err(_) => defmt::panic!("Display init failed"),
    };

    let mut surface = GraphicsSurface::new(display);
    if let Err(e) = surface.init() {
        warn!("Display clear failed: {}", e);
    }
    info!("Display ready ({}x{})", DISPLAY_WIDTH, DISPLAY_HEIGHT);

    let maze = match Maze::parse(MAZE_LAYOUT) {
        Ok(maze) => maze,
        Err(e) => defmt::panic!("Invalid maze layout: {}", e),
    };
    info!(
        "Maze loaded: entrance {}, exit {}",
        maze.entrance(),
        maze.exit()
    );

    let renderer = MazeRenderer::new(TILE_SIZE);
    if let Err(e) = renderer.draw_maze(&mut surface, &maze) {
        warn!("Maze draw failed: {}", e);
    }

    info!("Polling controller at {} Hz", POLL_HZ);
    runner::run(&mut pad, &mut surface, &maze, renderer).await
}
