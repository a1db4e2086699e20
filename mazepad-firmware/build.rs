//! Build script for mazepad-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates game.toml at compile time
//! - Generates the game constants consumed by `src/config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

const MAZE_COLS: usize = 16;
const MAZE_ROWS: usize = 12;

fn main() {
    setup_linker();
    let config = validate_config();
    generate_config(&config);
}

/// Directory cargo gives this script for generated files
fn out_dir() -> PathBuf {
    env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| fail("OUT_DIR is not set", &["Run the build through cargo.".into()]))
}

/// Install memory.x and the cortex-m-rt/defmt link scripts
fn setup_linker() {
    let out = out_dir();

    fs::write(out.join("memory.x"), include_bytes!("memory.x"))
        .unwrap_or_else(|e| fail("Could not install memory.x", &[e.to_string()]));

    println!("cargo:rustc-link-search={}", out.display());
    for arg in ["--nmagic", "-Tlink.x", "-Tdefmt.x"] {
        println!("cargo:rustc-link-arg-bins={}", arg);
    }

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values extracted from a validated game.toml
struct GameConfig {
    width: u16,
    height: u16,
    tile_size: u16,
    poll_hz: u32,
    layout: Vec<String>,
}

/// Validate game.toml configuration at compile time
fn validate_config() -> GameConfig {
    // Re-run if game.toml changes
    println!("cargo:rerun-if-changed=game.toml");

    let config_path = Path::new("game.toml");

    if !config_path.exists() {
        fail(
            "game.toml not found",
            &[
                "The firmware requires a game.toml configuration file".to_string(),
                "in the mazepad-firmware directory.".to_string(),
            ],
        );
    }

    let config_content = fs::read_to_string(config_path)
        .unwrap_or_else(|e| fail("Failed to read game.toml", &[e.to_string()]));

    let config: toml::Value = toml::from_str(&config_content).unwrap_or_else(|e| {
        let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
        fail("Invalid TOML syntax in game.toml", &lines)
    });

    // Validate required sections exist
    validate_required_sections(&config);

    // Validate section contents
    let (width, height, tile_size) = validate_display(&config);
    let poll_hz = validate_input(&config);
    let layout = validate_maze(&config);

    println!("cargo:warning=game.toml validated successfully");

    GameConfig {
        width,
        height,
        tile_size,
        poll_hz,
        layout,
    }
}

/// Inner width of the diagnostic box
const BOX_WIDTH: usize = 64;

/// One boxed line, cut on a character boundary if it is too wide
fn boxed_line(text: &str) -> String {
    let text = if text.chars().count() > BOX_WIDTH {
        let cut = text
            .char_indices()
            .nth(BOX_WIDTH - 3)
            .map_or(text.len(), |(i, _)| i);
        format!("{}...", &text[..cut])
    } else {
        text.to_string()
    };
    format!("║  {:<width$} ║", text, width = BOX_WIDTH)
}

/// Abort the build with a boxed diagnostic
fn fail(title: &str, lines: &[String]) -> ! {
    let rule = "═".repeat(BOX_WIDTH + 3);
    let body = lines
        .iter()
        .map(|line| boxed_line(line))
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n╔{rule}╗\n{}\n╠{rule}╣\n{}\n╚{rule}╝\n",
        boxed_line(&format!("ERROR: {}", title)),
        body,
    );
}

/// Abort the build if any errors were collected
fn report_errors(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }

    let bullets: Vec<String> = errors.iter().map(|e| format!("• {}", e)).collect();
    fail(title, &bullets);
}

/// Validate that required sections exist
fn validate_required_sections(config: &toml::Value) {
    let errors: Vec<String> = ["display", "input", "maze"]
        .iter()
        .filter(|section| !matches!(config.get(**section), Some(toml::Value::Table(_))))
        .map(|section| format!("Missing [{}] section", section))
        .collect();

    report_errors("Missing required sections in game.toml", &errors);
}

/// Read a positive integer field, recording an error if it is missing or out of range
fn integer_field(
    table: &toml::Value,
    section: &str,
    key: &str,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match table.get(key) {
        Some(toml::Value::Integer(v)) if range.contains(v) => *v,
        Some(toml::Value::Integer(_)) => {
            errors.push(format!(
                "[{}] {} must be {}-{}",
                section,
                key,
                range.start(),
                range.end()
            ));
            0
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Validate display geometry; the grid must fit on screen
fn validate_display(config: &toml::Value) -> (u16, u16, u16) {
    let display = &config["display"];
    let mut errors = Vec::new();

    let width = integer_field(display, "display", "width", 1..=4096, &mut errors);
    let height = integer_field(display, "display", "height", 1..=4096, &mut errors);
    let tile_size = integer_field(display, "display", "tile_size", 1..=256, &mut errors);

    if errors.is_empty() {
        if MAZE_COLS as i64 * tile_size > width {
            errors.push(format!(
                "[display] {} columns of {} px exceed width {}",
                MAZE_COLS, tile_size, width
            ));
        }
        if MAZE_ROWS as i64 * tile_size > height {
            errors.push(format!(
                "[display] {} rows of {} px exceed height {}",
                MAZE_ROWS, tile_size, height
            ));
        }
    }

    report_errors("Invalid display configuration", &errors);

    (width as u16, height as u16, tile_size as u16)
}

/// Validate the controller poll rate
fn validate_input(config: &toml::Value) -> u32 {
    let mut errors = Vec::new();
    let poll_hz = integer_field(&config["input"], "input", "poll_hz", 1..=1000, &mut errors);

    report_errors("Invalid input configuration", &errors);

    poll_hz as u32
}

/// Validate the maze layout
fn validate_maze(config: &toml::Value) -> Vec<String> {
    let mut errors = Vec::new();

    let rows: Vec<String> = match config["maze"].get("layout") {
        Some(toml::Value::Array(rows)) => rows
            .iter()
            .enumerate()
            .filter_map(|(y, row)| match row {
                toml::Value::String(s) => Some(s.clone()),
                _ => {
                    errors.push(format!("[maze] layout row {} must be a string", y));
                    None
                }
            })
            .collect(),
        Some(_) => {
            errors.push("[maze] layout must be an array of strings".to_string());
            Vec::new()
        }
        None => {
            errors.push("[maze] missing 'layout'".to_string());
            Vec::new()
        }
    };

    if errors.is_empty() && rows.len() != MAZE_ROWS {
        errors.push(format!(
            "[maze] layout must have {} rows, found {}",
            MAZE_ROWS,
            rows.len()
        ));
    }

    let mut entrances = 0;
    let mut exits = 0;

    for (y, row) in rows.iter().enumerate() {
        let len = row.chars().count();
        if len != MAZE_COLS {
            errors.push(format!(
                "[maze] row {} must have {} tiles, found {}",
                y, MAZE_COLS, len
            ));
            continue;
        }

        for (x, tile) in row.chars().enumerate() {
            let border = x == 0 || y == 0 || x == MAZE_COLS - 1 || y == MAZE_ROWS - 1;
            match tile {
                'E' => entrances += 1,
                'X' => exits += 1,
                '#' => {}
                '.' if border => {
                    errors.push(format!("[maze] open border at ({}, {})", x, y));
                }
                '.' => {}
                other => {
                    errors.push(format!("[maze] unknown tile '{}' at ({}, {})", other, x, y));
                }
            }
        }
    }

    if errors.is_empty() {
        if entrances != 1 {
            errors.push(format!(
                "[maze] need exactly one entrance 'E', found {}",
                entrances
            ));
        }
        if exits != 1 {
            errors.push(format!("[maze] need exactly one exit 'X', found {}", exits));
        }
    }

    report_errors("Invalid maze configuration", &errors);

    rows
}

/// Write game_config.rs into OUT_DIR
fn generate_config(config: &GameConfig) {
    let path = out_dir().join("game_config.rs");
    let mut f = File::create(&path)
        .unwrap_or_else(|e| fail("Could not create game_config.rs", &[e.to_string()]));

    let layout: String = config.layout.iter().map(|row| format!("{}\n", row)).collect();

    writeln!(f, "/// Display width in pixels").unwrap();
    writeln!(f, "pub const DISPLAY_WIDTH: u16 = {};", config.width).unwrap();
    writeln!(f, "/// Display height in pixels").unwrap();
    writeln!(f, "pub const DISPLAY_HEIGHT: u16 = {};", config.height).unwrap();
    writeln!(f, "/// Edge length of one maze tile in pixels").unwrap();
    writeln!(f, "pub const TILE_SIZE: u16 = {};", config.tile_size).unwrap();
    writeln!(f, "/// Controller polls per second").unwrap();
    writeln!(f, "pub const POLL_HZ: u32 = {};", config.poll_hz).unwrap();
    writeln!(f, "/// Delay after each tick in microseconds").unwrap();
    writeln!(
        f,
        "pub const POLL_INTERVAL_US: u64 = {};",
        1_000_000 / config.poll_hz as u64
    )
    .unwrap();
    writeln!(f, "/// Maze layout, one row per line").unwrap();
    writeln!(f, "pub const MAZE_LAYOUT: &str = {:?};", layout).unwrap();
}
