//! Game configuration generated from game.toml by the build script

include!(concat!(env!("OUT_DIR"), "/game_config.rs"));
