//! Digbot Engine - mining-sandbox world simulation in WASM
//!
//! The JS shell owns rendering, particle visuals and the inventory UI;
//! this crate owns the tile world, procedural generation and the
//! autonomous robot.
//!
//! Architecture:
//! - domain/     - Tile and terrain data
//! - spatial/    - Tile grid storage
//! - systems/    - World generation and robot systems
//! - simulation/ - Orchestration and the wasm API

pub mod domain;
pub mod simulation;
pub mod spatial;
pub mod systems;

pub use domain::terrain::TerrainModel;
pub use domain::tiles::{LayerId, PocketKind, Tile};
pub use simulation::{PerfStats, SimCore, World};
pub use spatial::grid::TileGrid;
pub use systems::robot::Robot;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🤖 Digbot WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Tile pixel size shared by generation, collision and the renderer
#[wasm_bindgen]
pub fn tile_size() -> u32 {
    domain::tiles::TILE_SIZE
}

// Export tile kind codes for JS
#[wasm_bindgen]
pub fn tile_air() -> u8 { domain::tiles::TK_AIR }
#[wasm_bindgen]
pub fn tile_ground() -> u8 { domain::tiles::TK_GROUND }
#[wasm_bindgen]
pub fn tile_bedrock() -> u8 { domain::tiles::TK_BEDROCK }
#[wasm_bindgen]
pub fn tile_pocket() -> u8 { domain::tiles::TK_POCKET }
#[wasm_bindgen]
pub fn tile_none() -> u8 { domain::tiles::TK_NONE }

// Export dig direction codes for JS
#[wasm_bindgen]
pub fn dig_left() -> i32 { systems::robot::DIG_LEFT }
#[wasm_bindgen]
pub fn dig_right() -> i32 { systems::robot::DIG_RIGHT }
#[wasm_bindgen]
pub fn dig_down() -> i32 { systems::robot::DIG_DOWN }
#[wasm_bindgen]
pub fn dig_up() -> i32 { systems::robot::DIG_UP }
