//! wasm-bindgen facade over the simulation core
//!
//! Everything here delegates; the JS shell calls `step` once per frame,
//! then reads robot state, drains events and blits the view buffer.

use wasm_bindgen::prelude::*;

use crate::domain::tiles::{Tile, TK_NONE};

use super::perf::PerfStats;
use super::SimCore;

#[wasm_bindgen]
pub struct World {
    core: SimCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with the given grid dimensions (in tiles)
    #[wasm_bindgen(constructor)]
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self {
            core: SimCore::new(grid_width, grid_height),
        }
    }

    /// Create a world with a fixed RNG seed (reproducible generation)
    #[wasm_bindgen(js_name = newSeeded)]
    pub fn new_seeded(grid_width: u32, grid_height: u32, seed: u32) -> Self {
        Self {
            core: SimCore::new_seeded(grid_width, grid_height, seed),
        }
    }

    /// Generate the initial world and spawn the robot
    pub fn init(&mut self) {
        self.core.init();
    }

    /// Advance the simulation by one frame. Sole per-frame entry point.
    pub fn step(&mut self, viewport_w: f32, viewport_h: f32) {
        self.core.step(viewport_w, viewport_h);
    }

    /// Append one viewport of columns on the right
    pub fn extend(&mut self) {
        self.core.extend();
    }

    pub fn load_terrain_bundle(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_terrain_bundle_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn terrain_manifest_json(&self) -> String {
        self.core.terrain_manifest_json()
    }

    // === GRID READS ===

    #[wasm_bindgen(getter)]
    pub fn grid_width(&self) -> u32 {
        self.core.grid().grid_width()
    }

    #[wasm_bindgen(getter)]
    pub fn grid_height(&self) -> u32 {
        self.core.grid().grid_height()
    }

    #[wasm_bindgen(getter)]
    pub fn generated_cols(&self) -> u32 {
        self.core.grid().generated_cols()
    }

    #[wasm_bindgen(getter)]
    pub fn scroll_offset(&self) -> f32 {
        self.core.grid().scroll_offset()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.core.frame()
    }

    /// Tile kind code at (col, row); `tile_none()` when out of bounds
    pub fn tile_kind(&self, col: i32, row: i32) -> u8 {
        self.core
            .grid()
            .get_tile(col, row)
            .map_or(TK_NONE, Tile::kind_id)
    }

    pub fn tile_color(&self, col: i32, row: i32) -> u32 {
        self.core
            .grid()
            .get_tile(col, row)
            .map_or(Tile::Air.color(), Tile::color)
    }

    pub fn tile_has_item(&self, col: i32, row: i32) -> bool {
        self.core
            .grid()
            .get_tile(col, row)
            .map_or(false, Tile::has_item)
    }

    /// Rewrite a tile (debug shell tooling); out of bounds is a no-op
    pub fn set_tile(&mut self, col: i32, row: i32, kind: u8, has_item: bool) {
        self.core.grid.set_tile(col, row, kind, has_item);
    }

    // === ROBOT READS ===

    #[wasm_bindgen(getter)]
    pub fn robot_x(&self) -> f32 {
        self.core.robot().x
    }

    #[wasm_bindgen(getter)]
    pub fn robot_y(&self) -> f32 {
        self.core.robot().y
    }

    #[wasm_bindgen(getter)]
    pub fn robot_vx(&self) -> f32 {
        self.core.robot().vx
    }

    #[wasm_bindgen(getter)]
    pub fn robot_vy(&self) -> f32 {
        self.core.robot().vy
    }

    #[wasm_bindgen(getter)]
    pub fn robot_width(&self) -> f32 {
        self.core.robot().width
    }

    #[wasm_bindgen(getter)]
    pub fn robot_height(&self) -> f32 {
        self.core.robot().height
    }

    #[wasm_bindgen(getter)]
    pub fn is_grounded(&self) -> bool {
        self.core.robot().is_grounded
    }

    #[wasm_bindgen(getter)]
    pub fn is_jumping(&self) -> bool {
        self.core.robot().is_jumping
    }

    #[wasm_bindgen(getter)]
    pub fn is_digging(&self) -> bool {
        self.core.robot().is_digging
    }

    #[wasm_bindgen(getter)]
    pub fn is_using_jetpack(&self) -> bool {
        self.core.robot().is_using_jetpack
    }

    #[wasm_bindgen(getter)]
    pub fn dig_x(&self) -> i32 {
        self.core.robot().dig_x
    }

    #[wasm_bindgen(getter)]
    pub fn dig_y(&self) -> i32 {
        self.core.robot().dig_y
    }

    #[wasm_bindgen(getter)]
    pub fn dig_direction(&self) -> i32 {
        self.core.robot().dig_direction
    }

    #[wasm_bindgen(getter)]
    pub fn dig_progress(&self) -> u32 {
        self.core.robot().dig_progress
    }

    #[wasm_bindgen(getter)]
    pub fn facing(&self) -> i32 {
        self.core.robot().direction
    }

    #[wasm_bindgen(getter)]
    pub fn jetpack_energy(&self) -> f32 {
        self.core.robot().jetpack_energy
    }

    /// Full robot snapshot for renderers that want one call per frame
    pub fn robot_state_json(&self) -> String {
        serde_json::to_string(self.core.robot()).unwrap_or_else(|_| "{}".to_string())
    }

    // === EVENTS ===

    /// Item-found and effect events accumulated since the last drain,
    /// serialized as a JSON array; draining clears the queue
    pub fn drain_events_json(&mut self) -> String {
        self.core.drain_events_json()
    }

    // === RENDER EXTRACTION ===

    /// Pack the visible window's tile colors into the transfer buffer and
    /// return a pointer into wasm memory
    pub fn extract_view_colors(&mut self, viewport_w: f32) -> *const u32 {
        self.core.extract_view_colors(viewport_w)
    }

    pub fn view_buffer_len(&self) -> usize {
        self.core.view_buffer_len()
    }

    pub fn view_cols(&self) -> u32 {
        self.core.view_cols()
    }

    pub fn first_visible_col(&self) -> i32 {
        self.core.first_visible_col()
    }

    // === PERF ===

    /// Enable or disable per-step perf metrics (adds timing overhead)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}
