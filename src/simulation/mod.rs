//! Simulation core - owns the world, the robot and the frame loop
//!
//! The wasm facade in `facade.rs` stays a thin wrapper so the whole core is
//! testable off the browser. One `step` runs to completion per frame; the
//! grid and robot have no other writers.

use crate::domain::terrain::TerrainModel;
use crate::domain::tiles::TILE_SIZE;
use crate::spatial::grid::TileGrid;
use crate::systems::robot::Robot;
use crate::systems::worldgen;

pub mod events;
pub(crate) mod random;

mod facade;
mod perf;
mod render_extract;
mod step;

pub use events::{EffectKind, Event, EventQueue};
pub use facade::World;
pub use perf::PerfStats;

/// Seed for worlds created without an explicit one
const DEFAULT_SEED: u32 = 12345;

pub struct SimCore {
    pub(crate) terrain: TerrainModel,
    pub(crate) grid: TileGrid,
    pub(crate) robot: Robot,
    pub(crate) events: EventQueue,
    pub(crate) rng_state: u32,
    pub(crate) frame: u64,

    // Perf metrics
    pub(crate) perf_enabled: bool,
    pub(crate) perf_stats: PerfStats,

    // Transfer buffer for the JS blitter
    pub(crate) view_buffer: Vec<u32>,
    pub(crate) view_cols: u32,
}

impl SimCore {
    /// Create a core with the given grid dimensions (in tiles)
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self::new_seeded(grid_width, grid_height, DEFAULT_SEED)
    }

    pub fn new_seeded(grid_width: u32, grid_height: u32, seed: u32) -> Self {
        Self {
            terrain: TerrainModel::from_generated(),
            grid: TileGrid::new(grid_width, grid_height),
            robot: Robot::new(),
            events: EventQueue::new(),
            rng_state: random::sanitize_seed(seed),
            frame: 0,
            perf_enabled: false,
            perf_stats: PerfStats::default(),
            view_buffer: Vec::new(),
            view_cols: 0,
        }
    }

    /// Generate the initial world (three viewports of columns) and drop
    /// the robot in. Must run before the first `step`.
    pub fn init(&mut self) {
        worldgen::init_world(&mut self.grid, &self.terrain, &mut self.rng_state);
        self.robot = Robot::new();
        self.robot.spawn(self.grid.grid_width());
        self.events.clear();
        self.frame = 0;
    }

    /// Append one viewport of columns on the right
    pub fn extend(&mut self) {
        worldgen::extend_world(&mut self.grid, &self.terrain, &mut self.rng_state);
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self, viewport_w: f32, viewport_h: f32) {
        step::step(self, viewport_w, viewport_h);
    }

    /// Swap the terrain model from a JSON bundle and rebuild the world
    pub fn load_terrain_bundle_json(&mut self, json: &str) -> Result<(), String> {
        self.terrain = TerrainModel::from_bundle_json(json)?;
        self.init();
        Ok(())
    }

    pub fn terrain_manifest_json(&self) -> String {
        self.terrain.manifest_json()
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn robot(&self) -> &Robot {
        &self.robot
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Serialize and clear the pending event queue
    pub fn drain_events_json(&mut self) -> String {
        self.events.drain_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Last step's perf snapshot (zeros when perf is disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    /// First generated column intersecting the view
    pub fn first_visible_col(&self) -> i32 {
        (self.grid.scroll_offset() / TILE_SIZE as f32).floor() as i32
    }

    /// Pack the visible tile colors into the transfer buffer and return a
    /// pointer into wasm memory
    pub fn extract_view_colors(&mut self, viewport_w: f32) -> *const u32 {
        render_extract::extract_view_colors(self, viewport_w)
    }

    pub fn view_buffer_len(&self) -> usize {
        self.view_buffer.len()
    }

    /// Columns per row in the last extracted view buffer
    pub fn view_cols(&self) -> u32 {
        self.view_cols
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
