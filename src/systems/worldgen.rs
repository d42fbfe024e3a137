//! Procedural column generation for the scrolling world
//!
//! Every column is generated independently: a sine-perturbed surface line,
//! the layer stack below it, cave carving from combined trig noise, then
//! elliptical mineral pockets stamped over ground cells. Scrolling keeps
//! generation a full viewport ahead of the visible edge, so physics never
//! sees ungenerated world.

use crate::domain::terrain::{PocketTemplate, TerrainModel};
use crate::domain::tiles::{Tile, TILE_SIZE};
use crate::simulation::random::{next_below, next_f32};
use crate::spatial::grid::TileGrid;

/// Cave noise above this carves the cell to air
const CAVE_THRESHOLD: f32 = 0.55;
/// Amplitude (rows) and frequency of the rolling-surface perturbation
const SURFACE_AMPLITUDE: f32 = 2.0;
const SURFACE_FREQUENCY: f32 = 0.2;

/// World scroll speed in pixels per frame
pub const SCROLL_STEP: f32 = 4.0;
const SCROLL_RIGHT_BAND: f32 = 0.7;
const SCROLL_LEFT_BAND: f32 = 0.3;

/// Generate the initial world: three viewports of columns
pub fn init_world(grid: &mut TileGrid, terrain: &TerrainModel, rng: &mut u32) {
    grid.reset();
    let count = grid.grid_width() * 3;
    generate_columns(grid, terrain, rng, count);
}

/// Append one viewport worth of columns on the right
pub fn extend_world(grid: &mut TileGrid, terrain: &TerrainModel, rng: &mut u32) {
    let count = grid.grid_width();
    generate_columns(grid, terrain, rng, count);
}

fn generate_columns(grid: &mut TileGrid, terrain: &TerrainModel, rng: &mut u32, count: u32) {
    for _ in 0..count {
        let x = grid.generated_cols() as i32;
        let column = generate_column(x, grid.grid_height(), terrain, rng);
        grid.push_column(column);
        stamp_pockets(grid, terrain, rng, x);
    }
}

/// Scrolling and on-demand extension. Returns the x adjustment the robot
/// must apply to stay visually stationary while the world slides.
pub fn handle_scroll(
    grid: &mut TileGrid,
    terrain: &TerrainModel,
    rng: &mut u32,
    robot_screen_x: f32,
    _robot_width: f32,
    viewport_w: f32,
) -> f32 {
    if robot_screen_x > viewport_w * SCROLL_RIGHT_BAND {
        // Keep a full viewport of generated world beyond the visible edge
        let right_edge = (grid.generated_cols().saturating_sub(grid.grid_width()) * TILE_SIZE) as f32;
        if grid.scroll_offset() + viewport_w > right_edge {
            extend_world(grid, terrain, rng);
        }
        grid.scroll_by(SCROLL_STEP);
        -SCROLL_STEP
    } else if robot_screen_x < viewport_w * SCROLL_LEFT_BAND && grid.scroll_offset() > 0.0 {
        grid.scroll_by(-SCROLL_STEP);
        SCROLL_STEP
    } else {
        0.0
    }
}

/// Perturbed surface row for column `x`
fn surface_line(terrain: &TerrainModel, grid_height: u32, x: i32) -> i32 {
    let wave = (x as f32 * SURFACE_FREQUENCY).sin() * SURFACE_AMPLITUDE;
    terrain.surface_row(grid_height) as i32 + wave.floor() as i32
}

/// Two trig terms seeded by the cell coordinates, roughly in [-1, 1]
fn cave_noise(x: i32, y: i32) -> f32 {
    let a = (x as f32 * 0.35).sin() * (y as f32 * 0.45).cos();
    let b = (x as f32 * 0.8 + y as f32 * 0.6).sin();
    a * 0.5 + b * 0.5
}

fn generate_column(x: i32, grid_height: u32, terrain: &TerrainModel, rng: &mut u32) -> Vec<Tile> {
    let surface = surface_line(terrain, grid_height, x);
    let mut column = Vec::with_capacity(grid_height as usize);

    for y in 0..grid_height as i32 {
        if y == grid_height as i32 - 1 {
            column.push(Tile::Bedrock);
        } else if y < surface {
            column.push(Tile::Air);
        } else {
            let (layer, props) = terrain.layer_for_row(grid_height, y as u32);
            if props.caves && cave_noise(x, y) > CAVE_THRESHOLD {
                column.push(Tile::Air);
            } else {
                let has_item = next_f32(rng) < props.item_chance;
                column.push(Tile::Ground {
                    layer,
                    color: props.color,
                    has_item,
                });
            }
        }
    }

    column
}

/// Roll every pocket template for column `x` and stamp winners
fn stamp_pockets(grid: &mut TileGrid, terrain: &TerrainModel, rng: &mut u32, x: i32) {
    for template in terrain.pockets() {
        if next_f32(rng) >= template.rarity {
            continue;
        }
        stamp_pocket(grid, terrain, rng, x, template);
    }
}

/// Stamp one elliptical pocket centered on column `x` at a row inside the
/// template's depth band. Only ground cells are overwritten, so pockets
/// never float in carved air or cut into bedrock.
pub(crate) fn stamp_pocket(
    grid: &mut TileGrid,
    terrain: &TerrainModel,
    rng: &mut u32,
    x: i32,
    template: &PocketTemplate,
) {
    let grid_height = grid.grid_height();
    let size = template.size_min + next_below(rng, template.size_max - template.size_min + 1);
    let start = terrain.layer_start_row(grid_height, template.min_depth);
    let span = grid_height.saturating_sub(1).saturating_sub(start).max(1);
    let cy = (start + next_below(rng, span)) as i32;

    let r = (size / 2) as i32;
    let r2 = (size as f32 / 2.0).powi(2);
    for i in -r..=r {
        for j in -r..=r {
            if ((i * i + j * j) as f32) > r2 {
                continue;
            }
            let (col, row) = (x + i, cy + j);
            if matches!(grid.get_tile(col, row), Some(Tile::Ground { .. })) {
                let has_item = next_f32(rng) < template.item_chance;
                grid.set_pocket(col, row, template.kind, template.color, has_item);
            }
        }
    }
}
