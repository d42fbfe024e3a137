//! The timed dig action
//!
//! Picking a target is a single uniform draw over the four neighbours of
//! the robot's midpoint cell; an unusable pick silently aborts and the AI
//! re-rolls on its next window. While a dig runs the robot is pinned in
//! place; completion carves the tile and may yield a collectible.

use crate::domain::tiles::{Tile, TILE_SIZE, TK_AIR};
use crate::simulation::events::{EffectKind, EventQueue};
use crate::simulation::random::next_f32;
use crate::spatial::grid::TileGrid;

use super::{Robot, DIG_DOWN, DIG_DURATION, DIG_LEFT, DIG_RIGHT, DIG_UP};

fn diggable(grid: &TileGrid, col: i32, row: i32) -> bool {
    grid.get_tile(col, row).map_or(false, Tile::is_diggable)
}

pub(crate) fn try_dig(robot: &mut Robot, grid: &TileGrid, rng: &mut u32) {
    // Grid cell behind the robot's midpoint
    let col = grid.col_at(robot.x);
    let row = grid.row_at(robot.y + robot.height / 2.0);

    let draw = next_f32(rng);
    let (dig_x, dig_y, dig_direction) = if draw < 0.25 {
        (col - 1, row, DIG_LEFT)
    } else if draw < 0.5 {
        (col + 1, row, DIG_RIGHT)
    } else if draw < 0.75 {
        (col, row + 1, DIG_DOWN)
    } else {
        (col, row - 1, DIG_UP)
    };

    if !diggable(grid, dig_x, dig_y) {
        return;
    }

    if dig_direction == DIG_LEFT || dig_direction == DIG_RIGHT {
        robot.direction = dig_direction;
    }
    robot.is_digging = true;
    robot.dig_progress = 0;
    robot.dig_x = dig_x;
    robot.dig_y = dig_y;
    robot.dig_direction = dig_direction;
    robot.vx = 0.0;
    robot.vy = 0.0;
}

pub(crate) fn update_digging(robot: &mut Robot, grid: &mut TileGrid, events: &mut EventQueue) {
    if !robot.is_digging {
        return;
    }

    robot.dig_progress += 1;
    if robot.dig_progress < DIG_DURATION {
        return;
    }

    // Dig finished: collect, emit debris, carve the tile out
    let center_x = grid.col_to_screen_x(robot.dig_x) + TILE_SIZE as f32 / 2.0;
    let center_y = (robot.dig_y * TILE_SIZE as i32) as f32 + TILE_SIZE as f32 / 2.0;

    if let Some(tile) = grid.get_tile(robot.dig_x, robot.dig_y) {
        if tile.has_item() {
            events.push_item_found(robot.dig_x, robot.dig_y, tile.source_key());
            events.push_effect(EffectKind::ItemSparkle, center_x, center_y);
        }
    }
    events.push_effect(EffectKind::Debris, center_x, center_y);

    grid.set_tile(robot.dig_x, robot.dig_y, TK_AIR, false);
    robot.is_digging = false;
    robot.dig_progress = 0;
}
