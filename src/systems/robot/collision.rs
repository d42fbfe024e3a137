//! Axis-separated collision against the tile grid
//!
//! Horizontal displacement is fully resolved before vertical displacement
//! is applied, so a corner approach becomes two independent single-axis
//! pushes rather than a diagonal bounce. A floor probe with a small
//! tolerance band grounds the robot across tile seams the box resolver can
//! miss. Residual overlap after resolution makes the caller roll the whole
//! axis back (anti-tunneling guard).

use crate::domain::tiles::TILE_SIZE;
use crate::spatial::grid::TileGrid;

use super::Robot;

/// Pixels of slack under the feet that still count as standing
pub(crate) const FLOOR_TOLERANCE: f32 = 10.0;
/// Penetration (pixels) the floor probe absorbs by snapping up
const FLOOR_SNAP: f32 = 1.0;

struct Span {
    left: i32,
    right: i32,
    top: i32,
    bottom: i32,
}

fn span(robot: &Robot, grid: &TileGrid) -> Span {
    Span {
        left: grid.col_at(robot.x),
        right: grid.col_at(robot.x + robot.width - 1.0),
        top: grid.row_at(robot.y),
        bottom: grid.row_at(robot.y + robot.height - 1.0),
    }
}

/// Any solid tile overlapping the robot's box?
pub(crate) fn overlaps_solid(robot: &Robot, grid: &TileGrid) -> bool {
    let s = span(robot, grid);
    for row in s.top..=s.bottom {
        for col in s.left..=s.right {
            if grid.is_solid(col, row) {
                return true;
            }
        }
    }
    false
}

/// Push the robot out of solid tiles along x, against its velocity.
/// Multiple overlapping tiles resolve to the most restrictive push.
pub(crate) fn resolve_horizontal(robot: &mut Robot, grid: &TileGrid) {
    if robot.vx == 0.0 {
        return;
    }
    let s = span(robot, grid);
    for row in s.top..=s.bottom {
        for col in s.left..=s.right {
            if !grid.is_solid(col, row) {
                continue;
            }
            if robot.vx > 0.0 {
                let limit = grid.col_to_screen_x(col) - robot.width;
                if limit < robot.x {
                    robot.x = limit;
                }
                robot.vx = 0.0;
            } else {
                let limit = grid.col_to_screen_x(col + 1);
                if limit > robot.x {
                    robot.x = limit;
                }
                robot.vx = 0.0;
            }
        }
    }
}

/// Push the robot out of solid tiles along y. Returns true when a push
/// landed it on top of a tile.
pub(crate) fn resolve_vertical(robot: &mut Robot, grid: &TileGrid) -> bool {
    if robot.vy == 0.0 {
        return false;
    }
    let mut landed = false;
    let s = span(robot, grid);
    for row in s.top..=s.bottom {
        for col in s.left..=s.right {
            if !grid.is_solid(col, row) {
                continue;
            }
            if robot.vy > 0.0 {
                let limit = (row * TILE_SIZE as i32) as f32 - robot.height;
                if limit < robot.y {
                    robot.y = limit;
                }
                robot.vy = 0.0;
                robot.is_grounded = true;
                robot.is_jumping = false;
                landed = true;
            } else {
                let limit = ((row + 1) * TILE_SIZE as i32) as f32;
                if limit > robot.y {
                    robot.y = limit;
                }
                robot.vy = 0.0;
            }
        }
    }
    landed
}

/// Ground check against the row directly under the feet, independent of
/// the box resolver. Skipped while rising, so a jetpack burn can leave the
/// ground. On contact the feet snap to the tile seam, keeping a resting
/// robot pixel-stable across frames. Returns true when the probe grounded
/// the robot.
pub(crate) fn probe_floor(robot: &mut Robot, grid: &TileGrid) -> bool {
    if robot.vy < 0.0 {
        return false;
    }
    let s = span(robot, grid);
    let floor_row = s.bottom + 1;
    if floor_row >= grid.grid_height() as i32 {
        return false;
    }
    for col in s.left..=s.right {
        if !grid.is_solid(col, floor_row) {
            continue;
        }
        let feet = robot.y + robot.height;
        let floor_px = (floor_row * TILE_SIZE as i32) as f32;
        let gap = floor_px - feet;
        if (-FLOOR_SNAP..=FLOOR_TOLERANCE).contains(&gap) {
            robot.y = floor_px - robot.height;
            robot.vy = 0.0;
            robot.is_grounded = true;
            robot.is_jumping = false;
            return true;
        }
    }
    false
}
