//! Per-frame forces, integration and bounds handling

use crate::simulation::events::{EffectKind, EventQueue};
use crate::spatial::grid::TileGrid;

use super::collision;
use super::{
    Robot, GRAVITY, JETPACK_FORCE, JETPACK_MAX_ENERGY, JETPACK_MAX_RISE, JETPACK_RECHARGE_RATE,
    JETPACK_USE_RATE, MAX_FALL_SPEED,
};

/// Deplete or recharge jetpack energy; an empty tank forces shutdown
pub(crate) fn update_jetpack_energy(robot: &mut Robot) {
    if robot.is_using_jetpack {
        robot.jetpack_energy -= JETPACK_USE_RATE;
        if robot.jetpack_energy <= 0.0 {
            robot.jetpack_energy = 0.0;
            robot.is_using_jetpack = false;
        }
    } else if robot.is_grounded {
        // Standing on ground recharges at double rate
        robot.jetpack_energy += JETPACK_RECHARGE_RATE * 2.0;
    } else {
        robot.jetpack_energy += JETPACK_RECHARGE_RATE;
    }

    if robot.jetpack_energy > JETPACK_MAX_ENERGY {
        robot.jetpack_energy = JETPACK_MAX_ENERGY;
    }
}

/// Forces, integration and collision for one frame. Never called while a
/// dig is running - digging pins the robot completely.
pub(crate) fn apply_physics(
    robot: &mut Robot,
    grid: &TileGrid,
    events: &mut EventQueue,
    viewport_w: f32,
    viewport_h: f32,
    was_grounded: bool,
) {
    // Forces
    if robot.is_using_jetpack && robot.jetpack_energy > 0.0 {
        robot.vy -= JETPACK_FORCE;
        if robot.vy < JETPACK_MAX_RISE {
            robot.vy = JETPACK_MAX_RISE;
        }
        events.push_effect(
            EffectKind::JetpackExhaust,
            robot.x + robot.width / 2.0,
            robot.y + robot.height,
        );
    } else {
        robot.vy += GRAVITY;
    }
    if robot.vy > MAX_FALL_SPEED {
        robot.vy = MAX_FALL_SPEED;
    }

    // Horizontal axis: displace, clamp to the viewport, resolve, roll the
    // axis back on residual overlap
    let prev_x = robot.x;
    robot.x += robot.vx;

    if robot.x < 0.0 {
        robot.x = 0.0;
        // The world may still be scrolling back under us at the left edge;
        // only kill velocity at the true origin
        if grid.scroll_offset() <= 0.0 {
            robot.vx = 0.0;
        }
    }
    if robot.x > viewport_w - robot.width {
        robot.x = viewport_w - robot.width;
        robot.vx = 0.0;
    }

    collision::resolve_horizontal(robot, grid);
    if collision::overlaps_solid(robot, grid) {
        robot.x = prev_x;
        robot.vx = 0.0;
    }

    // Vertical axis: displace, probe the floor, resolve, roll back, then
    // the screen-bottom backstop
    let prev_y = robot.y;
    let falling_fast = robot.vy > 2.0;
    robot.y += robot.vy;
    robot.is_grounded = false;

    if collision::probe_floor(robot, grid) && falling_fast && !was_grounded {
        events.push_effect(
            EffectKind::Landing,
            robot.x + robot.width / 2.0,
            robot.y + robot.height,
        );
    }

    let landed = collision::resolve_vertical(robot, grid);
    if landed && !was_grounded {
        events.push_effect(
            EffectKind::Landing,
            robot.x + robot.width / 2.0,
            robot.y + robot.height,
        );
    }
    if collision::overlaps_solid(robot, grid) {
        robot.y = prev_y;
        robot.vy = 0.0;
    }

    // Backstop: never fall through the bottom of the screen
    if robot.y > viewport_h - robot.height {
        robot.y = viewport_h - robot.height;
        robot.vy = 0.0;
        if !robot.is_grounded && !was_grounded {
            events.push_effect(
                EffectKind::Landing,
                robot.x + robot.width / 2.0,
                robot.y + robot.height,
            );
        }
        robot.is_grounded = true;
        robot.is_jumping = false;
    }
}
