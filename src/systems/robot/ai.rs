//! Weighted-random decision making
//!
//! One uniform draw per decision window partitions into move / jump /
//! jetpack / dig / idle; each branch arms a fresh action timer that must
//! run out before the next draw. A running dig suspends the AI entirely.

use crate::simulation::events::{EffectKind, EventQueue};
use crate::simulation::random::{next_below, next_f32};
use crate::spatial::grid::TileGrid;

use super::dig::try_dig;
use super::{Robot, JUMP_FORCE, ROBOT_SPEED};

pub(crate) fn update_ai(robot: &mut Robot, grid: &TileGrid, events: &mut EventQueue, rng: &mut u32) {
    if robot.is_digging {
        return;
    }

    if robot.action_timer > 0 {
        robot.action_timer -= 1;

        // A nearly-drained jetpack sputters out early
        if robot.is_using_jetpack && robot.jetpack_energy < 10.0 && next_f32(rng) < 0.3 {
            robot.is_using_jetpack = false;
        }
        return;
    }

    let decision = next_f32(rng);

    if decision < 0.4 {
        // Walk left or right
        robot.vx = ROBOT_SPEED * if next_f32(rng) > 0.5 { 1.0 } else { -1.0 };
        robot.direction = if robot.vx > 0.0 { 1 } else { -1 };
        robot.action_timer = 30 + next_below(rng, 60) as i32;
    } else if decision < 0.6 && robot.is_grounded {
        jump(robot, events, rng);
    } else if decision < 0.7 && robot.jetpack_energy > 30.0 {
        robot.is_using_jetpack = true;
        robot.action_timer = 20 + next_below(rng, 40) as i32;
    } else if decision < 0.9 {
        // Digging works airborne too
        try_dig(robot, grid, rng);
        robot.action_timer = 10;
    } else {
        // Stand still
        robot.vx = 0.0;
        robot.is_using_jetpack = false;
        robot.action_timer = 15 + next_below(rng, 30) as i32;

        if next_f32(rng) < 0.15 {
            let bubble_x = robot.x + if robot.direction > 0 { robot.width - 5.0 } else { 5.0 };
            events.push_effect(EffectKind::Thinking, bubble_x, robot.y - 8.0);
        }
    }
}

fn jump(robot: &mut Robot, events: &mut EventQueue, rng: &mut u32) {
    robot.vy = -JUMP_FORCE;

    // Most jumps carry horizontal momentum; the rest go straight up
    let heading = next_f32(rng);
    if heading < 0.6 {
        robot.vx = ROBOT_SPEED * 1.5 * if heading < 0.3 { -1.0 } else { 1.0 };
        robot.direction = if robot.vx > 0.0 { 1 } else { -1 };
    } else {
        robot.vx = 0.0;
    }

    robot.is_jumping = true;
    robot.is_grounded = false;
    robot.action_timer = 20;
    events.push_effect(
        EffectKind::Jump,
        robot.x + robot.width / 2.0,
        robot.y + robot.height,
    );
}
