//! One simulation frame
//!
//! Order per frame: AI decision, dig progress, jetpack energy, then
//! (unless digging) force integration and collision, then world scrolling.
//! The whole step runs to completion before anything reads state, so
//! collaborators only ever observe frame boundaries.

use crate::systems::robot::{ai, dig, physics};
use crate::systems::worldgen;

use super::perf::PerfTimer;
use super::SimCore;

pub(super) fn step(core: &mut SimCore, viewport_w: f32, viewport_h: f32) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let was_grounded = core.robot.is_grounded;

    // AI decision making (suspended while digging)
    ai::update_ai(&mut core.robot, &core.grid, &mut core.events, &mut core.rng_state);

    // Dig progress; carves the grid on completion
    dig::update_digging(&mut core.robot, &mut core.grid, &mut core.events);

    // Jetpack energy bookkeeping
    physics::update_jetpack_energy(&mut core.robot);

    // Movement physics; a running dig pins the robot
    if !core.robot.is_digging {
        if perf_on {
            let t0 = PerfTimer::start();
            physics::apply_physics(
                &mut core.robot,
                &core.grid,
                &mut core.events,
                viewport_w,
                viewport_h,
                was_grounded,
            );
            core.perf_stats.physics_ms = t0.elapsed_ms();
        } else {
            physics::apply_physics(
                &mut core.robot,
                &core.grid,
                &mut core.events,
                viewport_w,
                viewport_h,
                was_grounded,
            );
        }
    }

    // Scroll the world while the robot rides the edge bands; this is also
    // what triggers rightward extension
    let cols_before = core.grid.generated_cols();
    let x_adjust = worldgen::handle_scroll(
        &mut core.grid,
        &core.terrain,
        &mut core.rng_state,
        core.robot.x,
        core.robot.width,
        viewport_w,
    );
    core.robot.x += x_adjust;

    // Keep the robot on screen while walking left at the world origin
    if core.robot.x < 20.0 && core.robot.vx < 0.0 && core.grid.scroll_offset() <= 0.0 {
        core.robot.x = 20.0;
    }

    if perf_on {
        core.perf_stats.generated_cols = core.grid.generated_cols();
        core.perf_stats.cols_added = core.grid.generated_cols() - cols_before;
        core.perf_stats.events_emitted = core.events.len() as u32;
        core.perf_stats.scroll_offset = core.grid.scroll_offset();
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
