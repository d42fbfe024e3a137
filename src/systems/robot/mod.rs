//! The autonomous robot: state, decision making, digging and tile physics

pub mod ai;
pub mod collision;
pub mod dig;
pub mod physics;

use serde::Serialize;

use crate::domain::tiles::TILE_SIZE;

pub const GRAVITY: f32 = 0.5;
pub const ROBOT_SPEED: f32 = 2.0;
pub const JUMP_FORCE: f32 = 12.0;
/// Frames a dig takes to finish
pub const DIG_DURATION: u32 = 60;
pub const MAX_FALL_SPEED: f32 = 15.0;

pub const JETPACK_FORCE: f32 = 0.4;
pub const JETPACK_MAX_ENERGY: f32 = 100.0;
pub const JETPACK_USE_RATE: f32 = 0.6;
pub const JETPACK_RECHARGE_RATE: f32 = 0.2;
/// Terminal upward velocity while thrusting
pub const JETPACK_MAX_RISE: f32 = -4.0;

/// Dig direction codes shared with the renderer
pub const DIG_LEFT: i32 = -1;
pub const DIG_RIGHT: i32 = 1;
pub const DIG_DOWN: i32 = 2;
pub const DIG_UP: i32 = 3;

/// The single robot entity. Position is screen-space; the world-absolute
/// column under the robot is `TileGrid::col_at(x)`.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Robot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub is_jumping: bool,
    pub is_grounded: bool,
    pub is_digging: bool,
    pub dig_progress: u32,
    pub dig_x: i32,
    pub dig_y: i32,
    /// -1 left, 1 right, 2 down, 3 up
    pub dig_direction: i32,
    /// Facing: 1 right, -1 left
    pub direction: i32,
    /// Frames until the next AI decision
    pub action_timer: i32,
    pub jetpack_energy: f32,
    pub is_using_jetpack: bool,
}

impl Robot {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: (TILE_SIZE - 8) as f32,
            height: (TILE_SIZE - 4) as f32,
            vx: 0.0,
            vy: 0.0,
            is_jumping: false,
            is_grounded: false,
            is_digging: false,
            dig_progress: 0,
            dig_x: 0,
            dig_y: 0,
            dig_direction: DIG_DOWN,
            direction: 1,
            action_timer: 0,
            jetpack_energy: JETPACK_MAX_ENERGY,
            is_using_jetpack: false,
        }
    }

    /// Drop the robot at the middle of the first viewport, at the top
    pub fn spawn(&mut self, grid_width: u32) {
        self.x = (grid_width * TILE_SIZE) as f32 / 2.0;
        self.y = 0.0;
        self.vx = 0.0;
        self.vy = 0.0;
    }
}

impl Default for Robot {
    fn default() -> Self {
        Self::new()
    }
}
