//! Viewport color extraction for the JS renderer
//!
//! Rather than one FFI call per tile, the shell asks for the visible
//! window once per frame and blits straight out of wasm memory.

use crate::domain::tiles::{Tile, TILE_SIZE};

use super::SimCore;

pub(super) fn extract_view_colors(core: &mut SimCore, viewport_w: f32) -> *const u32 {
    let grid_height = core.grid.grid_height();
    let first_col = core.first_visible_col();
    // One spare column so a partially scrolled tile on each edge still draws
    let cols = (viewport_w / TILE_SIZE as f32).ceil() as u32 + 1;

    let needed = (cols * grid_height) as usize;
    if core.view_buffer.len() < needed {
        core.view_buffer.resize(needed, 0);
    }
    core.view_cols = cols;

    for row in 0..grid_height as i32 {
        for i in 0..cols as i32 {
            let idx = (row * cols as i32 + i) as usize;
            core.view_buffer[idx] = core
                .grid
                .get_tile(first_col + i, row)
                .map_or(Tile::Air.color(), |t| t.color());
        }
    }

    core.view_buffer.as_ptr()
}
