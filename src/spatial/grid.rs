//! Tile grid - column-major storage for the scrolling world
//!
//! Columns are appended on the right as the viewport advances and are never
//! removed or shifted, so a column index stays valid for the whole session.
//! All access goes through bounds-checked accessors: out-of-bounds reads are
//! `None` and out-of-bounds writes are ignored, never a panic.

use crate::domain::tiles::{PocketKind, Tile, TileKindId, TILE_SIZE, TK_GROUND, TK_POCKET};

pub struct TileGrid {
    /// Columns per viewport; also the extension unit
    grid_width: u32,
    grid_height: u32,
    columns: Vec<Vec<Tile>>,
    /// How far the view has scrolled into the world, in pixels. Never
    /// negative; only `scroll_by` changes it.
    scroll_offset: f32,
}

impl TileGrid {
    pub fn new(grid_width: u32, grid_height: u32) -> Self {
        Self {
            grid_width,
            grid_height,
            columns: Vec::new(),
            scroll_offset: 0.0,
        }
    }

    pub fn grid_width(&self) -> u32 {
        self.grid_width
    }

    pub fn grid_height(&self) -> u32 {
        self.grid_height
    }

    /// Number of generated columns; the world only ever grows rightward
    pub fn generated_cols(&self) -> u32 {
        self.columns.len() as u32
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    pub(crate) fn reset(&mut self) {
        self.columns.clear();
        self.scroll_offset = 0.0;
    }

    pub(crate) fn push_column(&mut self, column: Vec<Tile>) {
        debug_assert_eq!(column.len(), self.grid_height as usize);
        self.columns.push(column);
    }

    pub(crate) fn scroll_by(&mut self, delta: f32) {
        self.scroll_offset = (self.scroll_offset + delta).max(0.0);
    }

    pub fn get_tile(&self, col: i32, row: i32) -> Option<&Tile> {
        if col < 0 || row < 0 || row >= self.grid_height as i32 {
            return None;
        }
        self.columns.get(col as usize)?.get(row as usize)
    }

    /// Rewrite a cell. Non-air kinds keep the previous tile's layer/pocket
    /// metadata and color when the kinds match; anything else gets the
    /// fresh default for that kind. Air always discards all metadata.
    pub fn set_tile(&mut self, col: i32, row: i32, kind: TileKindId, has_item: bool) {
        if col < 0 || row < 0 || row >= self.grid_height as i32 {
            return;
        }
        let Some(column) = self.columns.get_mut(col as usize) else {
            return;
        };
        let Some(cell) = column.get_mut(row as usize) else {
            return;
        };
        *cell = match (kind, *cell) {
            (TK_GROUND, Tile::Ground { layer, color, .. }) => Tile::Ground { layer, color, has_item },
            (TK_POCKET, Tile::Pocket { kind, color, .. }) => Tile::Pocket { kind, color, has_item },
            _ => Tile::fresh(kind, has_item),
        };
    }

    /// Stamp a pocket cell with explicit template metadata
    pub(crate) fn set_pocket(&mut self, col: i32, row: i32, kind: PocketKind, color: u32, has_item: bool) {
        if col < 0 || row < 0 || row >= self.grid_height as i32 {
            return;
        }
        let Some(column) = self.columns.get_mut(col as usize) else {
            return;
        };
        if let Some(cell) = column.get_mut(row as usize) {
            *cell = Tile::Pocket { kind, color, has_item };
        }
    }

    /// True when the tile blocks movement; out of bounds counts as open
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        self.get_tile(col, row).map_or(false, Tile::is_solid)
    }

    /// World-absolute column under a screen-space x
    pub fn col_at(&self, screen_x: f32) -> i32 {
        ((screen_x + self.scroll_offset) / TILE_SIZE as f32).floor() as i32
    }

    /// Grid row containing a screen-space y
    pub fn row_at(&self, screen_y: f32) -> i32 {
        (screen_y / TILE_SIZE as f32).floor() as i32
    }

    /// Screen-space x of a column's left edge
    pub fn col_to_screen_x(&self, col: i32) -> f32 {
        (col * TILE_SIZE as i32) as f32 - self.scroll_offset
    }
}
