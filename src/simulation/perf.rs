//! Per-step timing and counters, off by default
//!
//! Timing uses `Date.now()` in the browser and `Instant` natively so the
//! same stats work under `cargo test`.

use wasm_bindgen::prelude::*;

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            PerfTimer {
                start_ms: js_sys::Date::now(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            PerfTimer {
                start: std::time::Instant::now(),
            }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

/// Snapshot of the last step (zeros while perf is disabled)
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(crate) step_ms: f64,
    pub(crate) physics_ms: f64,
    pub(crate) generated_cols: u32,
    pub(crate) cols_added: u32,
    pub(crate) events_emitted: u32,
    pub(crate) scroll_offset: f32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }
    #[wasm_bindgen(getter)]
    pub fn physics_ms(&self) -> f64 {
        self.physics_ms
    }
    #[wasm_bindgen(getter)]
    pub fn generated_cols(&self) -> u32 {
        self.generated_cols
    }
    #[wasm_bindgen(getter)]
    pub fn cols_added(&self) -> u32 {
        self.cols_added
    }
    #[wasm_bindgen(getter)]
    pub fn events_emitted(&self) -> u32 {
        self.events_emitted
    }
    #[wasm_bindgen(getter)]
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}
