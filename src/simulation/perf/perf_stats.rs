use wasm_bindgen::prelude::*;

/// Snapshot of the last step, filled only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) body_count: u32,
    pub(super) wall_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> u32 { self.body_count }
    #[wasm_bindgen(getter)]
    pub fn wall_count(&self) -> u32 { self.wall_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
