use wasm_bindgen::prelude::*;

use crate::domain::material::MaterialPatch;
use crate::error::EngineError;
use crate::rigid_body_system::{BodyHandle, TrackedPose};

use super::perf_stats::PerfStats;
use super::WorldCore;

fn js_err(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// JavaScript-facing world.
///
/// Handles cross the boundary as `u64` bits (`BigInt` on the JS side); `0n`
/// is the null handle. Poses come back as flat `[x, y, angleDegrees, ...]`
/// arrays in the same order as [`World::handles`].
#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a world with default tuning
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::default(),
        }
    }

    /// Create a world from a JSON config (camelCase, every field optional)
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(js_err)?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn ready(&self) -> bool { self.core.is_ready() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn ratio(&self) -> f32 { self.core.units().ratio() }

    /// Rebuild the world and its walls for a new display size.
    /// Invalidates every handle issued so far.
    pub fn rebuild_bounds(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.core.rebuild_bounds(width, height).map_err(js_err)
    }

    // === BODY API ===

    /// Bind a ball to an element whose bounding box starts at (x, y)
    pub fn bind_element(&mut self, x: f32, y: f32, radius: f32) -> Result<u64, JsValue> {
        self.core
            .bind_element(x, y, radius)
            .map(BodyHandle::to_bits)
            .map_err(js_err)
    }

    pub fn unbind_element(&mut self, handle: u64) -> Result<(), JsValue> {
        self.core
            .unbind_element(BodyHandle::from_bits(handle))
            .map_err(js_err)
    }

    /// `[x, y, angleDegrees]`, or empty when the handle is null or stale
    pub fn pose(&self, handle: u64) -> Vec<f32> {
        self.core
            .pose(BodyHandle::from_bits(handle))
            .map(|p| vec![p.x, p.y, p.angle_degrees])
            .unwrap_or_default()
    }

    /// Live handles, in the order poses are reported
    pub fn handles(&self) -> Vec<u64> {
        self.core.handles().into_iter().map(BodyHandle::to_bits).collect()
    }

    // === IMPULSE API ===

    pub fn apply_impulse(&mut self, handle: u64, x: f32, y: f32) -> bool {
        self.core.apply_impulse(BodyHandle::from_bits(handle), x, y)
    }

    pub fn apply_impulse_to_all(&mut self, x: f32, y: f32) -> usize {
        self.core.apply_impulse_to_all(x, y)
    }

    // === STEPPING ===

    /// Step the simulation forward one fixed tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Step once and return flat poses for every live ball
    pub fn advance_and_read_poses(&mut self) -> Vec<f32> {
        flatten(&self.core.advance_and_read_poses())
    }

    // === SETTINGS ===

    /// Patch the material for future bodies; `undefined` leaves a field as is
    pub fn set_material(
        &mut self,
        density: Option<f32>,
        friction: Option<f32>,
        restitution: Option<f32>,
    ) -> Result<(), JsValue> {
        self.core
            .set_material(MaterialPatch { density, friction, restitution })
            .map_err(js_err)
    }

    pub fn set_density(&mut self, density: f32) -> Result<(), JsValue> {
        self.core.set_density(density).map_err(js_err)
    }

    /// Current material as JSON
    pub fn get_material_json(&self) -> String {
        serde_json::to_string(&self.core.material()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

fn flatten(poses: &[TrackedPose]) -> Vec<f32> {
    let mut out = Vec::with_capacity(poses.len() * 3);
    for tracked in poses {
        out.extend_from_slice(&[tracked.pose.x, tracked.pose.y, tracked.pose.angle_degrees]);
    }
    out
}
