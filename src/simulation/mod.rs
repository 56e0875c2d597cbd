//! WorldCore - the simulation facade
//!
//! Ties together the unit converter, the world manager (engine world, walls,
//! fixed-tick stepping), the body registry and impulse dispatch behind one
//! surface. Callers only ever see [`BodyHandle`]s and plain numeric poses.
//!
//! World lifecycle: no world until the first `rebuild_bounds`; every later
//! `rebuild_bounds` replaces the world and invalidates every handle.
//!
//! Single-threaded by contract: step, bind, unbind, impulses and pose reads
//! are expected from one frame loop in strict sequence.

use rand::rngs::StdRng;

use crate::core::units::UnitConverter;
use crate::domain::config::EngineConfig;
use crate::domain::material::{Material, MaterialPatch};
use crate::error::Result;
use crate::rigid_body_system::{BodyHandle, BodyRegistry, Pose, TrackedPose};
use crate::systems::engine::{PhysicsEngine, RapierEngine};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "world/manager.rs"]
mod manager;
#[path = "step/step.rs"]
mod step;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::World;
pub use manager::{WorldManager, GRAVITY};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore<E: PhysicsEngine = RapierEngine> {
    config: EngineConfig,
    units: UnitConverter,
    /// Applied to walls and bodies created from now on
    material: Material,
    world: WorldManager<E>,
    registry: BodyRegistry<E::BodyId>,
    rng: StdRng,

    // State
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl<E: PhysicsEngine> WorldCore<E> {
    /// Create a world core from a validated config. No world exists until
    /// [`rebuild_bounds`](Self::rebuild_bounds) is called.
    pub fn new(config: EngineConfig) -> Result<Self> {
        init::create_world_core(config)
    }

    pub fn from_config_json(json: &str) -> Result<Self> {
        Self::new(EngineConfig::from_json(json)?)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn units(&self) -> &UnitConverter {
        &self.units
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_ready(&self) -> bool {
        self.world.is_ready()
    }

    /// Display size the walls were built for.
    pub fn bounds(&self) -> Option<(u32, u32)> {
        self.world.bounds()
    }

    pub fn wall_count(&self) -> usize {
        self.world.wall_count()
    }

    /// Replace the world with a fresh one walled in to `width` x `height`
    /// display units. All previously issued handles go stale.
    pub fn rebuild_bounds(&mut self, width: u32, height: u32) -> Result<()> {
        self.world
            .rebuild_bounds(width, height, &self.units, self.material)?;
        self.registry.clear();
        Ok(())
    }

    // === BODY API ===

    /// Create a ball for a display element whose bounding box starts at
    /// (`x`, `y`). Fails with `WorldNotInitialized` before `rebuild_bounds`.
    pub fn bind_element(&mut self, x: f32, y: f32, radius: f32) -> Result<BodyHandle> {
        rigid::bind_element(self, x, y, radius)
    }

    /// Destroy a ball. Stale or null handles yield `StaleHandle`.
    pub fn unbind_element(&mut self, handle: BodyHandle) -> Result<()> {
        rigid::unbind_element(self, handle)
    }

    pub fn is_bound(&self, handle: BodyHandle) -> bool {
        self.registry.contains(handle)
    }

    /// Display-space center and rotation; `None` means "leave the element where it is".
    pub fn pose(&self, handle: BodyHandle) -> Option<Pose> {
        rigid::pose(self, handle)
    }

    /// Material a body was created with.
    pub fn body_material(&self, handle: BodyHandle) -> Option<Material> {
        self.registry.get(handle).map(|entry| entry.material)
    }

    /// Number of live balls (walls excluded).
    pub fn body_count(&self) -> usize {
        rigid::body_count(self)
    }

    /// Live handles in creation-slot order.
    pub fn handles(&self) -> Vec<BodyHandle> {
        self.registry.handles().collect()
    }

    // === IMPULSE API ===

    pub fn apply_impulse(&mut self, handle: BodyHandle, x: f32, y: f32) -> bool {
        rigid::apply_impulse(self, handle, x, y)
    }

    /// Returns how many bodies were pushed.
    pub fn apply_impulse_to_all(&mut self, x: f32, y: f32) -> usize {
        rigid::apply_impulse_to_all(self, x, y)
    }

    // === STEPPING ===

    /// Advance exactly one fixed tick. Call once per rendered frame.
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Poses of every live ball, without stepping.
    pub fn read_poses(&self) -> Vec<TrackedPose> {
        step::read_poses(self)
    }

    pub fn advance_and_read_poses(&mut self) -> Vec<TrackedPose> {
        step::advance_and_read_poses(self)
    }

    // === SETTINGS ===

    pub fn set_material(&mut self, patch: MaterialPatch) -> Result<()> {
        settings::set_material(self, patch)
    }

    pub fn set_density(&mut self, density: f32) -> Result<()> {
        self.set_material(MaterialPatch::density(density))
    }

    pub fn set_friction(&mut self, friction: f32) -> Result<()> {
        self.set_material(MaterialPatch::friction(friction))
    }

    pub fn set_restitution(&mut self, restitution: f32) -> Result<()> {
        self.set_material(MaterialPatch::restitution(restitution))
    }

    pub fn material(&self) -> Material {
        settings::get_material(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }
}

impl Default for WorldCore<RapierEngine> {
    fn default() -> Self {
        init::create_default_world_core()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
