use tracing::warn;

use crate::domain::material::{Material, MaterialPatch};
use crate::error::Result;
use crate::systems::engine::PhysicsEngine;

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics<E: PhysicsEngine>(world: &mut WorldCore<E>, enabled: bool) {
    world.perf_enabled = enabled;
}

pub(super) fn get_perf_stats<E: PhysicsEngine>(world: &WorldCore<E>) -> PerfStats {
    world.perf_stats.clone()
}

/// Patch the material used for future bodies. Existing bodies keep theirs.
pub(super) fn set_material<E: PhysicsEngine>(world: &mut WorldCore<E>, patch: MaterialPatch) -> Result<()> {
    let next = world.material.patched(patch);
    if let Err(err) = next.validate() {
        warn!(%err, "rejected material update");
        return Err(err);
    }
    world.material = next;
    Ok(())
}

pub(super) fn get_material<E: PhysicsEngine>(world: &WorldCore<E>) -> Material {
    world.material
}
