use crate::rigid_body_system::TrackedPose;
use crate::systems::engine::PhysicsEngine;

use super::{PerfTimer, WorldCore};

/// Advance the world by one fixed tick. No-op until bounds exist.
pub(super) fn step<E: PhysicsEngine>(world: &mut WorldCore<E>) {
    let timer = world.perf_enabled.then(PerfTimer::start);

    if !world.world.step() {
        return;
    }
    world.frame += 1;

    if let Some(timer) = timer {
        let stats = &mut world.perf_stats;
        stats.reset();
        stats.step_ms = timer.elapsed_ms();
        stats.body_count = world.registry.len() as u32;
        stats.wall_count = world.world.wall_count() as u32;
        stats.frame = world.frame;
    }
}

pub(super) fn read_poses<E: PhysicsEngine>(world: &WorldCore<E>) -> Vec<TrackedPose> {
    match world.world.engine() {
        Some(engine) => world.registry.poses(engine, &world.units),
        None => Vec::new(),
    }
}

/// One tick, then every tracked pose.
pub(super) fn advance_and_read_poses<E: PhysicsEngine>(world: &mut WorldCore<E>) -> Vec<TrackedPose> {
    step(world);
    read_poses(world)
}
