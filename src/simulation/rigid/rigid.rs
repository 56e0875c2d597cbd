use crate::error::{EngineError, Result};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{BodyHandle, Pose};
use crate::systems::engine::PhysicsEngine;

use super::WorldCore;

pub(super) fn bind_element<E: PhysicsEngine>(
    world: &mut WorldCore<E>,
    x: f32,
    y: f32,
    radius: f32,
) -> Result<BodyHandle> {
    let Some(engine) = world.world.engine_mut() else {
        return Err(EngineError::WorldNotInitialized);
    };
    world.registry.create_body(
        engine,
        &world.units,
        world.material,
        &mut world.rng,
        x,
        y,
        radius,
    )
}

pub(super) fn unbind_element<E: PhysicsEngine>(world: &mut WorldCore<E>, handle: BodyHandle) -> Result<()> {
    let Some(engine) = world.world.engine_mut() else {
        return Err(EngineError::StaleHandle(handle));
    };
    world.registry.destroy_body(engine, handle)
}

pub(super) fn pose<E: PhysicsEngine>(world: &WorldCore<E>, handle: BodyHandle) -> Option<Pose> {
    let engine = world.world.engine()?;
    world.registry.pose(engine, &world.units, handle)
}

pub(super) fn apply_impulse<E: PhysicsEngine>(world: &mut WorldCore<E>, handle: BodyHandle, x: f32, y: f32) -> bool {
    match world.world.engine_mut() {
        Some(engine) => world.registry.apply_impulse(engine, handle, Vec2::new(x, y)),
        None => false,
    }
}

pub(super) fn apply_impulse_to_all<E: PhysicsEngine>(world: &mut WorldCore<E>, x: f32, y: f32) -> usize {
    match world.world.engine_mut() {
        Some(engine) => world.registry.apply_impulse_to_all(engine, Vec2::new(x, y)),
        None => 0,
    }
}

pub(super) fn body_count<E: PhysicsEngine>(world: &WorldCore<E>) -> usize {
    world.registry.len()
}
