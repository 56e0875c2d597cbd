//! PhysicsEngine - the seam between the world and the solver
//!
//! The world, registry and facade only talk to the solver through this trait,
//! so no solver types reach callers. [`RapierEngine`] is the stock backend.

use std::fmt::Debug;

use crate::rigid_body::{BodyDef, Vec2};

mod rapier;

pub use self::rapier::RapierEngine;

/// Per-tick integration settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    /// Tick length in seconds
    pub dt: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
}

/// A 2D rigid-body world.
pub trait PhysicsEngine {
    /// Engine-side body reference. Only ever stored inside the registry.
    type BodyId: Copy + Eq + Debug;

    /// Create an empty world with the given gravity.
    fn with_gravity(gravity: Vec2) -> Self
    where
        Self: Sized;

    fn create_body(&mut self, def: &BodyDef) -> Self::BodyId;

    /// Remove a body. Returns `false` if it was not present.
    fn destroy_body(&mut self, id: Self::BodyId) -> bool;

    /// Advance exactly one tick.
    fn step(&mut self, params: &StepParams);

    /// Center of the body in simulation space.
    fn position(&self, id: Self::BodyId) -> Option<Vec2>;

    /// Rotation in radians.
    fn angle(&self, id: Self::BodyId) -> Option<f32>;

    fn linear_velocity(&self, id: Self::BodyId) -> Option<Vec2>;

    /// Apply a linear impulse through the center of mass.
    fn apply_impulse(&mut self, id: Self::BodyId, impulse: Vec2, wake: bool) -> bool;

    /// Number of bodies (static and dynamic) in the world.
    fn body_count(&self) -> usize;
}
