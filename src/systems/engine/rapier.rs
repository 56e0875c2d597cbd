use std::num::NonZeroUsize;

use rapier2d::prelude::*;

use crate::rigid_body::{BodyDef, BodyKind, Shape, Vec2};

use super::{PhysicsEngine, StepParams};

/// rapier2d-backed world.
pub struct RapierEngine {
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl RapierEngine {
    fn apply_params(&mut self, params: &StepParams) {
        let ip = &mut self.integration_parameters;
        ip.dt = params.dt;
        // Velocity iterations set the solver iterations per step, position
        // iterations the extra stabilization passes. Zero stabilization is valid.
        ip.num_solver_iterations =
            NonZeroUsize::new(params.velocity_iterations).unwrap_or(NonZeroUsize::MIN);
        ip.num_internal_stabilization_iterations = params.position_iterations;
    }
}

impl PhysicsEngine for RapierEngine {
    type BodyId = RigidBodyHandle;

    fn with_gravity(gravity: Vec2) -> Self {
        Self {
            gravity: vector![gravity.x, gravity.y],
            integration_parameters: IntegrationParameters::default(),
            pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    fn create_body(&mut self, def: &BodyDef) -> RigidBodyHandle {
        let builder = match def.kind {
            BodyKind::Static => RigidBodyBuilder::fixed(),
            BodyKind::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let body = builder
            .translation(vector![def.position.x, def.position.y])
            .linvel(vector![def.linear_velocity.x, def.linear_velocity.y])
            .build();
        let handle = self.bodies.insert(body);

        let collider = match def.shape {
            Shape::Circle { radius } => ColliderBuilder::ball(radius),
            Shape::Box { half_width, half_height } => ColliderBuilder::cuboid(half_width, half_height),
        }
        .density(def.material.density)
        .friction(def.material.friction)
        .restitution(def.material.restitution)
        .build();
        self.colliders
            .insert_with_parent(collider, handle, &mut self.bodies);

        handle
    }

    fn destroy_body(&mut self, id: RigidBodyHandle) -> bool {
        self.bodies
            .remove(
                id,
                &mut self.island_manager,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                true,
            )
            .is_some()
    }

    fn step(&mut self, params: &StepParams) {
        self.apply_params(params);
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    fn position(&self, id: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(id).map(|rb| {
            let t = rb.translation();
            Vec2::new(t.x, t.y)
        })
    }

    fn angle(&self, id: RigidBodyHandle) -> Option<f32> {
        self.bodies.get(id).map(|rb| rb.rotation().angle())
    }

    fn linear_velocity(&self, id: RigidBodyHandle) -> Option<Vec2> {
        self.bodies.get(id).map(|rb| {
            let v = rb.linvel();
            Vec2::new(v.x, v.y)
        })
    }

    fn apply_impulse(&mut self, id: RigidBodyHandle, impulse: Vec2, wake: bool) -> bool {
        match self.bodies.get_mut(id) {
            Some(rb) => {
                rb.apply_impulse(vector![impulse.x, impulse.y], wake);
                true
            }
            None => false,
        }
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::material::Material;
    use approx::assert_relative_eq;

    fn params() -> StepParams {
        StepParams { dt: 1.0 / 60.0, velocity_iterations: 5, position_iterations: 20 }
    }

    #[test]
    fn zero_gravity_keeps_resting_body_in_place() {
        let mut engine = RapierEngine::with_gravity(Vec2::zero());
        let id = engine.create_body(&BodyDef::new_circle(2.0, 3.0, 0.4, Material::default()));
        for _ in 0..30 {
            engine.step(&params());
        }
        let pos = engine.position(id).unwrap();
        assert!((pos.x - 2.0).abs() < 1e-4);
        assert!((pos.y - 3.0).abs() < 1e-4);
    }

    #[test]
    fn impulse_changes_velocity() {
        let mut engine = RapierEngine::with_gravity(Vec2::zero());
        let id = engine.create_body(&BodyDef::new_circle(0.0, 0.0, 0.5, Material::default()));
        assert!(engine.apply_impulse(id, Vec2::new(1.0, 0.0), true));
        engine.step(&params());
        assert!(engine.linear_velocity(id).unwrap().x > 0.0);
        assert!(engine.position(id).unwrap().x > 0.0);
    }

    #[test]
    fn collider_density_sets_body_mass() {
        let mut engine = RapierEngine::with_gravity(Vec2::zero());
        let light = Material { density: 0.5, ..Material::default() };
        let heavy = Material { density: 1.0, ..Material::default() };
        let a = engine.create_body(&BodyDef::new_circle(-2.0, 0.0, 0.4, light));
        let b = engine.create_body(&BodyDef::new_circle(2.0, 0.0, 0.4, heavy));
        engine.step(&params());

        let mass_a = engine.bodies[a].mass();
        let mass_b = engine.bodies[b].mass();
        assert_relative_eq!(mass_a, std::f32::consts::PI * 0.16 * 0.5, max_relative = 1e-4);
        assert_relative_eq!(mass_b / mass_a, 2.0, max_relative = 1e-4);
    }

    #[test]
    fn destroyed_body_is_gone() {
        let mut engine = RapierEngine::with_gravity(Vec2::zero());
        let id = engine.create_body(&BodyDef::new_circle(0.0, 0.0, 0.5, Material::default()));
        assert_eq!(engine.body_count(), 1);
        assert!(engine.destroy_body(id));
        assert!(!engine.destroy_body(id));
        assert_eq!(engine.body_count(), 0);
        assert!(engine.position(id).is_none());
        assert!(!engine.apply_impulse(id, Vec2::new(1.0, 0.0), true));
    }
}
