use tracing::info;

use crate::core::units::UnitConverter;
use crate::domain::material::Material;
use crate::error::{EngineError, Result};
use crate::rigid_body::Vec2;
use crate::rigid_body_system::{boundary_walls, Wall};
use crate::systems::engine::{PhysicsEngine, StepParams};

/// No downward pull: walls and impulses provide all motion.
pub const GRAVITY: Vec2 = Vec2::ZERO;

/// Owns the one live engine world and its boundary walls.
pub struct WorldManager<E: PhysicsEngine> {
    engine: Option<E>,
    params: StepParams,
    walls: Vec<(Wall, E::BodyId)>,
    bounds: Option<(u32, u32)>,
}

impl<E: PhysicsEngine> WorldManager<E> {
    pub fn new(params: StepParams) -> Self {
        Self {
            engine: None,
            params,
            walls: Vec::with_capacity(4),
            bounds: None,
        }
    }

    /// Replace the world with an empty one. Every prior body is dropped.
    pub fn initialize(&mut self) {
        self.engine = Some(E::with_gravity(GRAVITY));
        self.walls.clear();
        self.bounds = None;
    }

    /// Start a fresh world walled in to `width` x `height` display units.
    ///
    /// Invalid dimensions are rejected before the current world is touched.
    pub fn rebuild_bounds(
        &mut self,
        width: u32,
        height: u32,
        units: &UnitConverter,
        material: Material,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(EngineError::InvalidDimensions { width, height });
        }

        self.initialize();
        let Some(engine) = self.engine.as_mut() else {
            return Err(EngineError::WorldNotInitialized);
        };
        for (wall, def) in boundary_walls(width, height, units, material) {
            let id = engine.create_body(&def);
            self.walls.push((wall, id));
        }
        self.bounds = Some((width, height));

        info!(width, height, ratio = units.ratio(), "rebuilt world bounds");
        Ok(())
    }

    /// Advance one fixed tick. Returns `false` when there is no world yet.
    pub fn step(&mut self) -> bool {
        match self.engine.as_mut() {
            Some(engine) => {
                engine.step(&self.params);
                true
            }
            None => false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> Option<&E> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut E> {
        self.engine.as_mut()
    }

    pub fn bounds(&self) -> Option<(u32, u32)> {
        self.bounds
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }
}
