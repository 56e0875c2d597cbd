use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::units::UnitConverter;
use crate::domain::config::EngineConfig;
use crate::error::Result;
use crate::rigid_body_system::BodyRegistry;
use crate::systems::engine::{PhysicsEngine, StepParams};

use super::manager::WorldManager;
use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn create_world_core<E: PhysicsEngine>(config: EngineConfig) -> Result<WorldCore<E>> {
    config.validate()?;
    let units = UnitConverter::new(config.ratio)?;
    Ok(build(config, units))
}

/// Built from the default config, which is always valid.
pub(super) fn create_default_world_core<E: PhysicsEngine>() -> WorldCore<E> {
    build(EngineConfig::default(), UnitConverter::default())
}

fn build<E: PhysicsEngine>(config: EngineConfig, units: UnitConverter) -> WorldCore<E> {
    let params = StepParams {
        dt: config.timestep,
        velocity_iterations: config.velocity_iterations,
        position_iterations: config.position_iterations,
    };
    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    WorldCore {
        material: config.material,
        config,
        units,
        world: WorldManager::new(params),
        registry: BodyRegistry::new(),
        rng,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
