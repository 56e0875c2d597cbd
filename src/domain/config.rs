//! EngineConfig - tuning constants for stepping and unit mapping
//!
//! Loaded from camelCase JSON the same way content bundles are; every field is
//! optional and falls back to the documented default.

use serde::{Deserialize, Serialize};

use crate::core::units::DEFAULT_RATIO;
use crate::error::{EngineError, Result};

use super::material::Material;

pub const DEFAULT_TIMESTEP: f32 = 1.0 / 60.0;
pub const DEFAULT_VELOCITY_ITERATIONS: usize = 5;
pub const DEFAULT_POSITION_ITERATIONS: usize = 20;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Fixed tick length in seconds
    pub timestep: f32,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
    /// Display units per simulation unit
    pub ratio: f32,
    /// Material applied to walls and new bodies
    pub material: Material,
    /// Seed for the initial-velocity RNG; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.timestep.is_finite() || self.timestep <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        if !self.ratio.is_finite() || self.ratio <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "coordinate ratio must be positive, got {}",
                self.ratio
            )));
        }
        if self.velocity_iterations == 0 {
            return Err(EngineError::InvalidConfig(
                "velocity iterations must be at least 1".to_string(),
            ));
        }
        self.material.validate()
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            velocity_iterations: DEFAULT_VELOCITY_ITERATIONS,
            position_iterations: DEFAULT_POSITION_ITERATIONS,
            ratio: DEFAULT_RATIO,
            material: Material::default(),
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = EngineConfig::from_json("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.velocity_iterations, 5);
        assert_eq!(config.position_iterations, 20);
        assert_eq!(config.ratio, 50.0);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{"ratio": 2.625, "material": {"density": 1.0}, "seed": 7}"#;
        let config = EngineConfig::from_json(json).unwrap();
        assert_eq!(config.ratio, 2.625);
        assert_eq!(config.material.density, 1.0);
        assert_eq!(config.material.friction, 0.8);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn invalid_values_fail_fast() {
        assert!(EngineConfig::from_json(r#"{"ratio": 0}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"timestep": -1}"#).is_err());
        assert!(EngineConfig::from_json(r#"{"velocityIterations": 0}"#).is_err());
        assert!(EngineConfig::from_json("not json").is_err());
    }

    #[test]
    fn zero_position_iterations_is_allowed() {
        let config = EngineConfig::from_json(r#"{"positionIterations": 0}"#).unwrap();
        assert_eq!(config.position_iterations, 0);
        assert_eq!(config.velocity_iterations, 5);
    }
}
