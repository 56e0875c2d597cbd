//! Material - surface and mass properties applied to every new body
//!
//! Held by the world as mutable configuration. Changing it only affects bodies
//! created afterwards; existing bodies keep the material they were built with.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

pub const DEFAULT_DENSITY: f32 = 0.5;
pub const DEFAULT_FRICTION: f32 = 0.8;
pub const DEFAULT_RESTITUTION: f32 = 0.6;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Material {
    /// Mass per unit area (simulation units)
    pub density: f32,
    /// Coulomb friction coefficient
    pub friction: f32,
    /// Bounciness (0.0 = no bounce, 1.0 = full elastic)
    pub restitution: f32,
}

impl Material {
    pub fn new(density: f32, friction: f32, restitution: f32) -> Self {
        Self { density, friction, restitution }
    }

    pub fn validate(&self) -> Result<()> {
        check_non_negative("density", self.density)?;
        check_non_negative("friction", self.friction)?;
        check_non_negative("restitution", self.restitution)?;
        Ok(())
    }

    /// Apply a partial update, returning the patched material.
    pub fn patched(&self, patch: MaterialPatch) -> Self {
        Self {
            density: patch.density.unwrap_or(self.density),
            friction: patch.friction.unwrap_or(self.friction),
            restitution: patch.restitution.unwrap_or(self.restitution),
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            density: DEFAULT_DENSITY,
            friction: DEFAULT_FRICTION,
            restitution: DEFAULT_RESTITUTION,
        }
    }
}

/// Partial material update; `None` leaves a property unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friction: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restitution: Option<f32>,
}

impl MaterialPatch {
    pub fn density(density: f32) -> Self {
        Self { density: Some(density), ..Self::default() }
    }

    pub fn friction(friction: f32) -> Self {
        Self { friction: Some(friction), ..Self::default() }
    }

    pub fn restitution(restitution: f32) -> Self {
        Self { restitution: Some(restitution), ..Self::default() }
    }
}

fn check_non_negative(name: &str, value: f32) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EngineError::InvalidConfig(format!(
            "{} must be non-negative and finite, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let m = Material::default();
        assert_eq!(m.density, 0.5);
        assert_eq!(m.friction, 0.8);
        assert_eq!(m.restitution, 0.6);
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let m = Material::default().patched(MaterialPatch::density(1.0));
        assert_eq!(m, Material::new(1.0, 0.8, 0.6));
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(Material::new(-0.1, 0.8, 0.6).validate().is_err());
        assert!(Material::new(0.5, f32::INFINITY, 0.6).validate().is_err());
        assert!(Material::default().validate().is_ok());
    }
}
