//! UnitConverter - display pixels <-> simulation units
//!
//! The physics engine works best with objects sized around one unit, while the
//! caller thinks in pixels. Every position, radius and dimension that crosses
//! the boundary goes through this linear mapping.

use crate::error::{EngineError, Result};

/// Default display units per simulation unit.
pub const DEFAULT_RATIO: f32 = 50.0;

/// Fixed-ratio linear mapping between display space and simulation space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UnitConverter {
    ratio: f32,
}

impl UnitConverter {
    /// Create a converter with `ratio` display units per simulation unit.
    ///
    /// Fails when the ratio is zero, negative or not finite.
    pub fn new(ratio: f32) -> Result<Self> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(EngineError::InvalidConfig(format!(
                "coordinate ratio must be positive and finite, got {}",
                ratio
            )));
        }
        Ok(Self { ratio })
    }

    #[inline]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Display value -> simulation value.
    #[inline]
    pub fn to_simulation(&self, display: f32) -> f32 {
        display / self.ratio
    }

    /// Simulation value -> display value.
    #[inline]
    pub fn to_display(&self, simulation: f32) -> f32 {
        simulation * self.ratio
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self { ratio: DEFAULT_RATIO }
    }
}
