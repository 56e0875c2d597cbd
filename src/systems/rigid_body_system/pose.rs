use std::f32::consts::PI;

use serde::Serialize;

use super::handle::BodyHandle;

/// Display-space placement of a body: its center and rotation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    /// Rotation in degrees, always in [0, 360)
    pub angle_degrees: f32,
}

impl Pose {
    /// Top-left corner for drawing an element of the given radius at this pose.
    pub fn top_left(&self, radius: f32) -> (f32, f32) {
        (self.x - radius, self.y - radius)
    }
}

/// A pose tagged with the handle it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TrackedPose {
    pub handle: BodyHandle,
    pub pose: Pose,
}

/// Radians -> degrees in [0, 360).
pub fn degrees_from_radians(angle: f32) -> f32 {
    let deg = (angle / PI * 180.0).rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}
