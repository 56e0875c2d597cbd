use crate::domain::material::Material;

use super::vec2::Vec2;

/// Whether the solver may move a body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Immovable collider (walls)
    Static,
    /// Integrated every step (balls)
    Dynamic,
}

/// Collision geometry, in simulation units
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Circle { radius: f32 },
    /// Axis-aligned box given by half extents
    Box { half_width: f32, half_height: f32 },
}

/// Everything an engine needs to create one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDef {
    pub kind: BodyKind,
    pub shape: Shape,
    /// Center of the body (simulation space)
    pub position: Vec2,
    /// Initial linear velocity (units per second)
    pub linear_velocity: Vec2,
    pub material: Material,
}

impl BodyDef {
    /// Static box centered at (x, y) with the given half extents
    pub fn new_rect(x: f32, y: f32, half_width: f32, half_height: f32, material: Material) -> Self {
        Self {
            kind: BodyKind::Static,
            shape: Shape::Box { half_width, half_height },
            position: Vec2::new(x, y),
            linear_velocity: Vec2::zero(),
            material,
        }
    }

    /// Dynamic circle centered at (x, y)
    pub fn new_circle(x: f32, y: f32, radius: f32, material: Material) -> Self {
        Self {
            kind: BodyKind::Dynamic,
            shape: Shape::Circle { radius },
            position: Vec2::new(x, y),
            linear_velocity: Vec2::zero(),
            material,
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.linear_velocity = velocity;
        self
    }
}
