//! Engine-neutral body descriptions
//!
//! Bodies are described with these plain types and handed to a
//! [`PhysicsEngine`](crate::systems::engine::PhysicsEngine); nothing here
//! depends on a particular solver.

mod vec2;
mod body;

pub use vec2::Vec2;
pub use body::{BodyDef, BodyKind, Shape};
