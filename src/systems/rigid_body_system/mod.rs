//! RigidBodySystem - handles, registry, poses, impulses and boundary walls
//!
//! The registry is the only place engine body ids live. Callers hold
//! [`BodyHandle`]s, which resolve through the registry and go stale once the
//! body is destroyed or the world is rebuilt.

mod bounds;
mod handle;
mod impulse;
mod pose;
mod system;

pub use bounds::{boundary_walls, Wall};
pub use handle::BodyHandle;
pub use pose::{degrees_from_radians, Pose, TrackedPose};
pub use system::{BodyEntry, BodyRegistry};
