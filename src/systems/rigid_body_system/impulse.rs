use tracing::trace;

use crate::rigid_body::Vec2;
use crate::systems::engine::PhysicsEngine;

use super::handle::BodyHandle;
use super::system::BodyRegistry;

impl<Id: Copy + Eq + std::fmt::Debug> BodyRegistry<Id> {
    /// Apply a linear impulse at the body's center and wake it.
    ///
    /// Does nothing for null or stale handles. The magnitude is not checked: a
    /// large enough impulse can carry a ball through the finite-thickness walls.
    pub fn apply_impulse<E>(&self, engine: &mut E, handle: BodyHandle, impulse: Vec2) -> bool
    where
        E: PhysicsEngine<BodyId = Id>,
    {
        let Some(entry) = self.get(handle) else {
            return false;
        };
        trace!(?handle, x = impulse.x, y = impulse.y, "impulse");
        engine.apply_impulse(entry.body, impulse, true)
    }

    /// Apply the same impulse to every live body. Returns how many received it.
    pub fn apply_impulse_to_all<E>(&self, engine: &mut E, impulse: Vec2) -> usize
    where
        E: PhysicsEngine<BodyId = Id>,
    {
        self.iter()
            .filter(|(_, entry)| engine.apply_impulse(entry.body, impulse, true))
            .count()
    }
}
