use rand::Rng;
use tracing::{debug, warn};

use crate::core::units::UnitConverter;
use crate::domain::material::Material;
use crate::error::{EngineError, Result};
use crate::rigid_body::{BodyDef, Vec2};
use crate::systems::engine::PhysicsEngine;

use super::handle::BodyHandle;
use super::pose::{degrees_from_radians, Pose, TrackedPose};

/// Per-body bookkeeping kept alongside the engine body.
#[derive(Clone, Copy, Debug)]
pub struct BodyEntry<Id> {
    pub(crate) body: Id,
    /// Radius in simulation units
    pub radius: f32,
    /// Material the body was created with
    pub material: Material,
}

struct Slot<Id> {
    generation: u32,
    entry: Option<BodyEntry<Id>>,
}

/// Maps caller handles to engine bodies.
///
/// Slots are reused after destruction; each reuse carries a new generation so
/// handles to the old occupant stop resolving.
pub struct BodyRegistry<Id> {
    slots: Vec<Slot<Id>>,
    free: Vec<u32>,
    live: usize,
}

impl<Id: Copy> BodyRegistry<Id> {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Store an engine body and issue a handle for it.
    pub fn insert(&mut self, body: Id, radius: f32, material: Material) -> BodyHandle {
        let entry = Some(BodyEntry { body, radius, material });
        self.live += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entry = entry;
            return BodyHandle::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot { generation: 1, entry });
        BodyHandle::new(index, 1)
    }

    /// Release a handle's slot, returning what it held.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<BodyEntry<Id>> {
        let slot = self.slot_mut(handle)?;
        let entry = slot.entry.take()?;
        slot.generation = next_generation(slot.generation);
        self.free.push(handle.index());
        self.live -= 1;
        Some(entry)
    }

    pub fn get(&self, handle: BodyHandle) -> Option<&BodyEntry<Id>> {
        let slot = self.slots.get(handle.index() as usize)?;
        if slot.generation != handle.generation() {
            return None;
        }
        slot.entry.as_ref()
    }

    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Invalidate every handle. Used when the world is replaced.
    pub fn clear(&mut self) {
        self.free.clear();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.entry.take().is_some() {
                slot.generation = next_generation(slot.generation);
            }
            self.free.push(index as u32);
        }
        // Hand out low indices first
        self.free.reverse();
        self.live = 0;
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Live handles in slot order.
    pub fn handles(&self) -> impl Iterator<Item = BodyHandle> + '_ {
        self.iter().map(|(handle, _)| handle)
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyHandle, &BodyEntry<Id>)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            slot.entry
                .as_ref()
                .map(|entry| (BodyHandle::new(index as u32, slot.generation), entry))
        })
    }

    fn slot_mut(&mut self, handle: BodyHandle) -> Option<&mut Slot<Id>> {
        let slot = self.slots.get_mut(handle.index() as usize)?;
        (slot.generation == handle.generation()).then_some(slot)
    }
}

impl<Id: Copy> Default for BodyRegistry<Id> {
    fn default() -> Self {
        Self::new()
    }
}

fn next_generation(generation: u32) -> u32 {
    match generation.wrapping_add(1) {
        0 => 1,
        g => g,
    }
}

impl<Id: Copy + Eq + std::fmt::Debug> BodyRegistry<Id> {
    /// Create a dynamic ball whose bounding box has its top-left corner at
    /// (`x`, `y`) in display space.
    ///
    /// The ball starts with a random velocity, each component uniform in [0, 1).
    #[allow(clippy::too_many_arguments)]
    pub fn create_body<E, R>(
        &mut self,
        engine: &mut E,
        units: &UnitConverter,
        material: Material,
        rng: &mut R,
        x: f32,
        y: f32,
        radius: f32,
    ) -> Result<BodyHandle>
    where
        E: PhysicsEngine<BodyId = Id>,
        R: Rng,
    {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(EngineError::InvalidRadius(radius));
        }

        let sim_radius = units.to_simulation(radius);
        let center_x = units.to_simulation(x + radius);
        let center_y = units.to_simulation(y + radius);
        let velocity = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());

        let def = BodyDef::new_circle(center_x, center_y, sim_radius, material).with_velocity(velocity);
        let body = engine.create_body(&def);
        let handle = self.insert(body, sim_radius, material);

        debug!(?handle, center_x, center_y, sim_radius, "created body");
        Ok(handle)
    }

    /// Remove a body from both the registry and the engine.
    pub fn destroy_body<E>(&mut self, engine: &mut E, handle: BodyHandle) -> Result<()>
    where
        E: PhysicsEngine<BodyId = Id>,
    {
        let Some(entry) = self.remove(handle) else {
            warn!(?handle, "destroy on stale handle");
            return Err(EngineError::StaleHandle(handle));
        };
        engine.destroy_body(entry.body);
        debug!(?handle, "destroyed body");
        Ok(())
    }

    /// Current display-space pose, or `None` if the handle is null or stale.
    pub fn pose<E>(&self, engine: &E, units: &UnitConverter, handle: BodyHandle) -> Option<Pose>
    where
        E: PhysicsEngine<BodyId = Id>,
    {
        let entry = self.get(handle)?;
        let pos = engine.position(entry.body)?;
        let angle = engine.angle(entry.body)?;
        Some(Pose {
            x: units.to_display(pos.x),
            y: units.to_display(pos.y),
            angle_degrees: degrees_from_radians(angle),
        })
    }

    /// Poses of every live body in slot order.
    pub fn poses<E>(&self, engine: &E, units: &UnitConverter) -> Vec<TrackedPose>
    where
        E: PhysicsEngine<BodyId = Id>,
    {
        self.handles()
            .filter_map(|handle| {
                self.pose(engine, units, handle)
                    .map(|pose| TrackedPose { handle, pose })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removed_handles_go_stale() {
        let mut reg: BodyRegistry<u32> = BodyRegistry::new();
        let a = reg.insert(10, 1.0, Material::default());
        assert!(reg.contains(a));
        assert_eq!(reg.remove(a).map(|e| e.body), Some(10));
        assert!(!reg.contains(a));
        assert!(reg.remove(a).is_none());
        assert!(reg.is_empty());
    }

    #[test]
    fn reused_slot_gets_new_generation() {
        let mut reg: BodyRegistry<u32> = BodyRegistry::new();
        let a = reg.insert(1, 1.0, Material::default());
        reg.remove(a);
        let b = reg.insert(2, 1.0, Material::default());
        assert_eq!(a.index(), b.index());
        assert_ne!(a.generation(), b.generation());
        assert!(reg.get(a).is_none());
        assert_eq!(reg.get(b).map(|e| e.body), Some(2));
    }

    #[test]
    fn clear_invalidates_everything() {
        let mut reg: BodyRegistry<u32> = BodyRegistry::new();
        let handles: Vec<_> = (0..4).map(|i| reg.insert(i, 1.0, Material::default())).collect();
        reg.clear();
        assert_eq!(reg.len(), 0);
        assert!(handles.iter().all(|h| !reg.contains(*h)));

        let fresh = reg.insert(9, 1.0, Material::default());
        assert_eq!(fresh.index(), 0);
        assert!(!handles.contains(&fresh));
    }

    #[test]
    fn null_handle_never_resolves() {
        let mut reg: BodyRegistry<u32> = BodyRegistry::new();
        reg.insert(1, 1.0, Material::default());
        assert!(reg.get(BodyHandle::NULL).is_none());
    }

    #[test]
    fn iter_yields_live_bodies_in_slot_order() {
        let mut reg: BodyRegistry<u32> = BodyRegistry::new();
        let a = reg.insert(1, 1.0, Material::default());
        let b = reg.insert(2, 1.0, Material::default());
        let c = reg.insert(3, 1.0, Material::default());
        reg.remove(b);
        let live: Vec<_> = reg.handles().collect();
        assert_eq!(live, vec![a, c]);
    }
}
