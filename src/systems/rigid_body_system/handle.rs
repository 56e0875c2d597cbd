use serde::{Deserialize, Serialize};

/// Opaque caller-held reference to a dynamic body.
///
/// A generational slot id: the slot index plus the generation it was issued
/// for. Destroying the body or rebuilding the world bumps the generation, so
/// an old handle never aliases a newer body. Generations start at 1, so the
/// all-zero value is never live and serves as the null handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    pub const NULL: BodyHandle = BodyHandle { index: 0, generation: 0 };

    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn is_null(&self) -> bool {
        self.generation == 0
    }

    /// Pack into a single integer (generation in the high half).
    pub fn to_bits(self) -> u64 {
        ((self.generation as u64) << 32) | self.index as u64
    }

    pub fn from_bits(bits: u64) -> Self {
        Self {
            index: bits as u32,
            generation: (bits >> 32) as u32,
        }
    }
}

impl Default for BodyHandle {
    fn default() -> Self {
        Self::NULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_round_trip() {
        let h = BodyHandle::new(7, 3);
        assert_eq!(BodyHandle::from_bits(h.to_bits()), h);
        assert_eq!(h.to_bits(), (3u64 << 32) | 7);
    }

    #[test]
    fn null_handle_is_zero() {
        assert!(BodyHandle::NULL.is_null());
        assert_eq!(BodyHandle::NULL.to_bits(), 0);
        assert!(BodyHandle::from_bits(0).is_null());
        assert!(!BodyHandle::new(0, 1).is_null());
    }
}
