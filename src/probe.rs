//! Turning a slot's key into a probe decision.
//!
//! Sentinel checks always run first and always compare bits. A map's own
//! key equality never sees a sentinel.

use crate::bits::{bits_eq, SlotBits};
use crate::registry::Sentinels;

/// Occupancy of a slot as seen through its key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotState {
    /// Never written. Probe sequences may end here.
    Empty,
    /// Held an entry that was erased. Probe sequences pass through.
    Erased,
    /// Holds a user key.
    Live,
}

impl SlotState {
    /// Whether an insert may write into a slot in this state.
    #[inline]
    pub fn is_available(self) -> bool {
        !matches!(self, SlotState::Live)
    }
}

/// What a probe should do after inspecting one slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProbeStep {
    /// The key is in this slot.
    Found,
    /// Move to the next slot in the probe sequence.
    Continue,
    /// End of the sequence: the key is absent.
    Stop,
    /// An insert may claim this slot.
    Available,
}

impl<K: SlotBits, V: SlotBits> Sentinels<K, V> {
    #[inline]
    pub fn classify(&self, slot_key: K) -> SlotState {
        if self.is_empty_key(slot_key) {
            SlotState::Empty
        } else if self.is_erased_key(slot_key) {
            SlotState::Erased
        } else {
            SlotState::Live
        }
    }

    /// Decision for find and contains.
    ///
    /// Only an empty slot ends the search. A tombstone yields
    /// [`ProbeStep::Continue`] because the key may have been placed further
    /// along the sequence before the tombstoned entry was erased.
    #[inline]
    pub fn probe_for_find(&self, probe: K, slot_key: K) -> ProbeStep {
        match self.classify(slot_key) {
            SlotState::Empty => ProbeStep::Stop,
            SlotState::Erased => ProbeStep::Continue,
            SlotState::Live if bits_eq(probe, slot_key) => ProbeStep::Found,
            SlotState::Live => ProbeStep::Continue,
        }
    }

    /// Decision for insert. Empty and erased slots are both claimable.
    #[inline]
    pub fn probe_for_insert(&self, probe: K, slot_key: K) -> ProbeStep {
        match self.classify(slot_key) {
            SlotState::Empty | SlotState::Erased => ProbeStep::Available,
            SlotState::Live if bits_eq(probe, slot_key) => ProbeStep::Found,
            SlotState::Live => ProbeStep::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentinels() -> Sentinels<i32, i32> {
        Sentinels::with_reserved_empty_value(-1, -2).unwrap()
    }

    #[test]
    fn classify_each_state() {
        let s = sentinels();
        assert_eq!(s.classify(-1), SlotState::Empty);
        assert_eq!(s.classify(-2), SlotState::Erased);
        assert_eq!(s.classify(5), SlotState::Live);
        assert!(SlotState::Erased.is_available());
        assert!(!SlotState::Live.is_available());
    }

    #[test]
    fn find_passes_tombstones_and_stops_at_empty() {
        let s = sentinels();
        assert_eq!(s.probe_for_find(5, -2), ProbeStep::Continue);
        assert_eq!(s.probe_for_find(5, -1), ProbeStep::Stop);
        assert_eq!(s.probe_for_find(5, 5), ProbeStep::Found);
        assert_eq!(s.probe_for_find(5, 6), ProbeStep::Continue);
    }

    #[test]
    fn insert_reuses_tombstones() {
        let s = sentinels();
        assert_eq!(s.probe_for_insert(5, -2), ProbeStep::Available);
        assert_eq!(s.probe_for_insert(5, -1), ProbeStep::Available);
        assert_eq!(s.probe_for_insert(5, 5), ProbeStep::Found);
        assert_eq!(s.probe_for_insert(5, 7), ProbeStep::Continue);
    }

    #[test]
    fn float_probe_uses_bits() {
        let s: Sentinels<f32, u8> = Sentinels::reserved();
        assert_eq!(s.probe_for_find(0.0, -0.0), ProbeStep::Continue);
        assert_eq!(s.probe_for_find(f32::NAN, f32::NAN), ProbeStep::Found);
    }
}
