//! One slot's key cell and its compare-and-swap discipline.
//!
//! The cell stores the key's integer view in an `AtomicCell`, which
//! compares bit patterns, never `PartialEq`. A slot array built from these
//! cells gets the sentinel contract for free; probing and storage layout
//! stay with the map.

use core::fmt;

use crossbeam_utils::atomic::AtomicCell;

use crate::bits::SlotBits;
use crate::probe::SlotState;
use crate::registry::Sentinels;

/// Slot key that concurrent writers update with a single CAS.
///
/// Transitions follow the tombstone protocol:
///
/// ```text
///   empty ----claim----> live(k) ----erase----> erased
///                          ^                      |
///                          └--------claim---------┘
/// ```
pub struct AtomicSlotKey<K: SlotBits> {
    bits: AtomicCell<K::Bits>,
}

impl<K: SlotBits> AtomicSlotKey<K> {
    pub fn new(key: K) -> Self {
        Self {
            bits: AtomicCell::new(key.to_bits()),
        }
    }

    /// A cell holding the empty-key marker.
    pub fn empty<V: SlotBits>(sentinels: &Sentinels<K, V>) -> Self {
        Self::new(sentinels.empty_key())
    }

    /// Whether the cell is a native atomic of the key's width. When this is
    /// false `AtomicCell` falls back to a global array of sequence locks.
    pub fn is_lock_free() -> bool {
        AtomicCell::<K::Bits>::is_lock_free()
    }

    #[inline]
    pub fn load(&self) -> K {
        K::from_bits(self.bits.load())
    }

    #[inline]
    pub fn state<V: SlotBits>(&self, sentinels: &Sentinels<K, V>) -> SlotState {
        sentinels.classify(self.load())
    }

    /// Bitwise CAS. Returns the previous key on success and the observed
    /// key on failure.
    #[inline]
    pub fn compare_exchange(&self, current: K, new: K) -> Result<K, K> {
        self.bits
            .compare_exchange(current.to_bits(), new.to_bits())
            .map(K::from_bits)
            .map_err(K::from_bits)
    }

    /// Writes `key` into an empty or erased slot.
    ///
    /// On failure returns the key found in the slot: a live key, or a
    /// marker that changed under us if another writer got there first.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `key` has the bit pattern of the empty-key
    /// or erased-key marker. Release builds do not check; writing such a key
    /// is the caller-obligation violation described on [`Sentinels`].
    pub fn try_claim<V: SlotBits>(&self, sentinels: &Sentinels<K, V>, key: K) -> Result<(), K> {
        debug_assert!(
            !sentinels.is_reserved_key(key),
            "user key collides with a sentinel"
        );
        match self.compare_exchange(sentinels.empty_key(), key) {
            Ok(_) => Ok(()),
            Err(seen) if sentinels.is_erased_key(seen) => {
                self.compare_exchange(seen, key).map(|_| ())
            }
            Err(seen) => Err(seen),
        }
    }

    /// Replaces `key` with the erased-key marker.
    ///
    /// Fails with the observed key when the slot no longer holds `key`.
    pub fn try_erase<V: SlotBits>(&self, sentinels: &Sentinels<K, V>, key: K) -> Result<(), K> {
        self.compare_exchange(key, sentinels.erased_key()).map(|_| ())
    }
}

impl<K: SlotBits> fmt::Debug for AtomicSlotKey<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicSlotKey")
            .field("bits", &self.bits.load())
            .finish()
    }
}
