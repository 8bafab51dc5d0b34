//! The sentinel registry: one validated set of markers per map.

use crate::bits::{bits_eq, SlotBits};
use crate::builder::SentinelsBuilder;
use crate::error::SentinelError;
use crate::reserved::ReservedSentinels;
use crate::sentinel::{EmptyKey, EmptyValue, ErasedKey};

/// Checks that the empty-key and erased-key markers differ bitwise.
///
/// Every `Sentinels` constructor runs this before returning, so a map that
/// holds a `Sentinels` never needs to call it again.
pub fn validate<K: SlotBits>(
    empty_key: &EmptyKey<K>,
    erased_key: &ErasedKey<K>,
) -> Result<(), SentinelError> {
    if empty_key.bits() == erased_key.bits() {
        return Err(SentinelError::Collision {
            bits: empty_key.bits().into(),
        });
    }
    Ok(())
}

/// The three markers of an open-addressing map.
///
/// A `Sentinels` value is immutable. There are no setters and every field is
/// private, so the markers a map was built with are the markers every probe
/// compares against for the map's whole life. It is `Copy` and holds no
/// pointers; hand it to worker threads by value or by `&`.
///
/// # Caller obligation
///
/// No key inserted into the map may have the bit pattern of
/// [`empty_key`](Self::empty_key) or [`erased_key`](Self::erased_key).
/// Inserting one is undefined behavior at the map level: the entry is
/// indistinguishable from a free slot or a tombstone, and concurrent
/// inserts may overwrite it. The registry cannot check this on every insert
/// without taxing the hot path. Use [`Sentinels::reserved`] to pick
/// type-extremal markers, or [`Sentinels::check_user_key`] where the cost is
/// acceptable.
#[derive(Clone, Copy, Debug)]
pub struct Sentinels<K, V> {
    empty_key: EmptyKey<K>,
    empty_value: EmptyValue<V>,
    erased_key: ErasedKey<K>,
}

impl<K: SlotBits, V: SlotBits> Sentinels<K, V> {
    /// Builds a registry from explicit markers.
    ///
    /// Fails with [`SentinelError::Collision`] when `empty_key` and
    /// `erased_key` share a bit pattern.
    pub fn new(
        empty_key: EmptyKey<K>,
        empty_value: EmptyValue<V>,
        erased_key: ErasedKey<K>,
    ) -> Result<Self, SentinelError> {
        let sentinels = Self {
            empty_key,
            empty_value,
            erased_key,
        };
        match sentinels.validate() {
            Ok(()) => {
                #[cfg(feature = "logging")]
                log::debug!(
                    "sentinels accepted: empty key {:#x}, erased key {:#x}, empty value {:#x}",
                    Into::<u64>::into(empty_key.bits()),
                    Into::<u64>::into(erased_key.bits()),
                    Into::<u64>::into(empty_value.bits())
                );
                Ok(sentinels)
            }
            Err(e) => {
                #[cfg(feature = "logging")]
                log::error!("rejected sentinel configuration: {e}");
                Err(e)
            }
        }
    }

    /// Explicit key markers with the reserved empty value.
    pub fn with_reserved_empty_value(empty_key: K, erased_key: K) -> Result<Self, SentinelError>
    where
        V: ReservedSentinels,
    {
        Self::new(
            EmptyKey::new(empty_key),
            EmptyValue::new(V::EMPTY),
            ErasedKey::new(erased_key),
        )
    }

    /// Type-extremal markers for keys and values.
    ///
    /// Infallible: [`ReservedSentinels`] is implemented only inside this
    /// crate, and every one of its `EMPTY`/`ERASED` pairs is distinct.
    pub fn reserved() -> Self
    where
        K: ReservedSentinels,
        V: ReservedSentinels,
    {
        // Sealed impls only; each pair is checked in `reserved_pairs_validate`.
        Self {
            empty_key: EmptyKey::new(K::EMPTY),
            empty_value: EmptyValue::new(V::EMPTY),
            erased_key: ErasedKey::new(K::ERASED),
        }
    }

    pub fn builder() -> SentinelsBuilder<K, V> {
        SentinelsBuilder::new()
    }

    /// Re-runs the collision check. Always `Ok` for a constructed registry.
    pub fn validate(&self) -> Result<(), SentinelError> {
        validate(&self.empty_key, &self.erased_key)
    }

    #[inline]
    pub fn empty_key(&self) -> K {
        self.empty_key.value()
    }

    #[inline]
    pub fn empty_value(&self) -> V {
        self.empty_value.value()
    }

    #[inline]
    pub fn erased_key(&self) -> K {
        self.erased_key.value()
    }

    #[inline]
    pub fn empty_key_marker(&self) -> EmptyKey<K> {
        self.empty_key
    }

    #[inline]
    pub fn empty_value_marker(&self) -> EmptyValue<V> {
        self.empty_value
    }

    #[inline]
    pub fn erased_key_marker(&self) -> ErasedKey<K> {
        self.erased_key
    }

    /// The `(key, value)` pair an unoccupied slot is initialised with.
    #[inline]
    pub fn empty_slot(&self) -> (K, V) {
        (self.empty_key(), self.empty_value())
    }

    #[inline]
    pub fn is_empty_key(&self, key: K) -> bool {
        self.empty_key.matches(key)
    }

    #[inline]
    pub fn is_erased_key(&self, key: K) -> bool {
        self.erased_key.matches(key)
    }

    #[inline]
    pub fn is_empty_value(&self, value: V) -> bool {
        self.empty_value.matches(value)
    }

    /// Whether `key` collides with either key marker.
    #[inline]
    pub fn is_reserved_key(&self, key: K) -> bool {
        self.is_empty_key(key) || self.is_erased_key(key)
    }

    /// Opt-in check that `key` is usable as a user key.
    pub fn check_user_key(&self, key: K) -> Result<(), SentinelError> {
        if self.is_reserved_key(key) {
            return Err(SentinelError::ReservedKey {
                bits: key.to_bits().into(),
            });
        }
        Ok(())
    }
}

impl<K: SlotBits, V: SlotBits> PartialEq for Sentinels<K, V> {
    fn eq(&self, other: &Self) -> bool {
        bits_eq(self.empty_key(), other.empty_key())
            && bits_eq(self.erased_key(), other.erased_key())
            && bits_eq(self.empty_value(), other.empty_value())
    }
}

impl<K: SlotBits, V: SlotBits> Eq for Sentinels<K, V> {}

impl<K, V> Default for Sentinels<K, V>
where
    K: ReservedSentinels,
    V: ReservedSentinels,
{
    fn default() -> Self {
        Self::reserved()
    }
}
