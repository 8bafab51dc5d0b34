use crate::bits::SlotBits;
use crate::error::SentinelError;
use crate::registry::Sentinels;
use crate::reserved::ReservedSentinels;
use crate::sentinel::{EmptyKey, EmptyValue, ErasedKey};

/// Builds a [`Sentinels`] registry, filling unset markers from
/// [`ReservedSentinels`].
///
/// # Examples
///
/// ```rust
/// use slot_sentinel::Sentinels;
///
/// let sentinels = Sentinels::<i32, u64>::builder()
///     // Keys are never negative, so negative markers are safe.
///     .empty_key(-1)
///     .erased_key(-2)
///     // Value defaults to u64::MAX.
///     .build()
///     .unwrap();
///
/// assert_eq!(sentinels.empty_value(), u64::MAX);
///
/// let err = Sentinels::<i32, u64>::builder()
///     .empty_key(-1)
///     .erased_key(-1)
///     .build();
/// assert!(err.is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SentinelsBuilder<K, V> {
    empty_key: Option<K>,
    empty_value: Option<V>,
    erased_key: Option<K>,
}

impl<K: SlotBits, V: SlotBits> SentinelsBuilder<K, V> {
    pub fn new() -> Self {
        Self {
            empty_key: None,
            empty_value: None,
            erased_key: None,
        }
    }

    /// Sets the key held by never-written slots.
    pub fn empty_key(self, key: K) -> Self {
        Self {
            empty_key: Some(key),
            ..self
        }
    }

    /// Sets the key written over erased entries.
    pub fn erased_key(self, key: K) -> Self {
        Self {
            erased_key: Some(key),
            ..self
        }
    }

    /// Sets the value half of an unoccupied slot.
    pub fn empty_value(self, value: V) -> Self {
        Self {
            empty_value: Some(value),
            ..self
        }
    }

    /// Builds the registry, using reserved defaults for unset markers.
    ///
    /// Setting only one key marker can still collide with the default for
    /// the other, e.g. `empty_key(u32::MAX - 1)` with the default erased key.
    pub fn build(self) -> Result<Sentinels<K, V>, SentinelError>
    where
        K: ReservedSentinels,
        V: ReservedSentinels,
    {
        Sentinels::new(
            EmptyKey::new(self.empty_key.unwrap_or(K::EMPTY)),
            EmptyValue::new(self.empty_value.unwrap_or(V::EMPTY)),
            ErasedKey::new(self.erased_key.unwrap_or(K::ERASED)),
        )
    }

    /// Builds the registry from markers that were all set explicitly.
    pub fn build_explicit(self) -> Result<Sentinels<K, V>, SentinelError> {
        let empty_key = self.empty_key.ok_or(SentinelError::Missing("empty key"))?;
        let erased_key = self.erased_key.ok_or(SentinelError::Missing("erased key"))?;
        let empty_value = self
            .empty_value
            .ok_or(SentinelError::Missing("empty value"))?;
        Sentinels::new(
            EmptyKey::new(empty_key),
            EmptyValue::new(empty_value),
            ErasedKey::new(erased_key),
        )
    }
}

impl<K: SlotBits, V: SlotBits> Default for SentinelsBuilder<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
