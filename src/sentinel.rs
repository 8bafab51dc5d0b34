//! Typed wrappers for the three markers.
//!
//! Each wrapper is `#[repr(transparent)]` over the slot type, so it has the
//! same size and bit layout and can be copied into any execution context
//! that can copy the slot type itself.

use crate::bits::{bits_eq, SlotBits};

macro_rules! marker {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug)]
        #[repr(transparent)]
        pub struct $name<T>(T);

        impl<T: SlotBits> $name<T> {
            /// Wraps `value` as this marker. Nothing is checked here; see
            /// [`Sentinels::new`](crate::Sentinels::new).
            #[inline]
            pub const fn new(value: T) -> Self {
                Self(value)
            }

            #[inline]
            pub fn value(&self) -> T {
                self.0
            }

            /// Whether `slot` holds exactly this marker's bit pattern.
            #[inline]
            pub fn matches(&self, slot: T) -> bool {
                bits_eq(self.0, slot)
            }

            /// The marker's same-width integer view.
            #[inline]
            pub fn bits(&self) -> T::Bits {
                self.0.to_bits()
            }
        }

        impl<T: SlotBits> PartialEq for $name<T> {
            fn eq(&self, other: &Self) -> bool {
                self.matches(other.0)
            }
        }

        impl<T: SlotBits> Eq for $name<T> {}
    };
}

marker!(
    /// Key held by a slot that has never been written.
    ///
    /// Find probes stop when they reach it.
    EmptyKey
);

marker!(
    /// Value half of an unoccupied slot in key/value maps.
    EmptyValue
);

marker!(
    /// Key held by a slot whose entry was erased (a tombstone).
    ///
    /// Find probes continue past it; insert probes may reuse it.
    ErasedKey
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_have_slot_layout() {
        assert_eq!(core::mem::size_of::<EmptyKey<u32>>(), 4);
        assert_eq!(core::mem::size_of::<ErasedKey<i64>>(), 8);
        assert_eq!(core::mem::align_of::<EmptyValue<f32>>(), 4);
    }

    #[test]
    fn value_is_returned_unchanged() {
        assert_eq!(EmptyKey::new(7u16).value(), 7);
        assert_eq!(ErasedKey::new(-3i8).value(), -3);
        assert_eq!(EmptyValue::new(1.5f64).value().to_bits(), 1.5f64.to_bits());
    }

    #[test]
    fn nan_marker_matches_itself() {
        let empty = EmptyValue::new(f32::NAN);
        assert!(empty.matches(f32::NAN));
        assert_eq!(empty, EmptyValue::new(f32::NAN));
        assert!(!empty.matches(0.0));
    }
}
