//! Conservative default sentinels.
//!
//! Integers reserve their two largest values. Floats reserve the two
//! all-ones NaN patterns, which arithmetic on ordinary values never yields
//! (hardware produces the canonical quiet NaN instead).

use crate::bits::SlotBits;

/// Reserved bit patterns for a slot type.
///
/// `EMPTY` and `ERASED` always differ bitwise. Like [`SlotBits`], the trait
/// is sealed, so no other pairs exist. Keys whose domain reaches these
/// values must configure sentinels explicitly.
pub trait ReservedSentinels: SlotBits {
    const EMPTY: Self;
    const ERASED: Self;
}

macro_rules! reserved_int {
    ($($t:ty),*) => {$(
        impl ReservedSentinels for $t {
            const EMPTY: Self = <$t>::MAX;
            const ERASED: Self = <$t>::MAX - 1;
        }
    )*};
}

reserved_int!(u8, u16, u32, u64, i8, i16, i32, i64);

impl ReservedSentinels for f32 {
    const EMPTY: Self = f32::from_bits(u32::MAX);
    const ERASED: Self = f32::from_bits(u32::MAX - 1);
}

impl ReservedSentinels for f64 {
    const EMPTY: Self = f64::from_bits(u64::MAX);
    const ERASED: Self = f64::from_bits(u64::MAX - 1);
}
