//! Same-width integer views of marker types.
//!
//! Every comparison against a sentinel goes through these views. Two floats
//! that are `==` but differ in bits (`0.0` and `-0.0`) are different slot
//! contents, and a NaN sentinel equals itself.

use core::fmt::Debug;
use core::hash::Hash;

/// A type that can live in a hash map slot and be compared against a
/// sentinel with a single atomic word operation.
///
/// `Bits` is the unsigned integer of the same size as `Self`, and
/// `from_bits(to_bits(x))` reproduces `x` bit for bit.
///
/// The trait is sealed: only the fixed-width integers and floats implement
/// it, so the set of marker types (and their reserved defaults) is closed.
///
/// ```compile_fail
/// use slot_sentinel::SlotBits;
///
/// #[derive(Clone, Copy)]
/// struct Id(u32);
///
/// impl SlotBits for Id {
///     type Bits = u32;
///     fn to_bits(self) -> u32 {
///         self.0
///     }
///     fn from_bits(bits: u32) -> Self {
///         Id(bits)
///     }
/// }
/// ```
pub trait SlotBits: sealed::Sealed + Copy + Send + Sync + 'static {
    type Bits: Copy + Eq + Hash + Debug + Send + Sync + Into<u64> + 'static;

    fn to_bits(self) -> Self::Bits;
    fn from_bits(bits: Self::Bits) -> Self;
}

mod sealed {
    pub trait Sealed {}
}

/// Bitwise equality of two slot values.
#[inline]
pub fn bits_eq<T: SlotBits>(a: T, b: T) -> bool {
    a.to_bits() == b.to_bits()
}

macro_rules! unsigned_slot_bits {
    ($($t:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SlotBits for $t {
            type Bits = $t;

            #[inline]
            fn to_bits(self) -> $t {
                self
            }

            #[inline]
            fn from_bits(bits: $t) -> Self {
                bits
            }
        }
    )*};
}

macro_rules! signed_slot_bits {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SlotBits for $t {
            type Bits = $u;

            #[inline]
            fn to_bits(self) -> $u {
                self as $u
            }

            #[inline]
            fn from_bits(bits: $u) -> Self {
                bits as $t
            }
        }
    )*};
}

macro_rules! float_slot_bits {
    ($($t:ty => $u:ty),*) => {$(
        impl sealed::Sealed for $t {}

        impl SlotBits for $t {
            type Bits = $u;

            #[inline]
            fn to_bits(self) -> $u {
                <$t>::to_bits(self)
            }

            #[inline]
            fn from_bits(bits: $u) -> Self {
                <$t>::from_bits(bits)
            }
        }
    )*};
}

unsigned_slot_bits!(u8, u16, u32, u64);
signed_slot_bits!(i8 => u8, i16 => u16, i32 => u32, i64 => u64);
float_slot_bits!(f32 => u32, f64 => u64);
