//! slot-sentinel: empty, erased and empty-value markers for lock-free
//! open-addressing hash maps.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: give a concurrent map one immutable, validated set of reserved
//!   bit patterns so that every thread can decide a slot's occupancy from
//!   a single atomic load or CAS, with no locks and no shared mutable
//!   configuration.
//! - Layers:
//!   - `SlotBits`: the same-width integer view of a key or value type.
//!     Only types with such a view can be markers, which keeps every
//!     marker a plain word that an atomic can hold.
//!   - `EmptyKey` / `EmptyValue` / `ErasedKey`: transparent wrappers that
//!     name a value's role.
//!   - `Sentinels<K, V>`: the registry. Validates the markers once and
//!     then only hands out copies.
//!   - `classify` / `probe_for_find` / `probe_for_insert` and
//!     `AtomicSlotKey`: the decisions and the CAS a map's probing loop
//!     builds on.
//!
//! Constraints
//! - Markers never change after construction. `Sentinels` has no setters
//!   and is `Copy`, so threads read their own copy without
//!   synchronization.
//! - Comparison against a marker is bitwise. A map's key equality is never
//!   consulted, so a custom `Eq` cannot make a live key look empty.
//! - Empty key and erased key must differ. This is checked when the
//!   registry is built and a collision is a hard error.
//!
//! Empty versus erased
//! - A find probe stops at an empty slot: nothing was ever placed there,
//!   so nothing was displaced past it.
//! - A find probe continues past an erased slot: the erased entry may have
//!   pushed the wanted key further along the probe sequence.
//! - An insert may claim either.
//!
//! Caller obligation
//! - No user key may equal either key marker bitwise. This cannot be
//!   checked on the insert hot path for arbitrary key domains; doing it is
//!   the caller's job, and violating it is undefined behavior at the map
//!   level. `ReservedSentinels` supplies type-extremal markers that make
//!   an accidental clash unlikely, and `Sentinels::check_user_key` is
//!   there for callers who can afford the check.
//!
//! Notes and non-goals
//! - No hashing, no storage, no probing sequence, no resizing. The crate
//!   stops at a single slot.
//! - With the `logging` feature, registry construction logs accepted and
//!   rejected configurations. Nothing on the probe or CAS paths logs.

mod bits;
mod builder;
mod error;
mod probe;
mod registry;
mod reserved;
mod sentinel;
mod slot;

// Public surface
pub use bits::{bits_eq, SlotBits};
pub use builder::SentinelsBuilder;
pub use error::SentinelError;
pub use probe::{ProbeStep, SlotState};
pub use registry::{validate, Sentinels};
pub use reserved::ReservedSentinels;
pub use sentinel::{EmptyKey, EmptyValue, ErasedKey};
pub use slot::AtomicSlotKey;
