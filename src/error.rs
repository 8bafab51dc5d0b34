/// Errors raised while configuring sentinels.
///
/// All variants are programmer errors. None of them is transient, and a map
/// must not be built from a configuration that produced one.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentinelError {
    /// The empty-key and erased-key markers have the same bit pattern, so
    /// probes could not tell a never-used slot from a tombstone.
    #[error("empty-key and erased-key sentinels share the bit pattern {bits:#x}")]
    Collision { bits: u64 },

    /// A user key has the bit pattern of one of the key sentinels.
    ///
    /// Only returned by the opt-in [`Sentinels::check_user_key`] check.
    ///
    /// [`Sentinels::check_user_key`]: crate::Sentinels::check_user_key
    #[error("key with bit pattern {bits:#x} is reserved as a sentinel")]
    ReservedKey { bits: u64 },

    /// [`SentinelsBuilder::build_explicit`] was called without setting
    /// every marker.
    ///
    /// [`SentinelsBuilder::build_explicit`]: crate::SentinelsBuilder::build_explicit
    #[error("the {0} sentinel was not configured")]
    Missing(&'static str),
}
