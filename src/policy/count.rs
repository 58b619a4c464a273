//! Count-limited eviction: keep at most `limit` entries.

use std::convert::Infallible;
use std::num::NonZeroUsize;

use crate::error::ConfigError;
use crate::policy::{EvictionPolicy, Usage};

/// Evicts the oldest entry once the entry count goes above `limit`.
///
/// Every value weighs 1, so a single `set` of a new key evicts at most one
/// entry and updates never evict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountLimit {
    limit: NonZeroUsize,
}

impl CountLimit {
    /// # Panics
    ///
    /// Panics if `limit` is zero. See [`try_new`](Self::try_new).
    pub fn new(limit: usize) -> Self {
        match Self::try_new(limit) {
            Ok(policy) => policy,
            Err(e) => panic!("{}", e),
        }
    }

    pub fn try_new(limit: usize) -> Result<Self, ConfigError> {
        NonZeroUsize::new(limit)
            .map(|limit| Self { limit })
            .ok_or_else(|| ConfigError::new("count limit must be greater than zero"))
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.limit.get()
    }
}

impl<V> EvictionPolicy<V> for CountLimit {
    type Error = Infallible;

    #[inline]
    fn weigh(&self, _value: &V) -> usize {
        1
    }

    #[inline]
    fn admit(&self, _weight: usize) -> Result<(), Infallible> {
        Ok(())
    }

    #[inline]
    fn must_evict(&self, usage: Usage) -> bool {
        usage.len > self.limit.get()
    }

    #[inline]
    fn fits(&self, usage: Usage, _incoming: usize) -> bool {
        usage.len < self.limit.get()
    }

    #[inline]
    fn evicts_on_update(&self) -> bool {
        false
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.limit.get()
    }
}
