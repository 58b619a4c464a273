//! Eviction policies for [`OrderedMap`](crate::map::OrderedMap).
//!
//! A policy is plain data consulted by the map at fixed points of its single
//! mutation path. It never touches the map's storage or counters; it only
//! answers questions:
//!
//! ```text
//!   set(key, value)
//!     │
//!     ├─ weigh(value) ──────────► weight
//!     ├─ admit(weight) ─────────► Ok / Err(policy error)   (before any mutation)
//!     │
//!     ├─ while !fits(usage, weight) { pop oldest }          (skipped on update
//!     │                                                      unless evicts_on_update)
//!     │
//!     └─ [store / update entry, map updates len + total_weight]
//! ```
//!
//! | Policy         | Weight      | Evicts while            | Update re-evicts |
//! |----------------|-------------|-------------------------|------------------|
//! | [`CountLimit`] | always 1    | `len > limit`           | no               |
//! | [`SizeLimit`]  | via weigher | `total_weight > max`    | yes              |

pub mod count;
pub mod size;

pub use count::CountLimit;
pub use size::{DeclaredWeight, SizeLimit, SizedItem, Weigher, Weighted};

/// Occupancy figures the map hands to its policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Usage {
    pub len: usize,
    pub total_weight: usize,
}

/// Decides how values are weighed and when the oldest entries must go.
pub trait EvictionPolicy<V> {
    /// Error returned when a value can never fit.
    type Error: std::error::Error;

    /// Cost of storing `value`.
    fn weigh(&self, value: &V) -> usize;

    /// Checked before the map is mutated.
    fn admit(&self, weight: usize) -> Result<(), Self::Error>;

    /// `true` if `usage` is over the limit.
    fn must_evict(&self, usage: Usage) -> bool;

    /// `true` if `incoming` more weight can be stored on top of `usage`
    /// (one more entry for a new key) without going over the limit.
    ///
    /// Must not overflow for any admitted `incoming`.
    fn fits(&self, usage: Usage, incoming: usize) -> bool;

    /// Whether replacing the value of an existing key may require eviction.
    fn evicts_on_update(&self) -> bool;

    /// The configured limit, in the policy's own unit.
    fn capacity(&self) -> usize;
}
