//! Size-limited eviction: keep the summed weight of all values within
//! `max_size`.
//!
//! Weights come from a [`Weigher`]. Two are provided:
//!
//! - [`DeclaredWeight`]: values report their own weight through [`Weighted`]
//!   (e.g. [`SizedItem`], which pairs a value with a declared size).
//! - Any closure `Fn(&V) -> usize`, for values that do not carry a weight.
//!
//! ```
//! use lrukit::map::SizeLruMap;
//! use lrukit::policy::SizedItem;
//!
//! let mut map = SizeLruMap::new(1024);
//! map.set("one", SizedItem::new(1, 24)).unwrap();
//! map.set("two", SizedItem::new(2, 1000)).unwrap();
//! assert_eq!(map.size(), 1024);
//!
//! let evicted = map.set("three", SizedItem::new(3, 1)).unwrap();
//! assert_eq!(evicted, vec!["one"]);
//! ```

use crate::error::CapacityExceeded;
use crate::policy::{EvictionPolicy, Usage};

/// A value that knows its own weight.
pub trait Weighted {
    fn weight(&self) -> usize;
}

/// Computes the weight of a value.
pub trait Weigher<V> {
    fn weigh(&self, value: &V) -> usize;
}

impl<V, F> Weigher<V> for F
where
    F: Fn(&V) -> usize,
{
    #[inline]
    fn weigh(&self, value: &V) -> usize {
        self(value)
    }
}

/// Weigher that asks the value itself via [`Weighted`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeclaredWeight;

impl<V: Weighted> Weigher<V> for DeclaredWeight {
    #[inline]
    fn weigh(&self, value: &V) -> usize {
        value.weight()
    }
}

/// A value paired with its declared size.
///
/// With the `serde` feature this serializes as `{"value": .., "size": ..}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizedItem<V> {
    pub value: V,
    pub size: usize,
}

impl<V> SizedItem<V> {
    pub fn new(value: V, size: usize) -> Self {
        Self { value, size }
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<V> Weighted for SizedItem<V> {
    #[inline]
    fn weight(&self) -> usize {
        self.size
    }
}

impl Weighted for String {
    fn weight(&self) -> usize {
        self.len()
    }
}

/// Evicts oldest entries while the total weight is above `max_size`, and
/// refuses any single value heavier than `max_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimit<W = DeclaredWeight> {
    max_size: usize,
    weigher: W,
}

impl SizeLimit<DeclaredWeight> {
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            weigher: DeclaredWeight,
        }
    }
}

impl<W> SizeLimit<W> {
    pub fn with_weigher(max_size: usize, weigher: W) -> Self {
        Self { max_size, weigher }
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn weigher(&self) -> &W {
        &self.weigher
    }
}

impl<V, W> EvictionPolicy<V> for SizeLimit<W>
where
    W: Weigher<V>,
{
    type Error = CapacityExceeded;

    #[inline]
    fn weigh(&self, value: &V) -> usize {
        self.weigher.weigh(value)
    }

    #[inline]
    fn admit(&self, weight: usize) -> Result<(), CapacityExceeded> {
        if weight > self.max_size {
            return Err(CapacityExceeded::new(weight, self.max_size));
        }
        Ok(())
    }

    #[inline]
    fn must_evict(&self, usage: Usage) -> bool {
        usage.total_weight > self.max_size
    }

    #[inline]
    fn fits(&self, usage: Usage, incoming: usize) -> bool {
        incoming <= self.max_size.saturating_sub(usage.total_weight)
    }

    #[inline]
    fn evicts_on_update(&self) -> bool {
        true
    }

    #[inline]
    fn capacity(&self) -> usize {
        self.max_size
    }
}
