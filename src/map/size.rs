//! Size-limited LRU map.
//!
//! Each value has a weight; the map keeps the sum of all weights within
//! `max_size` by evicting the oldest entries, and refuses any single value
//! heavier than `max_size`.

use std::hash::Hash;

use crate::error::CapacityExceeded;
use crate::map::OrderedMap;
use crate::policy::{DeclaredWeight, SizeLimit, Weigher, Weighted};

/// LRU map bounded by the total weight of its values.
pub type SizeLruMap<K, V, W = DeclaredWeight> = OrderedMap<K, V, SizeLimit<W>>;

impl<K, V> OrderedMap<K, V, SizeLimit<DeclaredWeight>>
where
    K: Eq + Hash + Clone,
    V: Weighted,
{
    /// Creates an empty map whose values declare their own weight.
    pub fn new(max_size: usize) -> Self {
        Self::with_policy(SizeLimit::new(max_size))
    }

    /// Creates a map and loads `entries` in order.
    ///
    /// Fails without building anything if one entry alone exceeds `max_size`.
    pub fn from_entries<I>(max_size: usize, entries: I) -> Result<Self, CapacityExceeded>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(max_size);
        map.assign(entries)?;
        Ok(map)
    }
}

impl<K, V, W> OrderedMap<K, V, SizeLimit<W>>
where
    K: Eq + Hash + Clone,
    W: Weigher<V>,
{
    /// Creates an empty map that weighs values with `weigher`.
    ///
    /// ```
    /// use lrukit::map::SizeLruMap;
    ///
    /// let mut map = SizeLruMap::with_weigher(8, |v: &String| v.len());
    /// map.set(1, "abcd".to_string()).unwrap();
    /// map.set(2, "efgh".to_string()).unwrap();
    /// assert_eq!(map.set(3, "ij".to_string()).unwrap(), vec![1]);
    /// assert_eq!(map.size(), 6);
    /// ```
    pub fn with_weigher(max_size: usize, weigher: W) -> Self {
        Self::with_policy(SizeLimit::with_weigher(max_size, weigher))
    }

    /// Total weight of all live entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.total_weight()
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.policy().max_size()
    }

    /// Inserts or updates `key`, returning the keys evicted to stay within
    /// `max_size`, oldest first.
    ///
    /// An update swaps the old weight for the new one and may evict, since
    /// the value can grow. The updated entry keeps its position, so it can
    /// be evicted itself if it is the oldest.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if the value alone weighs more than
    /// `max_size`; the map is not modified.
    pub fn set(&mut self, key: K, value: V) -> Result<Vec<K>, CapacityExceeded> {
        self.try_set(key, value)
    }

    /// Clears the map, then inserts `pairs` in order.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityExceeded`] if any pair alone is too heavy; the map
    /// keeps its previous contents.
    pub fn assign<I>(&mut self, pairs: I) -> Result<(), CapacityExceeded>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.try_assign(pairs)
    }
}
