//! One entry point for configuring either map flavor.
//!
//! ## Example
//!
//! ```rust
//! use lrukit::builder::MapBuilder;
//!
//! let mut map = MapBuilder::new(3)
//!     .reserve(3)
//!     .entries([("a", 1), ("b", 2)])
//!     .build_limit();
//! map.set("c", 3);
//! assert_eq!(map.to_string(), "a < b < c");
//!
//! let sized = MapBuilder::<&str, String>::new(8).build_size_with(|v: &String| v.len());
//! assert_eq!(sized.max_size(), 8);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
use crate::map::{LimitLruMap, OrderedMap, SizeLruMap};
use crate::policy::{CountLimit, EvictionPolicy, SizeLimit, Weigher, Weighted};

/// Builder for [`LimitLruMap`] and [`SizeLruMap`].
///
/// `capacity` is the entry limit for `build_limit*` and the maximum total
/// weight for `build_size*`.
#[derive(Debug, Clone)]
pub struct MapBuilder<K, V> {
    capacity: usize,
    reserve: usize,
    entries: Vec<(K, V)>,
}

impl<K, V> MapBuilder<K, V>
where
    K: Eq + Hash + Clone,
{
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            reserve: 0,
            entries: Vec::new(),
        }
    }

    /// Pre-allocates the key index and entry arena for `additional` entries.
    pub fn reserve(mut self, additional: usize) -> Self {
        self.reserve = additional;
        self
    }

    /// Initial contents, loaded in order after the map is built.
    pub fn entries<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries.extend(pairs);
        self
    }

    /// Builds a count-limited map.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is zero. See [`try_build_limit`](Self::try_build_limit).
    pub fn build_limit(self) -> LimitLruMap<K, V> {
        self.try_build_limit()
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_build_limit(self) -> Result<LimitLruMap<K, V>, ConfigError> {
        let policy = CountLimit::try_new(self.capacity)?;
        self.finish(policy)
    }

    /// Builds a size-limited map over values that declare their weight.
    ///
    /// # Panics
    ///
    /// Panics if an initial entry is heavier than the capacity.
    pub fn build_size(self) -> SizeLruMap<K, V>
    where
        V: Weighted,
    {
        self.try_build_size()
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_build_size(self) -> Result<SizeLruMap<K, V>, ConfigError>
    where
        V: Weighted,
    {
        let policy = SizeLimit::new(self.capacity);
        self.finish(policy)
    }

    /// Builds a size-limited map that weighs values with `weigher`.
    ///
    /// # Panics
    ///
    /// Panics if an initial entry is heavier than the capacity.
    pub fn build_size_with<W>(self, weigher: W) -> SizeLruMap<K, V, W>
    where
        W: Weigher<V>,
    {
        self.try_build_size_with(weigher)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_build_size_with<W>(self, weigher: W) -> Result<SizeLruMap<K, V, W>, ConfigError>
    where
        W: Weigher<V>,
    {
        let policy = SizeLimit::with_weigher(self.capacity, weigher);
        self.finish(policy)
    }

    fn finish<P>(self, policy: P) -> Result<OrderedMap<K, V, P>, ConfigError>
    where
        P: EvictionPolicy<V>,
        P::Error: Into<ConfigError>,
    {
        let reserve = self.reserve.max(self.entries.len().min(self.capacity));
        let mut map = OrderedMap::with_policy_and_capacity(policy, reserve);
        if !self.entries.is_empty() {
            map.try_assign(self.entries).map_err(Into::into)?;
        }
        Ok(map)
    }
}
