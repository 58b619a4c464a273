//! Count-limited LRU map.
//!
//! ```
//! use lrukit::map::LimitLruMap;
//!
//! let mut map = LimitLruMap::new(2);
//! map.set("a", 1);
//! map.set("b", 2);
//! map.get("a");
//!
//! // "b" is now the least recently used entry.
//! assert_eq!(map.set("c", 3), vec!["b"]);
//! assert_eq!(map.to_string(), "a < c");
//! ```

use std::borrow::Borrow;
use std::hash::Hash;

use crate::error::ConfigError;
use crate::map::OrderedMap;
use crate::policy::CountLimit;

/// LRU map holding at most `limit` entries.
pub type LimitLruMap<K, V> = OrderedMap<K, V, CountLimit>;

impl<K, V> OrderedMap<K, V, CountLimit>
where
    K: Eq + Hash + Clone,
{
    /// Creates an empty map holding at most `limit` entries.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero. See [`try_new`](Self::try_new).
    pub fn new(limit: usize) -> Self {
        Self::with_policy(CountLimit::new(limit))
    }

    /// Creates an empty map, returning an error if `limit` is zero.
    pub fn try_new(limit: usize) -> Result<Self, ConfigError> {
        CountLimit::try_new(limit).map(Self::with_policy)
    }

    /// Creates a map and loads `entries` in order, as [`assign`](Self::assign) does.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn from_entries<I>(limit: usize, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut map = Self::new(limit);
        map.assign(entries);
        map
    }

    #[inline]
    pub fn limit(&self) -> usize {
        self.policy().limit()
    }

    /// Inserts or updates `key`. Returns the evicted key, if the insert pushed
    /// the map over its limit.
    ///
    /// Updating an existing key never evicts and never changes its position.
    pub fn set(&mut self, key: K, value: V) -> Vec<K> {
        match self.try_set(key, value) {
            Ok(evicted) => evicted,
            Err(never) => match never {},
        }
    }

    /// Clears the map, then inserts `pairs` in order.
    pub fn assign<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        if let Err(never) = self.try_assign(pairs) {
            match never {}
        }
    }

    /// Mutable access to a value; promotes it like [`get`](OrderedMap::get).
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !self.touch(key) {
            return None;
        }
        self.newest_value_mut()
    }
}

impl<K, V> Extend<(K, V)> for OrderedMap<K, V, CountLimit>
where
    K: Eq + Hash + Clone,
{
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
