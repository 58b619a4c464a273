//! # Ordered Map Core
//!
//! [`OrderedMap`] pairs a key index with a recency list and lets an
//! [`EvictionPolicy`] decide when the oldest entries have to go.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────────────┐
//!   │                         OrderedMap<K, V, P>                          │
//!   │                                                                      │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  FxHashMap<K, SlotId>  (key index)                           │   │
//!   │   │    "one"   ─────────────────────────┐                        │   │
//!   │   │    "two"   ───────────────────┐     │                        │   │
//!   │   │    "three" ─────────────┐     │     │                        │   │
//!   │   └─────────────────────────┼─────┼─────┼────────────────────────┘   │
//!   │                             ▼     ▼     ▼                            │
//!   │   ┌──────────────────────────────────────────────────────────────┐   │
//!   │   │  RecencyList<K, V>  (arena-backed, links live on entries)    │   │
//!   │   │                                                              │   │
//!   │   │  oldest ──► [one] ◄──► [two] ◄──► [three] ◄── newest         │   │
//!   │   └──────────────────────────────────────────────────────────────┘   │
//!   │                                                                      │
//!   │   total_weight: usize      policy: P (CountLimit / SizeLimit<W>)     │
//!   └──────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operations
//!
//! | Method               | Complexity | Description                                 |
//! |----------------------|------------|---------------------------------------------|
//! | `get(&k)`            | O(1)       | Value lookup, promotes to newest            |
//! | `find(&k)`           | O(1)       | Value lookup without promotion              |
//! | `has(&k)`            | O(1)       | Membership test                             |
//! | `try_set(k, v)`      | O(1)*      | Insert or update, returns evicted keys      |
//! | `delete(&k)`         | O(1)       | Remove, `false` when absent                 |
//! | `remove(&k)`         | O(1)       | Remove, returns the value                   |
//! | `pop_oldest()`       | O(1)       | Remove the least recently used entry        |
//! | `touch(&k)`          | O(1)       | Promote without reading                     |
//! | `try_assign(pairs)`  | O(n)       | Clear, then bulk insert in order            |
//! | `clear()`            | O(1)       | Drop everything                             |
//! | `recency_rank(&k)`   | O(n)       | Position from the oldest end                |
//!
//! \* Size-limited eviction is O(k) in the number of entries evicted.
//!
//! The policy-specific front ends live in [`limit`] ([`LimitLruMap`]) and
//! [`size`] ([`SizeLruMap`]); both expose an infallible or fallible `set`.
//!
//! ## Invariants
//!
//! - `index.len() == list.len()`, and every indexed handle resolves to the
//!   entry holding that key.
//! - `total_weight` equals the sum of the weights recorded on live entries.
//! - After every completed mutation, the policy no longer asks for eviction.
//!
//! All three are checked by [`check_invariants`](OrderedMap::check_invariants)
//! and asserted after each mutation in debug builds.
//!
//! ## Thread Safety
//!
//! Not internally synchronized. Wrap the whole map in a single lock to share
//! it between threads. Iterators borrow the map, so it cannot be mutated while
//! one is alive.

pub mod iter;
pub mod limit;
#[cfg(feature = "serde")]
pub mod serde;
pub mod size;

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::ds::{RecencyList, SlotId};
use crate::error::InvariantError;
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::MapMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::MapMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, MetricsReadRecorder, MetricsSnapshotProvider};
use crate::policy::{EvictionPolicy, Usage};

pub use iter::{IntoIter, Iter, Keys, Values};
pub use limit::LimitLruMap;
pub use size::SizeLruMap;

/// Recency-ordered map that evicts its oldest entries as directed by `P`.
#[derive(Clone)]
pub struct OrderedMap<K, V, P> {
    index: FxHashMap<K, SlotId>,
    list: RecencyList<K, V>,
    total_weight: usize,
    policy: P,
    #[cfg(feature = "metrics")]
    metrics: MapMetrics,
}

impl<K, V, P> OrderedMap<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<V>,
{
    /// Creates an empty map governed by `policy`.
    pub fn with_policy(policy: P) -> Self {
        Self::with_policy_and_capacity(policy, 0)
    }

    /// Creates an empty map with room for `reserve` entries before reallocating.
    pub fn with_policy_and_capacity(policy: P, reserve: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(reserve, Default::default()),
            list: RecencyList::with_capacity(reserve),
            total_weight: 0,
            policy,
            #[cfg(feature = "metrics")]
            metrics: MapMetrics::default(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The policy's limit: entry count or maximum total weight.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.policy.capacity()
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Sum of the weights of all live entries.
    #[inline]
    pub fn total_weight(&self) -> usize {
        self.total_weight
    }

    /// Reserves room for at least `additional` more entries.
    pub fn reserve(&mut self, additional: usize) {
        self.index.reserve(additional);
        self.list.reserve(additional);
    }

    #[inline]
    fn usage(&self) -> Usage {
        Usage {
            len: self.index.len(),
            total_weight: self.total_weight,
        }
    }

    /// Returns the value for `key` and marks it as the newest entry.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let id = match self.index.get(key) {
            Some(&id) => id,
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();
                return None;
            },
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        self.list.move_to_newest(id);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        self.list.get(id).map(|entry| entry.value())
    }

    /// Returns the value for `key` without changing recency order.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        (&self.metrics).record_find_call();

        let id = *self.index.get(key)?;
        let value = self.list.get(id).map(|entry| entry.value());

        #[cfg(feature = "metrics")]
        if value.is_some() {
            (&self.metrics).record_find_hit();
        }

        value
    }

    /// `true` if `key` is present. Never changes recency order.
    #[inline]
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Inserts or updates `key`, returning the keys evicted to make room,
    /// oldest first.
    ///
    /// An update replaces the value in place and keeps the entry's position.
    /// When the policy rejects the value's weight, the error is returned and
    /// the map is left unmodified.
    pub fn try_set(&mut self, key: K, value: V) -> Result<Vec<K>, P::Error> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let weight = self.policy.weigh(&value);
        if let Err(err) = self.policy.admit(weight) {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_rejected();
            debug!(
                weight,
                capacity = self.policy.capacity(),
                "rejected value heavier than map capacity"
            );
            return Err(err);
        }

        Ok(self.store(key, value, weight))
    }

    /// The single mutation path for admitted values.
    fn store(&mut self, key: K, value: V, weight: usize) -> Vec<K> {
        let existing = self.index.get(&key).copied();
        if let Some((id, entry)) =
            existing.and_then(|id| self.list.get_mut(id).map(|entry| (id, entry)))
        {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            let previous = std::mem::replace(&mut entry.weight, weight);
            entry.value = value;
            self.total_weight -= previous;

            let evicted = if self.policy.evicts_on_update() {
                self.make_room(weight, Some(id))
            } else {
                self.total_weight += weight;
                Vec::new()
            };

            #[cfg(debug_assertions)]
            self.debug_validate_invariants();

            return evicted;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        let evicted = self.make_room(weight, None);
        let id = self.list.push_newest(key.clone(), value, weight);
        self.index.insert(key, id);

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        evicted
    }

    /// Pops oldest entries until `incoming` fits, then adds it to the total.
    ///
    /// `holder` is the live entry already carrying `incoming` (an update).
    /// If it is popped itself, its weight leaves with it. The total never
    /// exceeds the policy limit, even between steps.
    fn make_room(&mut self, incoming: usize, holder: Option<SlotId>) -> Vec<K> {
        let mut evicted = Vec::new();
        let mut pending = incoming;
        if self.policy.fits(self.usage(), pending) {
            self.total_weight += pending;
            return evicted;
        }

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        while !self.policy.fits(self.usage(), pending) {
            let Some(id) = self.list.oldest_id() else {
                break;
            };
            let Some(entry) = self.list.unlink(id) else {
                break;
            };
            self.index.remove(&entry.key);
            if holder == Some(id) {
                pending = 0;
            } else {
                self.total_weight -= entry.weight;
            }

            #[cfg(feature = "metrics")]
            self.metrics.record_evicted_entry();

            evicted.push(entry.key);
        }
        self.total_weight += pending;

        trace!(
            evicted = evicted.len(),
            len = self.index.len(),
            total_weight = self.total_weight,
            "evicted oldest entries"
        );
        evicted
    }

    /// Removes `key`; returns `false` if it was not present.
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_delete_call();

        let id = self.index.remove(key)?;
        let entry = self.list.unlink(id)?;
        self.total_weight -= entry.weight;

        #[cfg(feature = "metrics")]
        self.metrics.record_delete_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Some(entry.value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_pop_oldest_call();

        let entry = self.list.pop_oldest()?;
        self.index.remove(&entry.key);
        self.total_weight -= entry.weight;

        #[cfg(feature = "metrics")]
        self.metrics.record_pop_oldest_found();

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        Some(entry.into_pair())
    }

    /// The entry that would be evicted next.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        self.list.oldest().map(|entry| (entry.key(), entry.value()))
    }

    /// The most recently used entry.
    pub fn peek_newest(&self) -> Option<(&K, &V)> {
        self.list.newest().map(|entry| (entry.key(), entry.value()))
    }

    /// Marks `key` as the newest entry without reading it.
    pub fn touch<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        #[cfg(feature = "metrics")]
        self.metrics.record_touch_call();

        let Some(&id) = self.index.get(key) else {
            return false;
        };
        let moved = self.list.move_to_newest(id);

        #[cfg(feature = "metrics")]
        if moved {
            self.metrics.record_touch_found();
        }

        #[cfg(debug_assertions)]
        self.debug_validate_invariants();

        moved
    }

    /// Weight is not re-measured, so only policies that weigh every value
    /// the same may hand this out.
    pub(crate) fn newest_value_mut(&mut self) -> Option<&mut V> {
        let id = self.list.newest_id()?;
        self.list.get_mut(id).map(|entry| &mut entry.value)
    }

    /// Position of `key` counted from the oldest entry (0 = next to be evicted).
    pub fn recency_rank<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let target = *self.index.get(key)?;
        self.list.iter_ids().position(|id| id == target)
    }

    /// Drops every entry and resets the counters.
    pub fn clear(&mut self) {
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();

        self.index.clear();
        self.list.clear();
        self.total_weight = 0;
    }

    /// Replaces the contents with `pairs`, inserted in order so the last pair
    /// ends up newest.
    ///
    /// Every weight is checked before the map is cleared, so a rejected pair
    /// leaves the previous contents in place.
    pub fn try_assign<I>(&mut self, pairs: I) -> Result<(), P::Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let weighed = pairs
            .into_iter()
            .map(|(key, value)| {
                let weight = self.policy.weigh(&value);
                self.policy.admit(weight).map(|()| (key, value, weight))
            })
            .collect::<Result<Vec<_>, _>>()?;

        if !self.is_empty() {
            self.clear();
        }
        self.reserve(weighed.len().min(self.policy.capacity()));
        for (key, value, weight) in weighed {
            self.store(key, value, weight);
        }
        Ok(())
    }

    /// Clones the contents out as `(key, value)` pairs, oldest first.
    pub fn export(&self) -> Vec<(K, V)>
    where
        V: Clone,
    {
        self.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Re-populates the map from pairs produced by [`export`](Self::export).
    pub fn import<I>(&mut self, pairs: I) -> Result<(), P::Error>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.try_assign(pairs)
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.list.iter())
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.list.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.list.iter())
    }

    /// Checks index/list agreement, weight accounting, and the policy bound.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.list.check_invariants()?;

        if self.index.len() != self.list.len() {
            return Err(InvariantError::new(format!(
                "key index holds {} keys but recency list holds {} entries",
                self.index.len(),
                self.list.len()
            )));
        }

        for (key, &id) in &self.index {
            let entry = self
                .list
                .get(id)
                .ok_or_else(|| InvariantError::new("key index points at a vacant slot"))?;
            if entry.key() != key {
                return Err(InvariantError::new(
                    "key index points at an entry holding another key",
                ));
            }
        }

        let summed: usize = self.list.iter().map(|entry| entry.weight()).sum();
        if summed != self.total_weight {
            return Err(InvariantError::new(format!(
                "total weight is {} but live entries weigh {}",
                self.total_weight, summed
            )));
        }

        if self.policy.must_evict(self.usage()) {
            return Err(InvariantError::new(format!(
                "map is over capacity: len {} total weight {} capacity {}",
                self.index.len(),
                self.total_weight,
                self.policy.capacity()
            )));
        }

        Ok(())
    }

    #[cfg(debug_assertions)]
    fn debug_validate_invariants(&self) {
        if let Err(err) = self.check_invariants() {
            panic!("ordered map invariant violated: {}", err);
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> OrderedMap<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<V>,
{
    pub fn metrics_snapshot(&self) -> MapMetricsSnapshot {
        self.metrics.snapshot(self.len(), self.total_weight, self.capacity())
    }

    pub fn reset_metrics(&mut self) {
        self.metrics = MapMetrics::default();
    }
}

#[cfg(feature = "metrics")]
impl<K, V, P> MetricsSnapshotProvider<MapMetricsSnapshot> for OrderedMap<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<V>,
{
    fn snapshot(&self) -> MapMetricsSnapshot {
        self.metrics_snapshot()
    }
}

/// Renders keys oldest to newest, separated by `" < "`.
impl<K, V, P> fmt::Display for OrderedMap<K, V, P>
where
    K: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.list.iter().enumerate() {
            if i > 0 {
                f.write_str(" < ")?;
            }
            write!(f, "{}", entry.key())?;
        }
        Ok(())
    }
}

impl<K, V, P> fmt::Debug for OrderedMap<K, V, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct Entries<'a, K, V>(&'a RecencyList<K, V>);

        impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Entries<'_, K, V> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_map()
                    .entries(self.0.iter().map(|entry| (entry.key(), entry.value())))
                    .finish()
            }
        }

        f.debug_struct("OrderedMap")
            .field("len", &self.index.len())
            .field("total_weight", &self.total_weight)
            .field("policy", &self.policy)
            .field("entries", &Entries(&self.list))
            .finish()
    }
}

impl<'a, K, V, P> IntoIterator for &'a OrderedMap<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, P> IntoIterator for OrderedMap<K, V, P> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Consumes the map, yielding pairs oldest first.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{CountLimit, SizeLimit, SizedItem};

    type Counted = OrderedMap<&'static str, i32, CountLimit>;
    type SizeMap = OrderedMap<&'static str, SizedItem<i32>, SizeLimit>;

    fn counted(limit: usize) -> Counted {
        let mut map = OrderedMap::with_policy(CountLimit::new(limit));
        for (i, key) in ["one", "two", "three", "four"].into_iter().enumerate() {
            let _ = map.try_set(key, i as i32 + 1);
        }
        map
    }

    fn values(map: &Counted) -> Vec<i32> {
        map.values().copied().collect()
    }

    #[test]
    fn get_returns_value_and_promotes() {
        let mut map = counted(10);
        assert_eq!(map.get("two"), Some(&2));
        assert_eq!(values(&map), vec![1, 3, 4, 2]);
        assert_eq!(map.peek_newest(), Some((&"two", &2)));
    }

    #[test]
    fn get_on_newest_keeps_order() {
        let mut map = counted(10);
        assert_eq!(map.get("four"), Some(&4));
        assert_eq!(values(&map), vec![1, 2, 3, 4]);
    }

    #[test]
    fn get_miss_has_no_effect() {
        let mut map = counted(10);
        assert_eq!(map.get("missing"), None);
        assert_eq!(values(&map), vec![1, 2, 3, 4]);
    }

    #[test]
    fn find_and_has_do_not_promote() {
        let map = counted(10);
        assert_eq!(map.find("one"), Some(&1));
        assert_eq!(map.find("missing"), None);
        assert!(map.has("one"));
        assert!(!map.has("missing"));
        assert_eq!(map.peek_oldest(), Some((&"one", &1)));
    }

    #[test]
    fn update_replaces_in_place_without_eviction() {
        let mut map = counted(4);
        assert_eq!(map.try_set("one", 10), Ok(vec![]));
        assert_eq!(values(&map), vec![10, 2, 3, 4]);
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn new_key_over_limit_evicts_oldest() {
        let mut map = counted(4);
        assert_eq!(map.try_set("five", 5), Ok(vec!["one"]));
        assert_eq!(values(&map), vec![2, 3, 4, 5]);
        assert!(!map.has("one"));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut map = counted(10);
        assert!(map.delete("three"));
        assert!(!map.delete("three"));
        assert_eq!(values(&map), vec![1, 2, 4]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn delete_oldest_newest_and_last() {
        let mut map = counted(10);
        assert!(map.delete("one"));
        assert_eq!(map.peek_oldest(), Some((&"two", &2)));
        assert!(map.delete("four"));
        assert_eq!(map.peek_newest(), Some((&"three", &3)));
        assert!(map.delete("two"));
        assert!(map.delete("three"));
        assert!(map.is_empty());
        assert_eq!(map.peek_oldest(), None);
        assert_eq!(map.peek_newest(), None);
    }

    #[test]
    fn remove_returns_value() {
        let mut map = counted(10);
        assert_eq!(map.remove("two"), Some(2));
        assert_eq!(map.remove("two"), None);
    }

    #[test]
    fn pop_oldest_follows_recency() {
        let mut map = counted(10);
        map.get("one");
        assert_eq!(map.pop_oldest(), Some(("two", 2)));
        assert_eq!(map.pop_oldest(), Some(("three", 3)));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn touch_promotes_without_read() {
        let mut map = counted(10);
        assert!(map.touch("one"));
        assert!(!map.touch("missing"));
        assert_eq!(values(&map), vec![2, 3, 4, 1]);
    }

    #[test]
    fn recency_rank_counts_from_oldest() {
        let mut map = counted(10);
        assert_eq!(map.recency_rank("one"), Some(0));
        assert_eq!(map.recency_rank("four"), Some(3));
        map.get("one");
        assert_eq!(map.recency_rank("one"), Some(3));
        assert_eq!(map.recency_rank("missing"), None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut map = counted(10);
        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.total_weight(), 0);
        assert_eq!(map.iter().count(), 0);
        assert_eq!(map.try_set("again", 1), Ok(vec![]));
        assert_eq!(map.peek_oldest(), Some((&"again", &1)));
    }

    #[test]
    fn assign_replaces_contents_in_order() {
        let mut map = counted(10);
        map.try_assign([("b", 2), ("a", 1)]).unwrap();
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "a"]);
    }

    #[test]
    fn assign_respects_limit() {
        let mut map: Counted = OrderedMap::with_policy(CountLimit::new(2));
        map.try_assign([("one", 1), ("two", 2), ("three", 3), ("four", 4)])
            .unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["three", "four"]);
    }

    #[test]
    fn display_renders_oldest_first() {
        let mut map = counted(10);
        map.get("two");
        assert_eq!(map.to_string(), "one < three < four < two");

        let empty: Counted = OrderedMap::with_policy(CountLimit::new(1));
        assert_eq!(empty.to_string(), "");
    }

    #[test]
    fn debug_lists_entries() {
        let map = counted(10);
        let dbg = format!("{:?}", map);
        assert!(dbg.contains("OrderedMap"));
        assert!(dbg.contains("\"one\": 1"));
    }

    #[test]
    fn export_then_import_reproduces_order() {
        let mut map = counted(10);
        map.get("two");
        let pairs = map.export();

        let mut copy: Counted = OrderedMap::with_policy(CountLimit::new(10));
        copy.import(pairs.clone()).unwrap();
        assert_eq!(copy.export(), pairs);
    }

    #[test]
    fn owned_iteration_drains_oldest_first() {
        let map = counted(10);
        let pairs: Vec<_> = map.into_iter().collect();
        assert_eq!(pairs, vec![("one", 1), ("two", 2), ("three", 3), ("four", 4)]);
    }

    #[test]
    fn size_update_can_trigger_eviction() {
        let mut map: SizeMap = OrderedMap::with_policy(SizeLimit::new(100));
        map.try_set("a", SizedItem::new(1, 40)).unwrap();
        map.try_set("b", SizedItem::new(2, 40)).unwrap();
        map.try_set("c", SizedItem::new(3, 20)).unwrap();

        // "c" grows; the oldest entry makes room, "c" keeps its position.
        assert_eq!(map.try_set("c", SizedItem::new(3, 50)), Ok(vec!["a"]));
        assert_eq!(map.total_weight(), 90);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b", "c"]);
    }

    #[test]
    fn size_update_of_oldest_may_evict_itself() {
        let mut map: SizeMap = OrderedMap::with_policy(SizeLimit::new(100));
        map.try_set("a", SizedItem::new(1, 10)).unwrap();
        map.try_set("b", SizedItem::new(2, 60)).unwrap();

        assert_eq!(map.try_set("a", SizedItem::new(1, 50)), Ok(vec!["a"]));
        assert_eq!(map.total_weight(), 60);
        assert!(!map.has("a"));
    }

    #[test]
    fn weights_summing_past_usize_max_evict_instead_of_overflowing() {
        let mut map: SizeMap = OrderedMap::with_policy(SizeLimit::new(usize::MAX));
        map.try_set("a", SizedItem::new(1, usize::MAX)).unwrap();
        assert_eq!(map.try_set("b", SizedItem::new(2, 1)), Ok(vec!["a"]));
        assert_eq!(map.total_weight(), 1);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["b"]);

        // Growing an entry to the full capacity pushes out everything older.
        map.try_set("c", SizedItem::new(3, 1)).unwrap();
        assert_eq!(map.try_set("c", SizedItem::new(3, usize::MAX)), Ok(vec!["b"]));
        assert_eq!(map.total_weight(), usize::MAX);
        assert!(map.check_invariants().is_ok());
    }

    #[test]
    fn rejected_set_leaves_map_untouched() {
        let mut map: SizeMap = OrderedMap::with_policy(SizeLimit::new(100));
        map.try_set("a", SizedItem::new(1, 60)).unwrap();
        assert!(map.try_set("b", SizedItem::new(2, 101)).is_err());
        assert!(map.try_set("a", SizedItem::new(1, 101)).is_err());
        assert_eq!(map.len(), 1);
        assert_eq!(map.total_weight(), 60);
        assert_eq!(map.find("a"), Some(&SizedItem::new(1, 60)));
    }

    #[test]
    fn rejected_assign_keeps_previous_contents() {
        let mut map: SizeMap = OrderedMap::with_policy(SizeLimit::new(100));
        map.try_set("keep", SizedItem::new(1, 10)).unwrap();

        let err = map
            .try_assign([("a", SizedItem::new(1, 10)), ("b", SizedItem::new(2, 500))])
            .unwrap_err();
        assert_eq!(err.weight(), 500);
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["keep"]);
        assert_eq!(map.total_weight(), 10);
    }

    #[test]
    fn check_invariants_passes_on_reachable_states() {
        let mut map = counted(3);
        map.try_set("five", 5).unwrap();
        map.get("three");
        map.delete("four");
        assert!(map.check_invariants().is_ok());
    }

    #[test]
    fn string_keys_are_looked_up_by_str() {
        let mut map: OrderedMap<String, i32, CountLimit> =
            OrderedMap::with_policy(CountLimit::new(2));
        map.try_set("alpha".to_string(), 1).unwrap();
        assert_eq!(map.get("alpha"), Some(&1));
        assert!(map.delete("alpha"));
    }

    #[cfg(feature = "metrics")]
    #[test]
    fn metrics_track_hits_misses_and_evictions() {
        let mut map = counted(4);
        map.get("one");
        map.get("missing");
        map.find("two");
        map.try_set("five", 5).unwrap();
        map.try_set("five", 50).unwrap();
        map.delete("five");
        map.delete("five");

        let snapshot = map.metrics_snapshot();
        assert_eq!(snapshot.get_hits, 1);
        assert_eq!(snapshot.get_misses, 1);
        assert_eq!(snapshot.find_calls, 1);
        assert_eq!(snapshot.find_hits, 1);
        assert_eq!(snapshot.insert_new, 5);
        assert_eq!(snapshot.insert_updates, 1);
        assert_eq!(snapshot.evict_calls, 1);
        assert_eq!(snapshot.evicted_entries, 1);
        assert_eq!(snapshot.delete_calls, 2);
        assert_eq!(snapshot.delete_found, 1);
        assert_eq!(snapshot.map_len, 3);
        assert_eq!(snapshot.capacity, 4);

        map.reset_metrics();
        assert_eq!(map.metrics_snapshot().get_calls, 0);
    }
}
