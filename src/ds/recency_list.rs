//! Recency list: an intrusive doubly linked list of map entries backed by
//! [`SlotArena`].
//!
//! Every [`Entry`] carries its own `older`/`newer` links as [`SlotId`]
//! handles, so the list is a view over entries the arena owns rather than a
//! separate owning structure.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Entry<K, V>>)
//!   ┌────────┬──────────────────────────────────────────────────────┐
//!   │ SlotId │ Entry { key, value, weight, older, newer }           │
//!   ├────────┼──────────────────────────────────────────────────────┤
//!   │ id_1   │ { "one",   1, 1, older: None,     newer: Some(id_2) } │
//!   │ id_2   │ { "two",   2, 1, older: Some(id_1), newer: id_3 }     │
//!   │ id_3   │ { "three", 3, 1, older: Some(id_2), newer: None }     │
//!   └────────┴──────────────────────────────────────────────────────┘
//!
//!   oldest ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── newest
//! ```
//!
//! ## Operations
//! - `push_newest`: allocate + attach after `newest`
//! - `move_to_newest(id)`: detach + attach after `newest` (no-op if already newest)
//! - `unlink(id)`: detach + free slot
//! - `pop_oldest`: unlink the entry at `oldest`
//!
//! All of the above are O(1). Iteration walks `newer` links from `oldest`.

use std::iter::FusedIterator;

use crate::ds::slot_arena::{SlotArena, SlotId};
use crate::error::InvariantError;

/// A live map entry together with its position links.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) weight: usize,
    older: Option<SlotId>,
    newer: Option<SlotId>,
}

impl<K, V> Entry<K, V> {
    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Weight recorded when the value was stored.
    pub fn weight(&self) -> usize {
        self.weight
    }

    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

#[derive(Debug, Clone)]
pub struct RecencyList<K, V> {
    arena: SlotArena<Entry<K, V>>,
    oldest: Option<SlotId>,
    newest: Option<SlotId>,
}

impl<K, V> RecencyList<K, V> {
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            oldest: None,
            newest: None,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            oldest: None,
            newest: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    pub fn reserve(&mut self, additional: usize) {
        self.arena.reserve(additional);
    }

    pub fn oldest_id(&self) -> Option<SlotId> {
        self.oldest
    }

    pub fn newest_id(&self) -> Option<SlotId> {
        self.newest
    }

    pub fn oldest(&self) -> Option<&Entry<K, V>> {
        self.oldest.and_then(|id| self.arena.get(id))
    }

    pub fn newest(&self) -> Option<&Entry<K, V>> {
        self.newest.and_then(|id| self.arena.get(id))
    }

    pub fn get(&self, id: SlotId) -> Option<&Entry<K, V>> {
        self.arena.get(id)
    }

    /// Mutable access to an entry's payload. Links stay private to the list.
    pub(crate) fn get_mut(&mut self, id: SlotId) -> Option<&mut Entry<K, V>> {
        self.arena.get_mut(id)
    }

    /// Appends a new entry as the newest and returns its handle.
    pub fn push_newest(&mut self, key: K, value: V, weight: usize) -> SlotId {
        let id = self.arena.insert(Entry {
            key,
            value,
            weight,
            older: self.newest,
            newer: None,
        });
        match self.newest {
            Some(previous) => {
                if let Some(entry) = self.arena.get_mut(previous) {
                    entry.newer = Some(id);
                }
            },
            None => self.oldest = Some(id),
        }
        self.newest = Some(id);
        id
    }

    /// Promotes `id` to the newest position; returns `false` if `id` is not live.
    pub fn move_to_newest(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.newest == Some(id) {
            return true;
        }
        self.detach(id);
        self.attach_newest(id);
        true
    }

    /// Removes `id` from the list and frees its slot.
    pub fn unlink(&mut self, id: SlotId) -> Option<Entry<K, V>> {
        self.detach(id)?;
        self.arena.remove(id)
    }

    pub fn pop_oldest(&mut self) -> Option<Entry<K, V>> {
        let id = self.oldest?;
        self.unlink(id)
    }

    /// Drops every entry at once; no per-entry unlinking.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.oldest = None;
        self.newest = None;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            current: self.oldest,
            remaining: self.len(),
        }
    }

    /// Handles from oldest to newest.
    pub fn iter_ids(&self) -> impl Iterator<Item = SlotId> + '_ {
        let mut current = self.oldest;
        std::iter::from_fn(move || {
            let id = current?;
            current = self.arena.get(id)?.newer;
            Some(id)
        })
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (older, newer) = {
            let entry = self.arena.get(id)?;
            (entry.older, entry.newer)
        };

        match older {
            Some(older_id) => {
                if let Some(entry) = self.arena.get_mut(older_id) {
                    entry.newer = newer;
                }
            },
            None => self.oldest = newer,
        }

        match newer {
            Some(newer_id) => {
                if let Some(entry) = self.arena.get_mut(newer_id) {
                    entry.older = older;
                }
            },
            None => self.newest = older,
        }

        if let Some(entry) = self.arena.get_mut(id) {
            entry.older = None;
            entry.newer = None;
        }

        Some(())
    }

    fn attach_newest(&mut self, id: SlotId) -> Option<()> {
        let previous = self.newest;
        let entry = self.arena.get_mut(id)?;
        entry.older = previous;
        entry.newer = None;

        match previous {
            Some(previous_id) => {
                if let Some(entry) = self.arena.get_mut(previous_id) {
                    entry.newer = Some(id);
                }
            },
            None => self.oldest = Some(id),
        }
        self.newest = Some(id);
        Some(())
    }

    /// Walks the list both ways and checks it against the arena.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.oldest.is_none() || self.newest.is_none() {
            if self.oldest.is_some() || self.newest.is_some() {
                return Err(InvariantError::new("only one recency sentinel is set"));
            }
            if !self.arena.is_empty() {
                return Err(InvariantError::new(format!(
                    "recency list has no sentinels but arena holds {} entries",
                    self.arena.len()
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut previous = None;
        let mut current = self.oldest;
        while let Some(id) = current {
            let entry = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new("recency link points at a vacant slot"))?;
            if entry.older != previous {
                return Err(InvariantError::new(format!(
                    "entry at slot {} has a stale older link",
                    id.index()
                )));
            }
            count += 1;
            if count > self.arena.len() {
                return Err(InvariantError::new("cycle detected in recency list"));
            }
            previous = Some(id);
            current = entry.newer;
        }

        if previous != self.newest {
            return Err(InvariantError::new(
                "newest sentinel is not the end of the newer chain",
            ));
        }
        if count != self.arena.len() {
            return Err(InvariantError::new(format!(
                "recency list reaches {} entries but arena holds {}",
                count,
                self.arena.len()
            )));
        }
        Ok(())
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over entries from oldest to newest.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    current: Option<SlotId>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let entry = self.list.arena.get(id)?;
        self.current = entry.newer;
        self.remaining = self.remaining.saturating_sub(1);
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            list: self.list,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str, i32>) -> Vec<&'static str> {
        list.iter().map(|entry| *entry.key()).collect()
    }

    fn list_of(keys: &[&'static str]) -> (RecencyList<&'static str, i32>, Vec<SlotId>) {
        let mut list = RecencyList::new();
        let ids = keys
            .iter()
            .enumerate()
            .map(|(i, key)| list.push_newest(*key, i as i32, 1))
            .collect();
        (list, ids)
    }

    #[test]
    fn push_newest_orders_oldest_first() {
        let (list, ids) = list_of(&["a", "b", "c"]);
        assert_eq!(keys(&list), vec!["a", "b", "c"]);
        assert_eq!(list.oldest_id(), Some(ids[0]));
        assert_eq!(list.newest_id(), Some(ids[2]));
        assert_eq!(list.len(), 3);
        list.check_invariants().unwrap();
    }

    #[test]
    fn first_push_sets_both_sentinels() {
        let mut list = RecencyList::new();
        let id = list.push_newest("only", 1, 1);
        assert_eq!(list.oldest_id(), Some(id));
        assert_eq!(list.newest_id(), Some(id));
        list.check_invariants().unwrap();
    }

    #[test]
    fn move_to_newest_from_oldest_middle_and_newest() {
        let (mut list, ids) = list_of(&["a", "b", "c", "d"]);

        assert!(list.move_to_newest(ids[0]));
        assert_eq!(keys(&list), vec!["b", "c", "d", "a"]);
        list.check_invariants().unwrap();

        assert!(list.move_to_newest(ids[2]));
        assert_eq!(keys(&list), vec!["b", "d", "a", "c"]);
        list.check_invariants().unwrap();

        assert!(list.move_to_newest(ids[2]));
        assert_eq!(keys(&list), vec!["b", "d", "a", "c"]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn move_to_newest_on_single_entry_is_noop() {
        let (mut list, ids) = list_of(&["a"]);
        assert!(list.move_to_newest(ids[0]));
        assert_eq!(keys(&list), vec!["a"]);
        list.check_invariants().unwrap();
    }

    #[test]
    fn unlink_middle_and_ends() {
        let (mut list, ids) = list_of(&["a", "b", "c"]);

        assert_eq!(list.unlink(ids[1]).map(Entry::into_pair), Some(("b", 1)));
        assert_eq!(keys(&list), vec!["a", "c"]);
        list.check_invariants().unwrap();

        assert_eq!(list.unlink(ids[0]).map(|e| e.key), Some("a"));
        assert_eq!(list.oldest().map(|e| e.key), Some("c"));
        assert_eq!(list.newest().map(|e| e.key), Some("c"));

        assert_eq!(list.unlink(ids[2]).map(|e| e.key), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.oldest_id(), None);
        assert_eq!(list.newest_id(), None);
        list.check_invariants().unwrap();
    }

    #[test]
    fn unlink_stale_handle_is_none() {
        let (mut list, ids) = list_of(&["a", "b"]);
        list.unlink(ids[0]);
        assert!(list.unlink(ids[0]).is_none());
        assert!(!list.move_to_newest(ids[0]));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn pop_oldest_drains_in_order() {
        let (mut list, _) = list_of(&["a", "b", "c"]);
        let drained: Vec<_> = std::iter::from_fn(|| list.pop_oldest().map(|e| e.key)).collect();
        assert_eq!(drained, vec!["a", "b", "c"]);
        assert!(list.pop_oldest().is_none());
        list.check_invariants().unwrap();
    }

    #[test]
    fn clear_resets_sentinels() {
        let (mut list, ids) = list_of(&["a", "b"]);
        list.clear();
        assert!(list.is_empty());
        assert!(list.oldest().is_none());
        assert!(list.newest().is_none());
        assert!(!list.contains(ids[0]));
        list.check_invariants().unwrap();
    }

    #[test]
    fn iter_reports_exact_len() {
        let (list, ids) = list_of(&["a", "b", "c"]);
        let mut iter = list.iter();
        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        assert_eq!(list.iter_ids().collect::<Vec<_>>(), ids);
    }

    #[test]
    fn get_mut_updates_payload_in_place() {
        let (mut list, ids) = list_of(&["a", "b"]);
        if let Some(entry) = list.get_mut(ids[0]) {
            entry.value = 40;
        }
        assert_eq!(list.get(ids[0]).map(|e| *e.value()), Some(40));
        assert_eq!(keys(&list), vec!["a", "b"]);
    }
}
