//! JSON export and import (feature `serde`).
//!
//! A map serializes as a sequence of `[key, value]` pairs in recency order,
//! oldest first:
//!
//! ```text
//!   [["one",{"value":1}],["three",{"value":3}],["four",{"value":4}],["two",{"value":2}]]
//! ```
//!
//! Importing parses the whole sequence before touching the map, then loads it
//! through `assign`, so the pair order becomes the new recency order.
//! Capacity is configuration, not data: it is not part of the encoding.

use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::error::ImportError;
use crate::map::OrderedMap;
use crate::policy::EvictionPolicy;

impl<K, V, P> Serialize for OrderedMap<K, V, P>
where
    K: Serialize + Eq + Hash + Clone,
    V: Serialize,
    P: EvictionPolicy<V>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for pair in self.iter() {
            seq.serialize_element(&pair)?;
        }
        seq.end()
    }
}

impl<K, V, P> OrderedMap<K, V, P>
where
    K: Eq + Hash + Clone,
    P: EvictionPolicy<V>,
{
    /// Encodes the map as a JSON array of `[key, value]` pairs, oldest first.
    pub fn to_json(&self) -> Result<String, serde_json::Error>
    where
        K: Serialize,
        V: Serialize,
    {
        serde_json::to_string(self)
    }

    /// Replaces the contents with pairs decoded from `data`.
    ///
    /// # Errors
    ///
    /// [`ImportError::Malformed`] if `data` is not a sequence of `[key, value]`
    /// pairs, [`ImportError::Capacity`] if a value can never fit. Either way
    /// the map keeps its previous contents.
    pub fn assign_from_json(&mut self, data: &str) -> Result<(), ImportError>
    where
        K: DeserializeOwned,
        V: DeserializeOwned,
        P::Error: Into<ImportError>,
    {
        let pairs: Vec<(K, V)> = serde_json::from_str(data)?;
        self.try_assign(pairs).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ImportError;
    use crate::map::{LimitLruMap, SizeLruMap};
    use crate::policy::SizedItem;

    #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Item {
        value: i32,
    }

    fn sample() -> LimitLruMap<String, Item> {
        let mut map = LimitLruMap::new(usize::MAX);
        for (key, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4)] {
            map.set(key.to_string(), Item { value });
        }
        map
    }

    const ENCODED: &str =
        r#"[["one",{"value":1}],["three",{"value":3}],["four",{"value":4}],["two",{"value":2}]]"#;

    #[test]
    fn serializes_in_recency_order() {
        let mut map = sample();
        map.get("two");
        assert_eq!(map.to_json().unwrap(), ENCODED);
    }

    #[test]
    fn assign_from_json_restores_order() {
        let mut map = sample();
        map.assign_from_json(ENCODED).unwrap();
        let values: Vec<i32> = map.values().map(|item| item.value).collect();
        assert_eq!(values, vec![1, 3, 4, 2]);
    }

    #[test]
    fn malformed_input_leaves_map_untouched() {
        let mut map = sample();
        let err = map.assign_from_json(r#"[["one"]]"#).unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
        assert_eq!(map.len(), 4);

        let err = map.assign_from_json("not json").unwrap_err();
        assert!(matches!(err, ImportError::Malformed(_)));
        assert_eq!(map.keys().next().map(String::as_str), Some("one"));
    }

    #[test]
    fn size_map_round_trip_keeps_size() {
        let mut map: SizeLruMap<String, SizedItem<i32>> = SizeLruMap::new(1024);
        map.set("one".into(), SizedItem::new(1, 24)).unwrap();
        map.set("two".into(), SizedItem::new(2, 300)).unwrap();
        map.get("one");

        let json = map.to_json().unwrap();
        assert_eq!(
            json,
            r#"[["two",{"value":2,"size":300}],["one",{"value":1,"size":24}]]"#
        );

        let mut copy: SizeLruMap<String, SizedItem<i32>> = SizeLruMap::new(1024);
        copy.assign_from_json(&json).unwrap();
        assert_eq!(copy.export(), map.export());
        assert_eq!(copy.size(), 324);
    }

    #[test]
    fn oversize_import_is_rejected() {
        let mut map: SizeLruMap<String, SizedItem<i32>> = SizeLruMap::new(100);
        map.set("keep".into(), SizedItem::new(0, 1)).unwrap();

        let err = map
            .assign_from_json(r#"[["big",{"value":1,"size":101}]]"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::Capacity(_)));
        assert!(map.has("keep"));
        assert_eq!(map.size(), 1);
    }
}
