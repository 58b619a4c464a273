//! lrukit: recency-ordered maps with count- and size-bounded LRU eviction.
//!
//! Two flavors share one core ([`map::OrderedMap`]):
//!
//! - [`LimitLruMap`]: holds at most `limit` entries.
//! - [`SizeLruMap`]: keeps the summed weight of its values within `max_size`
//!   and rejects any single value heavier than that.
//!
//! ```
//! use lrukit::prelude::*;
//!
//! let mut map = LimitLruMap::new(4);
//! for (key, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4)] {
//!     map.set(key, value);
//! }
//! map.get("two");
//! assert_eq!(map.to_string(), "one < three < four < two");
//!
//! assert_eq!(map.set("five", 5), vec!["one"]);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
pub mod map;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;

pub use crate::map::{LimitLruMap, OrderedMap, SizeLruMap};
