//! Error types for the lrukit library.
//!
//! ## Key Components
//!
//! - [`CapacityExceeded`]: Returned by size-limited maps when a single value
//!   weighs more than the whole map may hold. The map is left untouched.
//! - [`ConfigError`]: Returned when construction parameters are invalid
//!   (e.g. a count limit of zero).
//! - [`InvariantError`]: Returned by `check_invariants` when the key index,
//!   recency list, or size accounting disagree.
//! - `ImportError` (feature `serde`): Returned when importing a serialized
//!   pair sequence fails.
//!
//! Absence of a key is never an error: lookups return `None` and deletes
//! return `false`.
//!
//! ## Example Usage
//!
//! ```
//! use lrukit::error::{CapacityExceeded, ConfigError};
//! use lrukit::map::{LimitLruMap, SizeLruMap};
//! use lrukit::policy::SizedItem;
//!
//! let bad: Result<LimitLruMap<&str, i32>, ConfigError> = LimitLruMap::try_new(0);
//! assert!(bad.is_err());
//!
//! let mut map: SizeLruMap<&str, SizedItem<i32>> = SizeLruMap::new(1024);
//! let err = map.set("big", SizedItem::new(1, 2048)).unwrap_err();
//! assert_eq!(err, CapacityExceeded::new(2048, 1024));
//! assert!(map.is_empty());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// CapacityExceeded
// ---------------------------------------------------------------------------

/// A single value is heavier than the map's maximum size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityExceeded {
    weight: usize,
    max_size: usize,
}

impl CapacityExceeded {
    #[inline]
    pub fn new(weight: usize, max_size: usize) -> Self {
        Self { weight, max_size }
    }

    /// Weight of the rejected value.
    #[inline]
    pub fn weight(&self) -> usize {
        self.weight
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl fmt::Display for CapacityExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "item size {} exceeds max size {}",
            self.weight, self.max_size
        )
    }
}

impl std::error::Error for CapacityExceeded {}

// ---------------------------------------------------------------------------
// InvariantError
// ---------------------------------------------------------------------------

/// Error returned when internal map invariants are violated.
///
/// Produced by [`OrderedMap::check_invariants`](crate::map::OrderedMap::check_invariants)
/// and [`RecencyList::check_invariants`](crate::ds::RecencyList::check_invariants).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantError(String);

impl InvariantError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvariantError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when map configuration parameters are invalid.
///
/// Produced by fallible constructors such as
/// [`LimitLruMap::try_new`](crate::map::OrderedMap::try_new) and the
/// `try_build_*` methods of [`MapBuilder`](crate::builder::MapBuilder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

impl From<CapacityExceeded> for ConfigError {
    fn from(err: CapacityExceeded) -> Self {
        Self(format!("initial entries rejected: {}", err))
    }
}

impl From<std::convert::Infallible> for ConfigError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

// ---------------------------------------------------------------------------
// ImportError
// ---------------------------------------------------------------------------

/// Error returned when importing a serialized pair sequence.
///
/// Parsing happens before the map is touched, so on any error the map keeps
/// its previous contents.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub enum ImportError {
    /// The input is not a well-formed sequence of `[key, value]` pairs.
    Malformed(serde_json::Error),
    /// One of the imported values is heavier than the map's maximum size.
    Capacity(CapacityExceeded),
}

#[cfg(feature = "serde")]
impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::Malformed(err) => write!(f, "malformed import data: {}", err),
            ImportError::Capacity(err) => write!(f, "import rejected: {}", err),
        }
    }
}

#[cfg(feature = "serde")]
impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Malformed(err) => Some(err),
            ImportError::Capacity(err) => Some(err),
        }
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for ImportError {
    fn from(err: serde_json::Error) -> Self {
        ImportError::Malformed(err)
    }
}

#[cfg(feature = "serde")]
impl From<CapacityExceeded> for ImportError {
    fn from(err: CapacityExceeded) -> Self {
        ImportError::Capacity(err)
    }
}

#[cfg(feature = "serde")]
impl From<std::convert::Infallible> for ImportError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
