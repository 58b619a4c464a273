pub use crate::builder::MapBuilder;
pub use crate::error::{CapacityExceeded, ConfigError, InvariantError};
#[cfg(feature = "serde")]
pub use crate::error::ImportError;
pub use crate::map::{LimitLruMap, OrderedMap, SizeLruMap};
#[cfg(feature = "metrics")]
pub use crate::metrics::snapshot::MapMetricsSnapshot;
pub use crate::policy::{
    CountLimit, DeclaredWeight, EvictionPolicy, SizeLimit, SizedItem, Weigher, Weighted,
};
