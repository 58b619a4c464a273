pub mod recency_list;
pub mod slot_arena;

pub use recency_list::{Entry, RecencyList};
pub use slot_arena::{SlotArena, SlotId};
