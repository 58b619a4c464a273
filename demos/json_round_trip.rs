//! Export a map to JSON and load it into a fresh one.
//!
//! Run with: cargo run --example json_round_trip --features serde

use lrukit::map::LimitLruMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Item {
    value: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut map = LimitLruMap::new(4);
    for (key, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4)] {
        map.set(key.to_string(), Item { value });
    }
    map.get("two");

    let json = map.to_json()?;
    println!("{}", json);

    let mut restored: LimitLruMap<String, Item> = LimitLruMap::new(4);
    restored.assign_from_json(&json)?;
    println!("restored order: {}", restored);

    Ok(())
}

// Expected output:
// [["one",{"value":1}],["three",{"value":3}],["four",{"value":4}],["two",{"value":2}]]
// restored order: one < three < four < two
