//! Example demonstrating the MapBuilder API.
//!
//! Run with: cargo run --example basic_builder

use lrukit::builder::MapBuilder;
use lrukit::policy::SizedItem;

fn main() {
    println!("=== MapBuilder Examples ===\n");

    // Example 1: count-limited map with initial entries
    println!("1. Count-limited map");
    let mut limit = MapBuilder::new(3)
        .reserve(3)
        .entries([(1u64, "one"), (2, "two"), (3, "three")])
        .build_limit();

    limit.get(&1);
    let evicted = limit.set(4, "four");
    println!("   evicted {:?} (least recently used)", evicted);
    println!("   order: {}", limit);
    println!();

    // Example 2: size-limited map over declared weights
    println!("2. Size-limited map");
    let mut sized = MapBuilder::new(100)
        .entries([("a", SizedItem::new('a', 60)), ("b", SizedItem::new('b', 30))])
        .build_size();
    println!("   size {} / {}", sized.size(), sized.max_size());
    let evicted = sized.set("c", SizedItem::new('c', 20)).unwrap_or_default();
    println!("   evicted {:?} to fit c", evicted);
    println!();

    // Example 3: size-limited map with a closure weigher
    println!("3. Closure weigher");
    let mut text = MapBuilder::new(16).build_size_with(|s: &String| s.len());
    text.set("greeting", "hello, world".to_string()).unwrap_or_default();
    let evicted = text.set("farewell", "goodbye".to_string()).unwrap_or_default();
    println!("   evicted {:?}, size {}", evicted, text.size());
    println!();

    // Example 4: invalid configuration
    println!("4. Invalid configuration");
    match MapBuilder::<u8, u8>::new(0).try_build_limit() {
        Ok(_) => println!("   unexpectedly built"),
        Err(err) => println!("   error: {}", err),
    }
}
