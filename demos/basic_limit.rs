use lrukit::map::LimitLruMap;

fn main() {
    let mut map: LimitLruMap<&str, u32> = LimitLruMap::new(4);

    for (key, value) in [("one", 1), ("two", 2), ("three", 3), ("four", 4)] {
        map.set(key, value);
    }
    println!("order: {}", map);

    if let Some(value) = map.get("two") {
        println!("hit two: {}", value);
    }
    println!("order: {}", map);

    let evicted = map.set("five", 5);
    println!("evicted: {:?}", evicted);
    println!("order: {}", map);
}

// Expected output:
// order: one < two < three < four
// hit two: 2
// order: one < three < four < two
// evicted: ["one"]
// order: three < four < two < five
//
// Explanation: limit=4; get("two") makes it the newest entry, so inserting
// "five" evicts "one", the least recently used key.
