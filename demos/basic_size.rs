use lrukit::map::SizeLruMap;
use lrukit::policy::SizedItem;

fn main() {
    let mut map: SizeLruMap<&str, SizedItem<u32>> = SizeLruMap::new(1024);

    for (key, value, size) in [("one", 1, 24), ("two", 2, 300), ("three", 3, 300), ("four", 4, 400)] {
        map.set(key, SizedItem::new(value, size)).expect("fits");
    }
    println!("size: {} / {}", map.size(), map.max_size());

    map.get("three");
    match map.set("five", SizedItem::new(5, 50)) {
        Ok(evicted) => println!("evicted: {:?}", evicted),
        Err(err) => println!("rejected: {}", err),
    }
    println!("order: {}, size: {}", map, map.size());

    match map.set("huge", SizedItem::new(6, 2048)) {
        Ok(evicted) => println!("evicted: {:?}", evicted),
        Err(err) => println!("rejected: {}", err),
    }
}

// Expected output:
// size: 1024 / 1024
// evicted: ["one", "two"]
// order: four < three < five, size: 750
// rejected: item size 2048 exceeds max size 1024
//
// Explanation: adding 50 to a full map evicts oldest entries until the total
// fits again. A value heavier than the whole map is refused outright.
