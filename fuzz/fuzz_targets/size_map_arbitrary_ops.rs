#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::map::SizeLruMap;
use lrukit::policy::SizedItem;

// Fuzz arbitrary operation sequences on SizeLruMap
//
// The first two bytes pick max_size; each following triple is (op, key, size).
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let max_size = usize::from(u16::from_le_bytes([data[0], data[1]]) % 2048);
    let mut map: SizeLruMap<u8, SizedItem<u8>> = SizeLruMap::new(max_size);

    for triple in data[2..].chunks_exact(3) {
        let key = triple[1];
        let size = usize::from(triple[2]) * 8;
        match triple[0] % 6 {
            0 | 1 => {
                let before = map.size();
                match map.set(key, SizedItem::new(key, size)) {
                    Ok(evicted) => {
                        assert!(!evicted.contains(&key) || !map.has(&key));
                    }
                    Err(err) => {
                        assert!(size > max_size);
                        assert_eq!(err.weight(), size);
                        assert_eq!(map.size(), before);
                    }
                }
            }
            2 => {
                let _ = map.get(&key);
            }
            3 => {
                let before = map.size();
                let weight = map.find(&key).map(|item| item.size);
                map.delete(&key);
                assert_eq!(map.size(), before - weight.unwrap_or(0));
            }
            4 => {
                let _ = map.pop_oldest();
            }
            5 => {
                let pairs = map.export();
                let mut copy: SizeLruMap<u8, SizedItem<u8>> = SizeLruMap::new(max_size);
                copy.import(pairs).unwrap();
                assert_eq!(copy.size(), map.size());
            }
            _ => unreachable!(),
        }

        assert!(map.size() <= max_size);
        assert!(map.check_invariants().is_ok());
    }
});
