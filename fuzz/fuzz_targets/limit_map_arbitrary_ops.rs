#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::map::LimitLruMap;

// Fuzz arbitrary operation sequences on LimitLruMap
//
// The first byte picks the limit; each following byte pair is (op, key).
fuzz_target!(|data: &[u8]| {
    let Some((&limit, rest)) = data.split_first() else {
        return;
    };
    let limit = usize::from(limit % 32) + 1;
    let mut map: LimitLruMap<u8, u32> = LimitLruMap::new(limit);

    for pair in rest.chunks_exact(2) {
        let key = pair[1];
        match pair[0] % 8 {
            0 | 1 => {
                let was_present = map.has(&key);
                let len = map.len();
                let evicted = map.set(key, u32::from(key));
                if was_present {
                    assert!(evicted.is_empty());
                    assert_eq!(map.len(), len);
                } else {
                    assert!(evicted.len() <= 1);
                }
                assert_eq!(map.find(&key), Some(&u32::from(key)));
            }
            2 => {
                if map.get(&key).is_some() {
                    assert_eq!(map.peek_newest().map(|(k, _)| *k), Some(key));
                }
            }
            3 => {
                let _ = map.find(&key);
            }
            4 => {
                let present = map.has(&key);
                assert_eq!(map.delete(&key), present);
                assert!(!map.has(&key));
            }
            5 => {
                let oldest = map.peek_oldest().map(|(k, _)| *k);
                assert_eq!(map.pop_oldest().map(|(k, _)| k), oldest);
            }
            6 => {
                let rank = map.recency_rank(&key);
                assert_eq!(rank.is_some(), map.has(&key));
            }
            7 => {
                if key % 16 == 0 {
                    map.clear();
                    assert!(map.is_empty());
                }
            }
            _ => unreachable!(),
        }

        assert!(map.len() <= limit);
        assert!(map.check_invariants().is_ok());
    }
});
