#![no_main]

use libfuzzer_sys::fuzz_target;
use lrukit::ds::RecencyList;

// Fuzz arbitrary operation sequences on RecencyList
//
// Tests random sequences of push, move-to-newest, unlink, pop and clear,
// checking link integrity after every step.
fuzz_target!(|data: &[u8]| {
    let mut list: RecencyList<u8, ()> = RecencyList::new();
    let mut ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let arg = pair[1];
        match pair[0] % 5 {
            0 | 1 => {
                let id = list.push_newest(arg, (), 1);
                assert_eq!(list.newest_id(), Some(id));
                ids.push(id);
            }
            2 => {
                if !ids.is_empty() {
                    let id = ids[usize::from(arg) % ids.len()];
                    let live = list.contains(id);
                    assert_eq!(list.move_to_newest(id), live);
                    if live {
                        assert_eq!(list.newest_id(), Some(id));
                    }
                }
            }
            3 => {
                if !ids.is_empty() {
                    let id = ids.swap_remove(usize::from(arg) % ids.len());
                    let len = list.len();
                    if list.unlink(id).is_some() {
                        assert_eq!(list.len(), len - 1);
                    }
                    assert!(!list.contains(id));
                }
            }
            4 => {
                if arg % 8 == 0 {
                    list.clear();
                    ids.clear();
                } else {
                    let oldest = list.oldest_id();
                    let popped = list.pop_oldest();
                    assert_eq!(popped.is_some(), oldest.is_some());
                }
            }
            _ => unreachable!(),
        }

        assert!(list.check_invariants().is_ok());
        assert_eq!(list.iter().count(), list.len());
    }
});
