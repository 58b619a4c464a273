//! DHAT heap profiler for lrukit.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use lrukit::map::{LimitLruMap, OrderedMap, SizeLruMap};
use lrukit::policy::EvictionPolicy;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    fn next_f64(&mut self) -> f64 {
        const SCALE: f64 = 1.0 / (u64::MAX as f64);
        (self.next_u64() as f64) * SCALE
    }
}

fn payload(key: u64) -> Vec<u8> {
    vec![0u8; 16 + (key % 112) as usize]
}

/// Hotset workload: 90% of accesses hit 10% of keys.
fn hotset_workload<P>(map: &mut OrderedMap<u64, Vec<u8>, P>, operations: usize, universe: u64, seed: u64)
where
    P: EvictionPolicy<Vec<u8>>,
{
    let mut rng = XorShift64::new(seed);
    let hot_size = (universe as f64 * 0.1) as u64;

    for _ in 0..operations {
        let key = if rng.next_f64() < 0.9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };

        if map.get(&key).is_none() {
            let _ = map.try_set(key, payload(key));
        }
    }
}

/// Sequential scan over the key universe.
fn scan_workload<P>(map: &mut OrderedMap<u64, Vec<u8>, P>, operations: usize, universe: u64)
where
    P: EvictionPolicy<Vec<u8>>,
{
    for i in 0..operations {
        let key = (i as u64) % universe;
        if map.get(&key).is_none() {
            let _ = map.try_set(key, payload(key));
        }
    }
}

/// Inserts fresh keys only, so every insert past capacity evicts.
fn eviction_churn<P>(map: &mut OrderedMap<u64, Vec<u8>, P>, operations: usize)
where
    P: EvictionPolicy<Vec<u8>>,
{
    let base = u64::MAX / 2;
    for i in 0..operations as u64 {
        let _ = map.try_set(base + i, payload(i));
    }
}

fn profile_limit() {
    println!("=== Profiling count-limited map ===");
    let limit = 4096;
    let operations = 100_000;
    let universe = 16_384;

    let mut map = LimitLruMap::new(limit);
    for i in 0..limit as u64 {
        map.set(i, payload(i));
    }

    hotset_workload(&mut map, operations, universe, 42);
    scan_workload(&mut map, operations / 2, universe);
    eviction_churn(&mut map, operations / 4);

    println!("  Final len: {}", map.len());
}

fn profile_size() {
    println!("=== Profiling size-limited map ===");
    let max_size = 256 * 1024;
    let operations = 100_000;
    let universe = 16_384;

    let mut map = SizeLruMap::with_weigher(max_size, |v: &Vec<u8>| v.len());

    hotset_workload(&mut map, operations, universe, 42);
    scan_workload(&mut map, operations / 2, universe);
    eviction_churn(&mut map, operations / 4);

    println!("  Final len: {}, size: {} bytes", map.len(), map.size());
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("lrukit DHAT Heap Profiling");
    println!("==========================\n");

    profile_limit();
    profile_size();

    println!("\n==========================");
    println!("Profile written to dhat-heap.json");
}
