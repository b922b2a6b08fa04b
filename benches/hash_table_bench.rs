use chain_hashmap::{BuildIdentityHasher, DynArray, HashTable, Pair};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("hash_table_insert_10k", |b| {
        b.iter_batched(
            HashTable::<String, u64>::new,
            |mut t| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    t.insert(&Pair::new(key(x), i as u64)).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("hash_table_get_hit", |b| {
        let mut t = HashTable::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            t.insert(&Pair::new(k.clone(), i as u64)).unwrap();
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(t.get(k.as_str()));
        })
    });
}

fn bench_get_miss(c: &mut Criterion) {
    c.bench_function("hash_table_get_miss", |b| {
        let mut t = HashTable::new();
        for (i, x) in lcg(11).take(10_000).enumerate() {
            t.insert(&Pair::new(key(x), i as u64)).unwrap();
        }
        let mut miss = lcg(0xdead_beef);
        b.iter(|| {
            // generate keys unlikely in the table
            let k = key(miss.next().unwrap());
            black_box(t.get(&k));
        })
    });
}

// Grow to 4k pairs and erase back down, crossing every resize boundary twice.
fn bench_grow_shrink_cycle(c: &mut Criterion) {
    c.bench_function("hash_table_grow_shrink_4k", |b| {
        b.iter_batched(
            || HashTable::<u64, u64, BuildIdentityHasher>::with_hasher(BuildIdentityHasher),
            |mut t| {
                for k in 0..4096u64 {
                    t.insert(&Pair::new(k, k)).unwrap();
                }
                for k in 0..4096u64 {
                    t.erase(&k).unwrap();
                }
                black_box(t)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_array_push_erase(c: &mut Criterion) {
    c.bench_function("dyn_array_push_clear_1k", |b| {
        b.iter(|| {
            let mut a = DynArray::new();
            for v in 0..1_000u64 {
                a.push_back(&v).unwrap();
            }
            a.clear();
            black_box(a.capacity())
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_insert, bench_get_hit, bench_get_miss, bench_grow_shrink_cycle, bench_array_push_erase
}
criterion_main!(benches);
