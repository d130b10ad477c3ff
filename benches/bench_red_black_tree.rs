use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use red_black_collections::red_black_tree::{RedBlackMap, RedBlackMultiset};
use std::collections::BTreeMap;

const NUM_OF_OPERATIONS: usize = 100;

fn random_pairs() -> Vec<(u32, u32)> {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    (0..NUM_OF_OPERATIONS)
        .map(|_| (rng.next_u32(), rng.next_u32()))
        .collect()
}

fn bench_btreemap_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench btreemap insert", move |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
        })
    });
}

fn bench_btreemap_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let map = pairs.iter().cloned().collect::<BTreeMap<u32, u32>>();
    c.bench_function("bench btreemap get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_red_black_map_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench red_black_map insert", move |b| {
        b.iter(|| {
            let mut map = RedBlackMap::new();
            for (key, val) in &pairs {
                map.insert(*key, *val);
            }
        })
    });
}

fn bench_red_black_map_get(c: &mut Criterion) {
    let pairs = random_pairs();
    let map = pairs.iter().cloned().collect::<RedBlackMap<u32, u32>>();
    c.bench_function("bench red_black_map get", move |b| {
        b.iter(|| {
            for (key, _) in &pairs {
                black_box(map.get(key));
            }
        })
    });
}

fn bench_red_black_map_remove(c: &mut Criterion) {
    let pairs = random_pairs();
    let map = pairs.iter().cloned().collect::<RedBlackMap<u32, u32>>();
    c.bench_function("bench red_black_map remove", move |b| {
        b.iter(|| {
            let mut map = map.clone();
            for (key, _) in &pairs {
                black_box(map.remove(key));
            }
        })
    });
}

fn bench_red_black_multiset_insert(c: &mut Criterion) {
    let pairs = random_pairs();
    c.bench_function("bench red_black_multiset insert", move |b| {
        b.iter(|| {
            let mut multiset = RedBlackMultiset::new();
            for (key, _) in &pairs {
                multiset.insert(*key % 16);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreemap_get,
    bench_btreemap_insert,
    bench_red_black_map_get,
    bench_red_black_map_insert,
    bench_red_black_map_remove,
    bench_red_black_multiset_insert,
);
criterion_main!(benches);
