use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use llrb_tree::{LLRBTreeMap, LLRBTreeSet};
use std::collections::{BTreeMap, BTreeSet};
use std::hint::black_box;

const N: usize = 10_000;

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Deterministic LCG sequence.
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn bench_map_insert(c: &mut Criterion) {
    for (name, keys) in [("ordered", ordered_keys(N)), ("random", random_keys(N))] {
        let mut group = c.benchmark_group(format!("map_insert_{name}"));

        group.bench_function(BenchmarkId::new("LLRBTreeMap", N), |b| {
            b.iter(|| keys.iter().map(|&k| (k, k)).collect::<LLRBTreeMap<_, _>>());
        });
        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| keys.iter().map(|&k| (k, k)).collect::<BTreeMap<_, _>>());
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    let keys = random_keys(N);
    let llrb: LLRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("LLRBTreeMap", N), |b| {
        b.iter(|| keys.iter().filter(|k| llrb.get(black_box(*k)).is_some()).count());
    });
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| keys.iter().filter(|k| bt.get(black_box(*k)).is_some()).count());
    });

    group.finish();
}

fn bench_map_remove(c: &mut Criterion) {
    let keys = random_keys(N);
    let llrb: LLRBTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("LLRBTreeMap", N), |b| {
        b.iter_batched(
            || llrb.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            BatchSize::LargeInput,
        );
    });
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || bt.clone(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            BatchSize::LargeInput,
        );
    });

    group.finish();
}

fn bench_order_statistics(c: &mut Criterion) {
    let keys = random_keys(N);
    let llrb: LLRBTreeSet<i64> = keys.iter().copied().collect();
    let bt: BTreeSet<i64> = keys.iter().copied().collect();
    let mut group = c.benchmark_group("set_rank_select");

    group.bench_function(BenchmarkId::new("LLRBTreeSet", N), |b| {
        b.iter(|| {
            (1..=llrb.len())
                .step_by(97)
                .filter_map(|i| llrb.select(black_box(i)))
                .map(|k| llrb.rank(k))
                .sum::<usize>()
        });
    });
    // Linear scans are the only way to answer the same queries on a BTreeSet.
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            (1..=bt.len())
                .step_by(97)
                .filter_map(|i| bt.iter().nth(black_box(i) - 1))
                .map(|k| bt.range(..k).count())
                .sum::<usize>()
        });
    });

    group.finish();
}

fn bench_floor_ceiling(c: &mut Criterion) {
    let keys = random_keys(N);
    let llrb: LLRBTreeSet<i64> = keys.iter().map(|k| k * 2).collect();
    let bt: BTreeSet<i64> = keys.iter().map(|k| k * 2).collect();
    let mut group = c.benchmark_group("set_floor_ceiling");

    group.bench_function(BenchmarkId::new("LLRBTreeSet", N), |b| {
        b.iter(|| {
            keys.iter()
                .filter(|&&k| llrb.floor(&(k * 2 + 1)).is_some() && llrb.ceiling(&(k * 2 + 1)).is_some())
                .count()
        });
    });
    group.bench_function(BenchmarkId::new("BTreeSet", N), |b| {
        b.iter(|| {
            keys.iter()
                .filter(|&&k| bt.range(..=k * 2 + 1).next_back().is_some() && bt.range(k * 2 + 1..).next().is_some())
                .count()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_map_insert,
    bench_map_get,
    bench_map_remove,
    bench_order_statistics,
    bench_floor_ceiling
);
criterion_main!(benches);
