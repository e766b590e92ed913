//! Criterion benchmarks for loadout ranking.
//!
//! Uses randomly generated inventories so the numbers reflect the
//! enumeration and sort cost rather than any particular item set.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_loadout::gear::{Inventory, Item};
use u_loadout::loadout::{EvaluatorConfig, LoadoutEvaluator};
use u_loadout::stats::StatVector;

const CATEGORIES: [&str; 5] = ["helmet", "arms", "chest", "legs", "class"];

fn random_inventory(items_per_category: usize, seed: u64) -> Inventory {
    let mut rng = StdRng::seed_from_u64(seed);
    CATEGORIES.iter().fold(Inventory::new(), |inventory, &category| {
        let items = (0..items_per_category)
            .map(|i| {
                let stats = StatVector::new(std::array::from_fn(|_| rng.random_range(2..=30)));
                Item::new(format!("{category}-{i}"), 1000, false, stats, stats.total())
                    .expect("generated totals always match")
            })
            .collect();
        inventory.with_category(category, items)
    })
}

fn bench_rank_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_all");
    group.sample_size(20);

    for &per_category in &[4usize, 6, 8] {
        let inventory = random_inventory(per_category, 42);

        for parallel in [false, true] {
            let label = if parallel { "parallel" } else { "sequential" };
            let evaluator =
                LoadoutEvaluator::new(EvaluatorConfig::default().with_parallel(parallel));
            group.bench_with_input(
                BenchmarkId::new(label, per_category),
                &inventory,
                |b, inventory| {
                    b.iter(|| black_box(evaluator.rank_all(black_box(inventory)).unwrap().len()))
                },
            );
        }
    }

    group.finish();
}

fn bench_enumerate(c: &mut Criterion) {
    let inventory = random_inventory(8, 7);
    let evaluator = LoadoutEvaluator::default();

    c.bench_function("enumerate_8x5", |b| {
        b.iter(|| black_box(evaluator.enumerate(black_box(&inventory)).count()))
    });
}

criterion_group!(benches, bench_rank_all, bench_enumerate);
criterion_main!(benches);
