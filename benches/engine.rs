//! Engine benchmarks over randomly generated expressions.
//!
//! Run with:
//! ```bash
//! cargo bench --bench engine
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use prop_logic::{compare_expressions, generate, parse, Node};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

const VARS: [&str; 10] = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];

fn random_tree(leaves: usize, num_vars: usize, seed: u64) -> Node {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate(&mut rng, leaves, &VARS[..num_vars])
}

// ============================================================================
// Truth tables
// ============================================================================

fn bench_truth_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/truth_table");

    for num_vars in [4, 6, 8, 10] {
        let tree = random_tree(2 * num_vars, num_vars, 1);
        group.throughput(Throughput::Elements(1 << tree.variable_names().len()));
        group.bench_with_input(BenchmarkId::from_parameter(num_vars), &tree, |b, tree| {
            b.iter(|| tree.truth_table().unwrap());
        });
    }

    group.finish();
}

fn bench_normal_forms(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/normal_forms");

    for num_vars in [4, 6, 8] {
        let tree = random_tree(2 * num_vars, num_vars, 2);
        group.bench_with_input(BenchmarkId::new("cnf", num_vars), &tree, |b, tree| {
            b.iter(|| tree.to_cnf().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("dnf", num_vars), &tree, |b, tree| {
            b.iter(|| tree.to_dnf().unwrap());
        });
    }

    group.finish();
}

// ============================================================================
// Rewrites
// ============================================================================

fn bench_shuffle(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/shuffle");

    for leaves in [8, 32, 128] {
        let tree = random_tree(leaves, 6, 3);
        group.bench_with_input(BenchmarkId::from_parameter(leaves), &tree, |b, tree| {
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| tree.shuffled(&mut rng));
        });
    }

    group.finish();
}

fn bench_nnf(c: &mut Criterion) {
    let tree = random_tree(64, 6, 4);
    c.bench_function("engine/nnf_64", |b| b.iter(|| tree.to_nnf()));
}

// ============================================================================
// Generation, parsing, comparison
// ============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/generate");

    for leaves in [4, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(leaves), &leaves, |b, &leaves| {
            let mut rng = ChaCha8Rng::seed_from_u64(5);
            b.iter(|| generate(&mut rng, leaves, &VARS[..5]));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let text = random_tree(64, 8, 6).render(prop_logic::display::Notation::Ascii);
    c.bench_function("engine/parse_64", |b| b.iter(|| parse(&text).unwrap()));
}

fn bench_compare(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let tree = random_tree(16, 8, 7);
    let exprs: Vec<Node> = (0..4).map(|_| tree.shuffled(&mut rng)).collect();
    c.bench_function("engine/compare_4x8", |b| {
        b.iter(|| compare_expressions(&exprs).unwrap());
    });
}

criterion_group!(
    benches,
    bench_truth_table,
    bench_normal_forms,
    bench_shuffle,
    bench_nnf,
    bench_generate,
    bench_parse,
    bench_compare,
);
criterion_main!(benches);
