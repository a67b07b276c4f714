use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

use igval::{permutation_isomorphic, refine_labels, AdjacencyMatrix, GraphModel};

fn random_matrix(nodes: usize, probability: f64, seed: u64) -> AdjacencyMatrix {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut matrix = vec![vec![0u64; nodes]; nodes];
    for i in 0..nodes {
        for j in (i + 1)..nodes {
            if rng.gen::<f64>() <= probability {
                matrix[i][j] = 1;
                matrix[j][i] = 1;
            }
        }
    }
    matrix
}

fn relabel(matrix: &AdjacencyMatrix, permutation: &[usize]) -> AdjacencyMatrix {
    let n = matrix.len();
    let mut relabeled = vec![vec![0u64; n]; n];
    for i in 0..n {
        for j in 0..n {
            relabeled[permutation[i]][permutation[j]] = matrix[i][j];
        }
    }
    relabeled
}

fn bench_isomorphism(c: &mut Criterion) {
    let small = GraphModel::from_matrix(&random_matrix(64, 0.15, 42)).expect("small graph");
    let medium = GraphModel::from_matrix(&random_matrix(256, 0.08, 7)).expect("medium graph");

    let matrix = random_matrix(8, 0.4, 19);
    let permutation = [3, 1, 7, 0, 5, 2, 6, 4];
    let pattern = GraphModel::from_matrix(&matrix).expect("pattern graph");
    let shuffled =
        GraphModel::from_matrix(&relabel(&matrix, &permutation)).expect("shuffled graph");

    let mut group = c.benchmark_group("isomorphism");

    group.bench_function("refinement_64", |b| {
        b.iter(|| {
            let labels = refine_labels(&small);
            black_box(labels);
        });
    });

    group.bench_function("refinement_256", |b| {
        b.iter(|| {
            let labels = refine_labels(&medium);
            black_box(labels);
        });
    });

    group.bench_function("permutation_8", |b| {
        b.iter(|| {
            let verdict = permutation_isomorphic(&pattern, &shuffled);
            black_box(verdict);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_isomorphism);
criterion_main!(benches);
