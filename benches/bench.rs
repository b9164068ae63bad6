// Criterion benchmarks for Team Builder

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use team_builder::core::{build_cost_matrix, greedy_assign, local_optimize, TeamBuilder};
use team_builder::models::{Employee, EmptyWishlistPolicy, Wishlist};

fn create_group(count: u32) -> Vec<Employee> {
    (1..=count).map(|id| Employee::new(id, format!("Employee {}", id))).collect()
}

/// Every owner ranks the whole other group in a rotated order
fn create_wishlists(owners: &[Employee], targets: &[Employee], stride: usize) -> Vec<Wishlist> {
    owners
        .iter()
        .enumerate()
        .map(|(i, owner)| {
            let desired = (0..targets.len())
                .map(|k| targets[(i * stride + k * 7) % targets.len()].id)
                .collect();
            Wishlist::new(owner.id, desired)
        })
        .collect()
}

fn bench_cost_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("cost_matrix");

    for size in [20u32, 100, 200].iter() {
        let leads = create_group(*size);
        let juniors = create_group(*size);
        let lead_lists = create_wishlists(&leads, &juniors, 3);
        let junior_lists = create_wishlists(&juniors, &leads, 5);

        group.bench_with_input(BenchmarkId::new("build", size), size, |b, _| {
            b.iter(|| {
                build_cost_matrix(
                    black_box(&leads),
                    black_box(&juniors),
                    black_box(&lead_lists),
                    black_box(&junior_lists),
                    EmptyWishlistPolicy::TreatAsMissing,
                )
            });
        });
    }

    group.finish();
}

fn bench_assignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("assignment");

    for size in [20u32, 50, 100].iter() {
        let leads = create_group(*size);
        let juniors = create_group(*size);
        let lead_lists = create_wishlists(&leads, &juniors, 3);
        let junior_lists = create_wishlists(&juniors, &leads, 5);
        let matrix = build_cost_matrix(
            &leads,
            &juniors,
            &lead_lists,
            &junior_lists,
            EmptyWishlistPolicy::TreatAsMissing,
        )
        .expect("equal group sizes");

        group.bench_with_input(BenchmarkId::new("greedy", size), size, |b, _| {
            b.iter(|| greedy_assign(black_box(&matrix)));
        });

        let initial = greedy_assign(&matrix);
        group.bench_with_input(BenchmarkId::new("local_optimize", size), size, |b, _| {
            b.iter(|| local_optimize(black_box(&matrix), initial.clone(), 1000));
        });
    }

    group.finish();
}

fn bench_build_teams(c: &mut Criterion) {
    let builder = TeamBuilder::default();
    let mut group = c.benchmark_group("build_teams");

    for size in [20u32, 50, 100].iter() {
        let leads = create_group(*size);
        let juniors = create_group(*size);
        let lead_lists = create_wishlists(&leads, &juniors, 3);
        let junior_lists = create_wishlists(&juniors, &leads, 5);

        group.bench_with_input(BenchmarkId::new("full_pipeline", size), size, |b, _| {
            b.iter(|| {
                builder.build_teams(
                    black_box(&leads),
                    black_box(&juniors),
                    black_box(&lead_lists),
                    black_box(&junior_lists),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cost_matrix, bench_assignment, bench_build_teams);
criterion_main!(benches);
