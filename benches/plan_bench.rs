//! Benchmarks for the backlog planner.
//!
//! Benchmarks cover:
//! - Best-fit placement on a bare assigner
//! - Backlog sorting
//! - End-to-end planning runs through the coordinator pipeline

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::sync::Arc;

use backlog_planner::core::{
    EffortDescending, Planner, Task, TaskAssigner, TaskSorter, TaskStore, MAX_HOURS_PER_WEEK,
};
use backlog_planner::infra::{default_roster, InMemoryStore};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Backlog generation
// ============================================================================

fn backlog(count: u64) -> Vec<Task> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (1..=count)
        .map(|id| Task {
            id,
            external_id: id.to_string(),
            difficulty: rng.random_range(0.5..5.0),
            estimated_duration: rng.random_range(1.0..30.0),
            source: "bench".to_string(),
            ..Task::default()
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_assigner(c: &mut Criterion) {
    let mut group = c.benchmark_group("assigner_best_fit");

    for size in [100u64, 1_000, 5_000] {
        let tasks = EffortDescending.sort(&backlog(size));
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| {
                let mut assigner = TaskAssigner::new(default_roster(), MAX_HOURS_PER_WEEK);
                let placed = tasks
                    .iter()
                    .filter_map(|task| assigner.assign_task(task))
                    .count();
                black_box(placed)
            });
        });
    }

    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("effort_descending_sort");

    for size in [1_000u64, 10_000] {
        let tasks = backlog(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| black_box(EffortDescending.sort(tasks)));
        });
    }

    group.finish();
}

fn bench_planning_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("planning_run");
    group.sample_size(20);

    for size in [100u64, 1_000] {
        let store = Arc::new(InMemoryStore::with_developers(default_roster()));
        let fetched = backlog(size)
            .into_iter()
            .map(|task| Task { id: 0, ..task })
            .collect();
        store
            .store_tasks(fetched)
            .unwrap_or_else(|e| panic!("failed to seed backlog: {e}"));
        let planner = Planner::new(store.clone(), store);

        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &planner, |b, planner| {
            b.iter(|| black_box(planner.plan().map(|a| a.len())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assigner, bench_sorting, bench_planning_run);
criterion_main!(benches);
