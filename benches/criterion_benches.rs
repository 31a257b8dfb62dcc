use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sokoban_race::config::{SolverConfig, Strategy};
use sokoban_race::level::Level;
use sokoban_race::{LoadLevel, Solve};

// allowing unused so i can bench just one or few
// and still notice other warnings if there are any
#[allow(unused)]
fn bench_corridor(c: &mut Criterion) {
    // two boxes, both have to go around
    bench_level(c, "levels/corridor.txt", 50);
}

#[allow(unused)]
fn bench_two_boxes(c: &mut Criterion) {
    bench_level(c, "levels/two-boxes.txt", 100);
}

#[allow(unused)]
fn bench_no_solution(c: &mut Criterion) {
    // exhausts the whole state space
    bench_level(c, "levels/no-solution-wall.txt", 100);
}

#[allow(unused)]
fn bench_race(c: &mut Criterion) {
    let level = "levels/corridor.txt".load_level().unwrap();
    let config = SolverConfig::default();

    let mut group = c.benchmark_group("race");
    group.sample_size(20);
    group.bench_function("levels/corridor.txt", |b| {
        b.iter(|| criterion::black_box(level.solve_bounded(criterion::black_box(&config))))
    });
    group.finish();
}

fn bench_level(c: &mut Criterion, level_path: &str, samples: usize) {
    let level: Level = level_path.load_level().unwrap();

    let mut group = c.benchmark_group(level_path);
    group.sample_size(samples);
    for &strategy in &Strategy::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strategy), &strategy, |b, &strategy| {
            b.iter(|| criterion::black_box(level.solve(criterion::black_box(strategy))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_corridor,
    bench_two_boxes,
    bench_no_solution,
    //bench_race,
);
criterion_main!(benches);
