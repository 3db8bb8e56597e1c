use criterion::{criterion_group, criterion_main, Criterion};
use grid_util::point::Point;
use nav_grid::{NavGrid, Pathfinder};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, seed: u64) -> NavGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    NavGrid::from_fn(n, n, 0.5, |cell| {
        cell == Point::new(0, 0)
            || cell == Point::new(n as i32 - 1, n as i32 - 1)
            || rng.gen_bool(0.7)
    })
    .unwrap()
}

fn search_bench(c: &mut Criterion) {
    const N: usize = 64;
    let grid = random_grid(N, 0);
    let mut pathfinder = Pathfinder::new();
    let scenarios: Vec<(Point, Point)> = (0..16)
        .map(|i| {
            (
                Point::new(i % 4, i / 4),
                Point::new(N as i32 - 1 - i % 4, N as i32 - 1 - i / 4),
            )
        })
        .collect();

    c.bench_function("random 64x64, 16 searches", |b| {
        b.iter(|| {
            for &(start, end) in &scenarios {
                black_box(pathfinder.search(&grid, start, end));
            }
        })
    });

    c.bench_function("random 64x64, world-level find_path", |b| {
        let start = grid.cell_center(Point::new(0, 0));
        let end = grid.cell_center(Point::new(N as i32 - 1, N as i32 - 1));
        b.iter(|| black_box(pathfinder.find_path(&grid, start, end)))
    });
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
