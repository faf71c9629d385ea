use criterion::{criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_xorshift::XorShiftRng;
use maze_paths::{
    cells::GridCoordinate,
    generators,
    grid::Grid,
    units::{ColumnsCount, RowsCount},
};

fn fresh_grid(size: usize) -> Grid {
    Grid::new(RowsCount(size), ColumnsCount(size)).unwrap()
}

fn bench_recursive_backtracker_maze_32(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(32);
    c.bench_function("recursive_backtracker_maze_32", move |b| {
        b.iter(|| {
            let mut g = fresh_grid(32);
            generators::recursive_backtracker_from_origin(&mut g, &mut rng).unwrap();
            g
        })
    });
}

fn bench_recursive_backtracker_maze_256(c: &mut Criterion) {
    let mut rng = XorShiftRng::seed_from_u64(256);
    c.bench_function("recursive_backtracker_maze_256", move |b| {
        b.iter(|| {
            let mut g = fresh_grid(256);
            generators::recursive_backtracker(&mut g, GridCoordinate::new(128, 128), &mut rng)
                .unwrap();
            g
        })
    });
}

criterion_group!(
    benches,
    bench_recursive_backtracker_maze_32,
    bench_recursive_backtracker_maze_256
);
criterion_main!(benches);
