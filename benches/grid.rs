use criterion::{criterion_group, criterion_main, Criterion};
use maze_paths::cells::GridCoordinate;
use maze_paths::generators;
use maze_paths::grid::Grid;
use maze_paths::units::{ColumnsCount, RowsCount};

fn bench_grid_11(c: &mut Criterion) {
    c.bench_function("grid_11", |b| {
        b.iter(|| Grid::new(RowsCount(11), ColumnsCount(11)).unwrap())
    });
}

fn bench_grid_500(c: &mut Criterion) {
    c.bench_function("grid_500", |b| {
        b.iter(|| Grid::new(RowsCount(500), ColumnsCount(500)).unwrap())
    });
}

fn bench_neighbours_corner_of_grid(c: &mut Criterion) {
    let g = Grid::new(RowsCount(11), ColumnsCount(11)).unwrap();
    let corner = GridCoordinate::new(0, 0);
    c.bench_function("neighbours_corner_of_grid", |b| b.iter(|| g.neighbour_coordinates(corner)));
}

fn bench_neighbours_middle_of_grid(c: &mut Criterion) {
    let g = Grid::new(RowsCount(11), ColumnsCount(11)).unwrap();
    let mid = GridCoordinate::new(5, 5);
    c.bench_function("neighbours_middle_of_grid", |b| b.iter(|| g.neighbour_coordinates(mid)));
}

fn bench_is_perfect_maze_128(c: &mut Criterion) {
    let mut g = Grid::new(RowsCount(128), ColumnsCount(128)).unwrap();
    generators::seeded_recursive_backtracker(&mut g, GridCoordinate::new(0, 0), 128).unwrap();
    c.bench_function("is_perfect_maze_128", |b| b.iter(|| g.is_perfect_maze()));
}

criterion_group!(
    benches,
    bench_grid_11,
    bench_grid_500,
    bench_neighbours_corner_of_grid,
    bench_neighbours_middle_of_grid,
    bench_is_perfect_maze_128
);
criterion_main!(benches);
