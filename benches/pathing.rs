use criterion::{
    Criterion,
    criterion_group,
    criterion_main
};
use maze_paths::cells::GridCoordinate;
use maze_paths::generators;
use maze_paths::grid::Grid;
use maze_paths::pathing;
use maze_paths::units::{ColumnsCount, RowsCount};

fn maze_350() -> Grid {
    let mut g = Grid::new(RowsCount(350), ColumnsCount(350)).unwrap();
    generators::seeded_recursive_backtracker(&mut g, GridCoordinate::new(0, 0), 350).unwrap();
    g
}

fn bench_shortest_path(c: &mut Criterion) {
    c.bench_function("shortest_path", |b| {
        let g = maze_350();
        let start_coord = GridCoordinate::new(250, 250);
        let end_coord = GridCoordinate::new(0, 0);
        b.iter(|| pathing::shortest_path(&g, start_coord, end_coord))
    });
}

fn bench_solve_corners(c: &mut Criterion) {
    c.bench_function("solve_corners", |b| {
        let g = maze_350();
        b.iter(|| pathing::solve_corners(&g))
    });
}

fn bench_no_path(c: &mut Criterion) {
    c.bench_function("found_and_missing_paths_64", |b| {
        // The unmodified grid has every wall up, so no route exists.
        let mut g = Grid::new(RowsCount(64), ColumnsCount(64)).unwrap();
        generators::seeded_recursive_backtracker(&mut g, GridCoordinate::new(0, 0), 64).unwrap();
        let walled = Grid::new(RowsCount(64), ColumnsCount(64)).unwrap();
        let (top_left, bottom_right) = walled.corners();
        b.iter(|| {
            let found = pathing::shortest_path(&g, top_left, bottom_right).unwrap();
            let missing = pathing::shortest_path(&walled, top_left, bottom_right).unwrap();
            (found, missing)
        })
    });
}

criterion_group!(benches,
    bench_shortest_path,
    bench_solve_corners,
    bench_no_path
);
criterion_main!(benches);
