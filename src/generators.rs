use bit_set::BitSet;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use smallvec::SmallVec;

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::{ErrorKind, Result};
use crate::grid::Grid;

/// Apply the recursive backtracker maze generation algorithm to a grid, starting from the
/// cell at `start`.
///
/// It is a randomised depth first search. We keep a stack of the cells on the current path
/// and look at the cell on top of it: if it has any neighbours that have never been visited
/// we pick one at random, carve a passage to it and push it, making it the new top of the
/// stack. Once a cell has no unvisited neighbours left we pop it and backtrack to the
/// previous cell on the path, carrying on until the stack is empty.
///
/// Every cell is pushed and popped exactly once, so the passages carved form a spanning tree
/// over the whole grid - a perfect maze. The mazes have long winding corridors and relatively
/// few dead ends.
///
/// The grid is expected to have all its walls up. Which maze is produced depends only on
/// the grid dimensions, `start` and the values drawn from `rng`.
///
/// Fails with `OutOfBounds`, without touching the grid, if `start` is not on the grid.
pub fn recursive_backtracker<R>(grid: &mut Grid, start: GridCoordinate, rng: &mut R) -> Result<()>
    where R: Rng + ?Sized
{
    let start_index = grid.grid_coordinate_to_index(start)
                          .ok_or(ErrorKind::OutOfBounds(start))?;

    // Which cells have joined the maze so far, by row major index.
    let mut visited = BitSet::with_capacity(grid.size());
    let mut stack = Vec::with_capacity(grid.size());
    let mut passages_count = 0;

    let _ = visited.insert(start_index);
    stack.push(start);

    while let Some(&current) = stack.last() {

        let unvisited_neighbours = grid.neighbour_coordinates(current)
            .into_iter()
            .filter_map(|(dir, coord)| {
                grid.grid_coordinate_to_index(coord)
                    .filter(|index| !visited.contains(*index))
                    .map(|index| (dir, coord, index))
            })
            .collect::<SmallVec<[(CompassPrimary, GridCoordinate, usize); 4]>>();

        if unvisited_neighbours.is_empty() {
            let _ = stack.pop();
            continue;
        }

        let (dir, next, next_index) = unvisited_neighbours[rng.gen_range(0..unvisited_neighbours.len())];
        grid.remove_wall_between(current, next, dir)?;
        let _ = visited.insert(next_index);
        stack.push(next);
        passages_count += 1;
    }

    debug!("recursive backtracker carved {} passages over {} cells from {}",
           passages_count,
           grid.size(),
           start);
    Ok(())
}

/// `recursive_backtracker` starting from the top left cell.
pub fn recursive_backtracker_from_origin<R>(grid: &mut Grid, rng: &mut R) -> Result<()>
    where R: Rng + ?Sized
{
    recursive_backtracker(grid, GridCoordinate::new(0, 0), rng)
}

/// `recursive_backtracker` with a fresh `XorShiftRng` seeded from `seed`. The same seed, start
/// and grid dimensions always produce the same maze.
pub fn seeded_recursive_backtracker(grid: &mut Grid, start: GridCoordinate, seed: u64) -> Result<()> {
    let mut rng = XorShiftRng::seed_from_u64(seed);
    recursive_backtracker(grid, start, &mut rng)
}
