// Breadth first shortest paths through a grid's passages.
//
// Every step between linked cells costs the same, so expanding cells strictly in the order
// they were discovered (a FIFO frontier) means the first time we dequeue the end point we
// have reached it by a shortest route. A frontier that is not FIFO, e.g. pushing discovered
// cells on the front, drifts towards depth first search and loses that guarantee.

use std::collections::VecDeque;
use std::convert::TryFrom;

use fnv::{FnvHashMap, FnvHashSet};
use log::{debug, trace};

use crate::cells::{CompassPrimary, GridCoordinate};
use crate::errors::{Error, ErrorKind, Result};
use crate::grid::Grid;

/// The cells on a shortest route from `start` to `end`, both included.
///
/// Returns `Ok(None)` when no route exists, e.g. on a grid that has not had a maze generated
/// on it. A route from a cell to itself is just that one cell.
///
/// Fails with `OutOfBounds` if either point is not on the grid.
pub fn shortest_path(grid: &Grid,
                     start: GridCoordinate,
                     end: GridCoordinate)
                     -> Result<Option<Vec<GridCoordinate>>> {

    for &point in &[start, end] {
        if !grid.is_valid_coordinate(point) {
            bail!(ErrorKind::OutOfBounds(point));
        }
    }

    if start == end {
        return Ok(Some(vec![start]));
    }

    let cells_count = grid.size();
    let mut visited = FnvHashSet::with_capacity_and_hasher(cells_count, Default::default());
    // The predecessor of each discovered cell, the start has None.
    let mut parents: FnvHashMap<GridCoordinate, Option<GridCoordinate>> =
        FnvHashMap::with_capacity_and_hasher(cells_count, Default::default());
    let mut frontier = VecDeque::new();

    let _ = visited.insert(start);
    let _ = parents.insert(start, None);
    frontier.push_back(start);

    let mut expanded_count = 0;
    while let Some(cell_coord) = frontier.pop_front() {

        if cell_coord == end {
            let path = walk_back(&parents, end);
            debug!("shortest path {} -> {} has {} steps, expanded {} cells",
                   start,
                   end,
                   path.len() - 1,
                   expanded_count);
            return Ok(Some(path));
        }

        expanded_count += 1;
        for (dir, neighbour_coord) in grid.neighbour_coordinates(cell_coord) {
            if grid.is_passable(cell_coord, dir) && visited.insert(neighbour_coord) {
                let _ = parents.insert(neighbour_coord, Some(cell_coord));
                frontier.push_back(neighbour_coord);
            }
        }
    }

    debug!("no path {} -> {}, expanded {} cells", start, end, expanded_count);
    Ok(None)
}

// Follow the parent links from `end` back to the start, then flip them round.
fn walk_back(parents: &FnvHashMap<GridCoordinate, Option<GridCoordinate>>,
             end: GridCoordinate)
             -> Vec<GridCoordinate> {
    let mut path = vec![end];
    let mut current_coord = end;
    while let Some(&Some(parent)) = parents.get(&current_coord) {
        trace!("{} reached from {}", current_coord, parent);
        path.push(parent);
        current_coord = parent;
    }
    path.reverse();
    path
}

/// The moves along a path of cells, one per consecutive pair of cells.
///
/// Fails with `NotAdjacent` if two consecutive cells are not orthogonal neighbours.
pub fn path_directions(path: &[GridCoordinate]) -> Result<Vec<CompassPrimary>> {
    path.windows(2)
        .map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            CompassPrimary::between(from, to).ok_or_else(|| Error::from(ErrorKind::NotAdjacent(from, to)))
        })
        .collect()
}

/// Solve the maze: the moves on a shortest route from `entry` to `exit`.
///
/// `Ok(None)` when there is no route. An `entry` equal to `exit` needs no moves at all.
pub fn solve(grid: &Grid,
             entry: GridCoordinate,
             exit: GridCoordinate)
             -> Result<Option<Vec<CompassPrimary>>> {
    shortest_path(grid, entry, exit)?
        .map(|path| path_directions(&path))
        .transpose()
}

/// `solve` from the top left to the bottom right corner of the grid.
pub fn solve_corners(grid: &Grid) -> Result<Option<Vec<CompassPrimary>>> {
    let (top_left, bottom_right) = grid.corners();
    solve(grid, top_left, bottom_right)
}

/// Walk `moves` from `start`, returning where we end up.
///
/// Fails with `NoNeighbour` on a move off the edge of the grid and with `Blocked` on a move
/// through a wall.
pub fn follow_moves(grid: &Grid,
                    start: GridCoordinate,
                    moves: &[CompassPrimary])
                    -> Result<GridCoordinate> {

    if !grid.is_valid_coordinate(start) {
        bail!(ErrorKind::OutOfBounds(start));
    }

    let mut current_coord = start;
    for &dir in moves {
        let next_coord = grid.neighbour_at_direction(current_coord, dir)
                             .ok_or(ErrorKind::NoNeighbour(current_coord, dir))?;
        if grid.has_wall(current_coord, dir)? {
            bail!(ErrorKind::Blocked(current_coord, dir));
        }
        current_coord = next_coord;
    }
    Ok(current_coord)
}

pub fn moves_to_string(moves: &[CompassPrimary]) -> String {
    moves.iter().map(|dir| dir.label()).collect()
}

/// Parse a string of direction labels such as "NNESW", ignoring whitespace.
pub fn parse_moves(labels: &str) -> Result<Vec<CompassPrimary>> {
    labels.chars()
          .filter(|c| !c.is_whitespace())
          .map(CompassPrimary::try_from)
          .collect()
}
