use std::fmt;
use std::slice;

use crate::cells::{Cell, CompassPrimary, GridCoordinate};
use crate::grid::Grid;

/// Cell coordinates in row major order.
#[derive(Clone)]
pub struct CellIter<'a> {
    cells: slice::Iter<'a, Cell>,
}

impl<'a> CellIter<'a> {
    pub(crate) fn new(cells: &'a [Cell]) -> CellIter<'a> {
        CellIter { cells: cells.iter() }
    }
}

impl<'a> fmt::Debug for CellIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CellIter :: remaining cells: {:?}", self.cells.len())
    }
}

impl<'a> ExactSizeIterator for CellIter<'a> {} // default impl using size_hint()
impl<'a> Iterator for CellIter<'a> {
    type Item = GridCoordinate;

    fn next(&mut self) -> Option<Self::Item> {
        self.cells.next().map(Cell::coordinate)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cells.size_hint()
    }
}

// Looking only South and East from each cell finds every passage exactly once, given the
// walls either side of a passage are both removed.
static FORWARD_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::South, CompassPrimary::East];

/// Removed walls as the (North or West cell, South or East cell) pair they link.
pub struct PassagesIter<'a> {
    grid: &'a Grid,
    cells: slice::Iter<'a, Cell>,
    current_cell: Option<&'a Cell>,
    directions: slice::Iter<'static, CompassPrimary>,
}

impl<'a> PassagesIter<'a> {
    pub(crate) fn new(grid: &'a Grid) -> PassagesIter<'a> {
        PassagesIter {
            grid,
            cells: grid.cells().iter(),
            current_cell: None,
            directions: FORWARD_DIRECTIONS[..0].iter(),
        }
    }
}

impl<'a> fmt::Debug for PassagesIter<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "PassagesIter :: current cell: {:?}, remaining cells: {:?}",
               self.current_cell.map(Cell::coordinate),
               self.cells.len())
    }
}

impl<'a> Iterator for PassagesIter<'a> {
    type Item = (GridCoordinate, GridCoordinate);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cell) = self.current_cell {
                for &dir in self.directions.by_ref() {
                    if cell.has_wall(dir) {
                        continue;
                    }
                    if let Some(linked) = self.grid.neighbour_at_direction(cell.coordinate(), dir) {
                        return Some((cell.coordinate(), linked));
                    }
                }
            }

            self.current_cell = Some(self.cells.next()?);
            self.directions = FORWARD_DIRECTIONS.iter();
        }
    }
}
