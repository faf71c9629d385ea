use std::convert::TryFrom;
use std::fmt;

use log::trace;
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use rand::Rng;
use smallvec::SmallVec;

use crate::cells::{ALL_DIRECTIONS, Cell, CompassPrimary, GridCoordinate};
use crate::errors::{ErrorKind, Result};
use crate::grid_iterators::{CellIter, PassagesIter};
use crate::units::{ColumnsCount, EdgesCount, NodesCount, RowsCount};

pub type CoordinateSmallVec = SmallVec<[(CompassPrimary, GridCoordinate); 4]>;
pub type CellSmallVec<'a> = SmallVec<[(CompassPrimary, &'a Cell); 4]>;

/// The reachability graph of a grid. Nodes are cell coordinates in row major order and every
/// edge is a removed wall.
pub type PassageGraph = UnGraph<GridCoordinate, ()>;

/// A fixed size rectangular grid of cells.
///
/// Removing the wall between two cells always clears both sides of the wall in one call, so
/// the walls of neighbouring cells are symmetric whenever the grid can be observed.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: RowsCount,
    columns: ColumnsCount,
    cells: Vec<Cell>,
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "Grid :: rows: {:?}, columns: {:?}, passages: {:?}",
               self.rows,
               self.columns,
               self.iter_passages().collect::<Vec<_>>())
    }
}

impl Grid {
    /// Create a `rows` * `columns` grid with every wall of every cell in place.
    ///
    /// Both dimensions must be at least 1 and the cell count must fit in a `u32`.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Result<Grid> {

        let (RowsCount(rows_count), ColumnsCount(columns_count)) = (rows, columns);
        let cells_count = rows_count.checked_mul(columns_count)
                                    .filter(|&count| count > 0 && u32::try_from(count).is_ok())
                                    .ok_or(ErrorKind::InvalidDimensions(rows_count, columns_count))?;

        let mut cells = Vec::with_capacity(cells_count);
        for row in 0..rows_count {
            for col in 0..columns_count {
                cells.push(Cell::new(GridCoordinate::new(row as u32, col as u32)));
            }
        }

        Ok(Grid {
            rows,
            columns,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The top left and bottom right cells.
    pub fn corners(&self) -> (GridCoordinate, GridCoordinate) {
        let (RowsCount(rows), ColumnsCount(columns)) = (self.rows, self.columns);
        (GridCoordinate::new(0, 0), GridCoordinate::new(rows as u32 - 1, columns as u32 - 1))
    }

    /// Is the grid coordinate valid for this grid - within the grid's dimensions
    #[inline]
    pub fn is_valid_coordinate(&self, coord: GridCoordinate) -> bool {
        (coord.row as usize) < self.rows.0 && (coord.col as usize) < self.columns.0
    }

    /// Convert a grid coordinate to a one dimensional index in the range 0...grid.size().
    /// Returns None if the grid coordinate is invalid.
    #[inline]
    pub fn grid_coordinate_to_index(&self, coord: GridCoordinate) -> Option<usize> {
        if self.is_valid_coordinate(coord) {
            Some(coord.row as usize * self.columns.0 + coord.col as usize)
        } else {
            None
        }
    }

    /// The cell at `coord`, None outside of the grid.
    #[inline]
    pub fn cell_at(&self, coord: GridCoordinate) -> Option<&Cell> {
        self.grid_coordinate_to_index(coord).map(|index| &self.cells[index])
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn random_cell<R>(&self, rng: &mut R) -> GridCoordinate
        where R: Rng + ?Sized
    {
        self.cells[rng.gen_range(0..self.size())].coordinate()
    }

    /// The neighbour of a valid `coord` in `direction`, whether or not a wall is in the way.
    pub fn neighbour_at_direction(&self,
                                  coord: GridCoordinate,
                                  direction: CompassPrimary)
                                  -> Option<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            return None;
        }
        coord.offset(direction)
             .filter(|neighbour_coord| self.is_valid_coordinate(*neighbour_coord))
    }

    /// Cells that are to the North, South, East or West of a particular cell, in that order,
    /// but not necessarily linked by a passage.
    pub fn neighbour_coordinates(&self, coord: GridCoordinate) -> CoordinateSmallVec {
        ALL_DIRECTIONS.iter()
                      .filter_map(|&dir| {
                          self.neighbour_at_direction(coord, dir)
                              .map(|neighbour_coord| (dir, neighbour_coord))
                      })
                      .collect()
    }

    /// `neighbour_coordinates` as cell references.
    pub fn neighbours(&self, cell: &Cell) -> CellSmallVec {
        self.neighbour_coordinates(cell.coordinate())
            .into_iter()
            .filter_map(|(dir, coord)| self.cell_at(coord).map(|neighbour| (dir, neighbour)))
            .collect()
    }

    pub fn has_wall(&self, coord: GridCoordinate, dir: CompassPrimary) -> Result<bool> {
        let cell = self.cell_at(coord).ok_or(ErrorKind::OutOfBounds(coord))?;
        Ok(cell.has_wall(dir))
    }

    /// Can we step from `coord` to its neighbour in `dir`? False at the grid's edges.
    pub fn is_passable(&self, coord: GridCoordinate, dir: CompassPrimary) -> bool {
        self.neighbour_at_direction(coord, dir).is_some() &&
        self.cell_at(coord).map_or(false, |cell| !cell.has_wall(dir))
    }

    /// Knock down the wall between `a` and its neighbour `b` which lies in direction `dir`.
    ///
    /// Clears `dir` on `a` and the opposite direction on `b`. Nothing changes if either
    /// coordinate is invalid or `b` is not the neighbour of `a` in `dir`.
    pub fn remove_wall_between(&mut self,
                               a: GridCoordinate,
                               b: GridCoordinate,
                               dir: CompassPrimary)
                               -> Result<()> {

        let a_index = self.grid_coordinate_to_index(a).ok_or(ErrorKind::OutOfBounds(a))?;
        let b_index = self.grid_coordinate_to_index(b).ok_or(ErrorKind::OutOfBounds(b))?;
        if self.neighbour_at_direction(a, dir) != Some(b) {
            bail!(ErrorKind::NotAdjacent(a, b));
        }

        self.cells[a_index].remove_wall(dir);
        self.cells[b_index].remove_wall(dir.opposite());
        trace!("removed wall {} of {}", dir, a);
        Ok(())
    }

    /// Knock down the wall on the `dir` side of `coord`, returning the neighbour now linked.
    pub fn remove_wall(&mut self, coord: GridCoordinate, dir: CompassPrimary) -> Result<GridCoordinate> {
        if !self.is_valid_coordinate(coord) {
            bail!(ErrorKind::OutOfBounds(coord));
        }
        let neighbour_coord = self.neighbour_at_direction(coord, dir)
                                  .ok_or(ErrorKind::NoNeighbour(coord, dir))?;
        self.remove_wall_between(coord, neighbour_coord, dir)?;
        Ok(neighbour_coord)
    }

    /// `remove_wall` for a direction label, one of 'N', 'S', 'E' or 'W'.
    pub fn remove_wall_labelled(&mut self, coord: GridCoordinate, label: char) -> Result<GridCoordinate> {
        let dir = CompassPrimary::try_from(label)?;
        self.remove_wall(coord, dir)
    }

    /// The number of removed walls.
    pub fn links_count(&self) -> usize {
        self.iter_passages().count()
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(&self.cells)
    }

    /// Every removed wall exactly once, as the pair of cells it joins.
    #[inline]
    pub fn iter_passages(&self) -> PassagesIter {
        PassagesIter::new(self)
    }

    /// Graph size hint: every cell and the number of passages in a perfect maze.
    pub fn graph_size(&self) -> (NodesCount, EdgesCount) {
        let cells_count = self.size();
        (NodesCount(cells_count), EdgesCount(cells_count - 1))
    }

    pub fn passage_graph(&self) -> PassageGraph {
        let (NodesCount(nodes), EdgesCount(edges)) = self.graph_size();
        let mut graph = PassageGraph::with_capacity(nodes, edges);
        for cell in &self.cells {
            let _ = graph.add_node(cell.coordinate());
        }

        for (src, dst) in self.iter_passages() {
            if let (Some(src_index), Some(dst_index)) = (self.grid_coordinate_to_index(src),
                                                         self.grid_coordinate_to_index(dst)) {
                let _ = graph.add_edge(NodeIndex::new(src_index), NodeIndex::new(dst_index), ());
            }
        }

        graph
    }

    /// A perfect maze is a spanning tree over the cells: connected with exactly one fewer
    /// passage than there are cells, so it has no loops.
    pub fn is_perfect_maze(&self) -> bool {
        let graph = self.passage_graph();
        graph.edge_count() + 1 == self.size() && connected_components(&graph) == 1
    }
}
