use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use crate::errors::{Error, ErrorKind, Result};

/// A cell position on the grid. `row` grows southwards and `col` grows eastwards from the
/// top left (0, 0) corner.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct GridCoordinate {
    pub row: u32,
    pub col: u32,
}

impl GridCoordinate {
    pub fn new(row: u32, col: u32) -> GridCoordinate {
        GridCoordinate { row, col }
    }

    /// Creates a new `GridCoordinate` offset 1 cell away in the given direction.
    /// Returns None if the coordinate is not representable, e.g. North of row 0.
    ///
    /// Knows nothing of any grid's bounds, see `Grid::neighbour_at_direction`.
    pub fn offset(self, dir: CompassPrimary) -> Option<GridCoordinate> {
        let (row_delta, col_delta) = dir.delta();
        let row = offset_axis(self.row, row_delta)?;
        let col = offset_axis(self.col, col_delta)?;
        Some(GridCoordinate::new(row, col))
    }
}

fn offset_axis(value: u32, delta: i8) -> Option<u32> {
    if delta < 0 {
        value.checked_sub(u32::from(delta.unsigned_abs()))
    } else {
        value.checked_add(delta as u32)
    }
}

impl From<(u32, u32)> for GridCoordinate {
    fn from(row_col_pair: (u32, u32)) -> GridCoordinate {
        GridCoordinate::new(row_col_pair.0, row_col_pair.1)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

/// Every direction in the fixed order used whenever neighbours are enumerated.
pub const ALL_DIRECTIONS: [CompassPrimary; 4] = [CompassPrimary::North,
                                                 CompassPrimary::South,
                                                 CompassPrimary::East,
                                                 CompassPrimary::West];

// Lookup tables indexed by the `CompassPrimary` discriminant.
const OPPOSITES: [CompassPrimary; 4] = [CompassPrimary::South,
                                        CompassPrimary::North,
                                        CompassPrimary::West,
                                        CompassPrimary::East];
const DELTAS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, 1), (0, -1)];
const LABELS: [char; 4] = ['N', 'S', 'E', 'W'];

impl CompassPrimary {
    #[inline]
    pub fn opposite(self) -> CompassPrimary {
        OPPOSITES[self as usize]
    }

    /// (row delta, column delta) of a single step in this direction.
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        DELTAS[self as usize]
    }

    #[inline]
    pub fn label(self) -> char {
        LABELS[self as usize]
    }

    /// The direction of the single step taking `from` onto `to`, if they are orthogonal
    /// neighbours.
    pub fn between(from: GridCoordinate, to: GridCoordinate) -> Option<CompassPrimary> {
        ALL_DIRECTIONS.iter()
                      .cloned()
                      .find(|dir| from.offset(*dir) == Some(to))
    }

    #[inline]
    fn wall_bit(self) -> u8 {
        1 << self as u8
    }
}

impl fmt::Display for CompassPrimary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<char> for CompassPrimary {
    type Error = Error;

    fn try_from(label: char) -> Result<CompassPrimary> {
        match label {
            'N' => Ok(CompassPrimary::North),
            'S' => Ok(CompassPrimary::South),
            'E' => Ok(CompassPrimary::East),
            'W' => Ok(CompassPrimary::West),
            _ => Err(ErrorKind::InvalidDirection(label.to_string()).into()),
        }
    }
}

impl FromStr for CompassPrimary {
    type Err = Error;

    fn from_str(s: &str) -> Result<CompassPrimary> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => CompassPrimary::try_from(label),
            _ => Err(ErrorKind::InvalidDirection(s.to_string()).into()),
        }
    }
}

const ALL_WALLS: u8 = 0b1111;

/// A grid cell and its four walls. Every wall is up until it is carved away.
///
/// Walls are only ever removed through the `Grid`, which keeps both sides of a wall in step.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    coordinate: GridCoordinate,
    walls: u8,
}

impl Cell {
    pub fn new(coordinate: GridCoordinate) -> Cell {
        Cell {
            coordinate,
            walls: ALL_WALLS,
        }
    }

    #[inline]
    pub fn coordinate(&self) -> GridCoordinate {
        self.coordinate
    }

    #[inline]
    pub fn has_wall(&self, dir: CompassPrimary) -> bool {
        self.walls & dir.wall_bit() != 0
    }

    /// `has_wall` for a direction label, one of 'N', 'S', 'E' or 'W'.
    pub fn has_wall_labelled(&self, label: char) -> Result<bool> {
        let dir = CompassPrimary::try_from(label)?;
        Ok(self.has_wall(dir))
    }

    pub fn walls_count(&self) -> usize {
        self.walls.count_ones() as usize
    }

    #[inline]
    pub(crate) fn remove_wall(&mut self, dir: CompassPrimary) {
        self.walls &= !dir.wall_bit();
    }
}


#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn opposite_directions() {
        assert_eq!(CompassPrimary::North.opposite(), CompassPrimary::South);
        assert_eq!(CompassPrimary::South.opposite(), CompassPrimary::North);
        assert_eq!(CompassPrimary::East.opposite(), CompassPrimary::West);
        assert_eq!(CompassPrimary::West.opposite(), CompassPrimary::East);
        for dir in &ALL_DIRECTIONS {
            assert_eq!(dir.opposite().opposite(), *dir);
        }
    }

    #[test]
    fn offset_coordinates() {
        let gc = |row, col| GridCoordinate::new(row, col);
        assert_eq!(gc(0, 0).offset(CompassPrimary::North), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::West), None);
        assert_eq!(gc(0, 0).offset(CompassPrimary::South), Some(gc(1, 0)));
        assert_eq!(gc(0, 0).offset(CompassPrimary::East), Some(gc(0, 1)));
        assert_eq!(gc(2, 3).offset(CompassPrimary::North), Some(gc(1, 3)));
        assert_eq!(gc(2, 3).offset(CompassPrimary::West), Some(gc(2, 2)));
        assert_eq!(gc(u32::MAX, 0).offset(CompassPrimary::South), None);
    }

    #[test]
    fn direction_between_neighbours() {
        let gc = |row, col| GridCoordinate::new(row, col);
        for dir in &ALL_DIRECTIONS {
            let to = gc(5, 5).offset(*dir).unwrap();
            assert_eq!(CompassPrimary::between(gc(5, 5), to), Some(*dir));
            assert_eq!(CompassPrimary::between(to, gc(5, 5)), Some(dir.opposite()));
        }
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(1, 1)), None);
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(2, 2)), None);
        assert_eq!(CompassPrimary::between(gc(1, 1), gc(1, 3)), None);
    }

    #[test]
    fn direction_labels() {
        let labels: String = ALL_DIRECTIONS.iter().map(|dir| dir.label()).collect();
        assert_eq!(labels, "NSEW");
        for dir in &ALL_DIRECTIONS {
            assert_eq!(CompassPrimary::try_from(dir.label()).unwrap(), *dir);
            assert_eq!(dir.to_string().parse::<CompassPrimary>().unwrap(), *dir);
        }
    }

    #[test]
    fn invalid_direction_labels() {
        for bad in &['n', 'X', ' ', '?'] {
            let err = CompassPrimary::try_from(*bad).unwrap_err();
            match *err.kind() {
                ErrorKind::InvalidDirection(ref label) => assert_eq!(*label, bad.to_string()),
                ref other => panic!("unexpected error kind {:?}", other),
            }
        }
        assert!("".parse::<CompassPrimary>().is_err());
        assert!("NE".parse::<CompassPrimary>().is_err());
    }

    #[test]
    fn new_cell_is_fully_walled() {
        let cell = Cell::new(GridCoordinate::new(1, 2));
        assert_eq!(cell.coordinate(), GridCoordinate::new(1, 2));
        assert_eq!(cell.walls_count(), 4);
        for dir in &ALL_DIRECTIONS {
            assert!(cell.has_wall(*dir));
        }
    }

    #[test]
    fn removing_walls_is_independent_per_side() {
        let mut cell = Cell::new(GridCoordinate::new(0, 0));
        cell.remove_wall(CompassPrimary::East);
        assert!(!cell.has_wall(CompassPrimary::East));
        assert!(cell.has_wall(CompassPrimary::North));
        assert!(cell.has_wall(CompassPrimary::South));
        assert!(cell.has_wall(CompassPrimary::West));

        cell.remove_wall(CompassPrimary::East);
        assert_eq!(cell.walls_count(), 3);
    }

    #[test]
    fn wall_query_by_label() {
        let mut cell = Cell::new(GridCoordinate::new(0, 0));
        cell.remove_wall(CompassPrimary::South);
        assert_eq!(cell.has_wall_labelled('S').unwrap(), false);
        assert_eq!(cell.has_wall_labelled('N').unwrap(), true);
        assert!(cell.has_wall_labelled('Q').is_err());
    }
}
