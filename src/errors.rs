// Create the Error, ErrorKind, ResultExt, and Result types.
// Nothing in the library is retried, every error is reported straight to the caller.
// An unsolvable maze is not an error, the path finding functions return `Ok(None)`.

use crate::cells::{CompassPrimary, GridCoordinate};

error_chain! {

    errors {
        InvalidDirection(label: String) {
            description("invalid direction label")
            display("invalid direction label {:?}, expected one of N, S, E or W", label)
        }

        OutOfBounds(coord: GridCoordinate) {
            description("coordinate outside of the grid")
            display("coordinate {} is outside of the grid", coord)
        }

        NotAdjacent(a: GridCoordinate, b: GridCoordinate) {
            description("cells are not adjacent")
            display("cells {} and {} are not neighbours in the given direction", a, b)
        }

        NoNeighbour(coord: GridCoordinate, dir: CompassPrimary) {
            description("no neighbouring cell in that direction")
            display("cell {} has no neighbour to the {}", coord, dir)
        }

        Blocked(coord: GridCoordinate, dir: CompassPrimary) {
            description("move blocked by a wall")
            display("moving {} from cell {} crosses a wall", dir, coord)
        }

        InvalidDimensions(rows: usize, columns: usize) {
            description("invalid grid dimensions")
            display("a {} x {} grid is empty or too large", rows, columns)
        }
    }
}
