//! **maze-paths** generates perfect mazes on rectangular grids and finds shortest routes
//! through them.
//!
//! A `grid::Grid` starts with every wall of every cell in place. `generators` carve passages
//! through it until every cell is reachable from every other cell by exactly one route, and
//! `pathing` searches the passages breadth first for the moves from an entry to an exit.

#[macro_use]
extern crate error_chain;

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod pathing;
pub mod units;
