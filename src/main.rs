use docopt::Docopt;
use log::{debug, info, LevelFilter, Log, Metadata, Record};
use serde::Deserialize;
use maze_paths::{
    cells::GridCoordinate,
    generators,
    grid::Grid,
    pathing,
    units::{ColumnsCount, RowsCount},
};

const USAGE: &str = "Maze paths

Generate a perfect maze and print the moves on the shortest route through it.

Usage:
    maze_paths_driver -h | --help
    maze_paths_driver [--rows=<r>] [--cols=<c>] [--seed=<s>] [--start-row=<sr> --start-col=<sc>] [--entry-row=<er> --entry-col=<ec>] [--exit-row=<xr> --exit-col=<xc>] [--verbose]

Options:
    -h --help            Show this screen.
    --rows=<r>           Number of rows in the grid [default: 4].
    --cols=<c>           Number of columns in the grid [default: 4].
    --seed=<s>           Seed for the maze generator's random numbers [default: 0].
    --start-row=<sr>     Row of the cell maze generation starts from, 0 if not given.
    --start-col=<sc>     Column of the cell maze generation starts from, 0 if not given.
    --entry-row=<er>     Row of the route's entry, the top left cell if not given.
    --entry-col=<ec>     Column of the route's entry.
    --exit-row=<xr>      Row of the route's exit, the bottom right cell if not given.
    --exit-col=<xc>      Column of the route's exit.
    --verbose            Log generation and search details to stderr.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    flag_rows: usize,
    flag_cols: usize,
    flag_seed: u64,
    flag_start_row: Option<u32>,
    flag_start_col: Option<u32>,
    flag_entry_row: Option<u32>,
    flag_entry_col: Option<u32>,
    flag_exit_row: Option<u32>,
    flag_exit_col: Option<u32>,
    flag_verbose: bool,
}

mod errors {
    // The driver's own Error, ErrorKind, ResultExt, and Result types, wrapping the maze
    // library's errors.
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_paths::errors::Error, ::maze_paths::errors::ErrorKind);
        }
    }
}
use crate::errors::*;

/// Writes every enabled log record to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: bool) -> Result<()> {
    log::set_logger(&LOGGER).map_err(|err| Error::from(err.to_string()))?;
    log::set_max_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn });
    Ok(())
}

fn main() -> Result<()> {

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());
    init_logging(args.flag_verbose)?;

    let mut maze_grid = Grid::new(RowsCount(args.flag_rows), ColumnsCount(args.flag_cols))
        .chain_err(|| format!("Cannot make a {} x {} grid", args.flag_rows, args.flag_cols))?;
    let (top_left, bottom_right) = maze_grid.corners();

    let start = coordinate_arg(args.flag_start_row, args.flag_start_col).unwrap_or(top_left);
    generators::seeded_recursive_backtracker(&mut maze_grid, start, args.flag_seed)
        .chain_err(|| format!("Failed to generate a maze from start cell {}", start))?;
    info!("generated a {} x {} maze from seed {}",
          maze_grid.rows().0,
          maze_grid.columns().0,
          args.flag_seed);

    let entry = coordinate_arg(args.flag_entry_row, args.flag_entry_col).unwrap_or(top_left);
    let exit = coordinate_arg(args.flag_exit_row, args.flag_exit_col).unwrap_or(bottom_right);

    let moves_opt = pathing::solve(&maze_grid, entry, exit)
        .chain_err(|| format!("Failed to find a route from {} to {}", entry, exit))?;

    if let Some(moves) = moves_opt {
        let reached = pathing::follow_moves(&maze_grid, entry, &moves)?;
        debug!("{} moves from {} reach {}", moves.len(), entry, reached);
        println!("{}", pathing::moves_to_string(&moves));
    } else {
        // Only possible if the maze generation failed to make a perfect maze
        println!("no path found");
    }

    Ok(())
}

fn coordinate_arg(row: Option<u32>, col: Option<u32>) -> Option<GridCoordinate> {
    match (row, col) {
        (Some(row), Some(col)) => Some(GridCoordinate::new(row, col)),
        _ => None,
    }
}
