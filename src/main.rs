mod clock;
mod config;
mod error;
mod food;
mod game;
mod grid;
mod logging;
mod snake;
mod term;
mod world;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use crate::config::{Args, CELL_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::grid::Grid;

pub type TermInt = u16;
pub type Coords = (u16, u16);

fn main() -> ExitCode {
    let args = Args::parse();

    // The game owns the terminal until it is dropped, so errors are only
    // printed once `run` has returned.
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("snake: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> error::Result {
    if let Some(path) = &args.log_file {
        logging::init_log(LevelFilter::from(args.log_level), path)?;
    }

    let grid = Grid::new(GRID_WIDTH, GRID_HEIGHT, CELL_SIZE);
    let world = world::World::new(grid, args.seed);
    let screen = term::Screen::open((grid.width(), grid.height()), CELL_SIZE)?;
    let clock = clock::FrameClock::new(args.speed);

    game::SnakeGame::new(world, screen, clock).run()
}
