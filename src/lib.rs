// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod config;
pub mod level;
pub mod map;
pub mod map_formatter;
pub mod moves;
pub mod parser;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod data;
mod fs;
mod vec2d;

use std::error::Error;

pub use crate::data::{Dir, Pos, DIRECTIONS};

use crate::config::{Format, SolverConfig, Strategy};
use crate::level::Level;
use crate::solver::SolverOk;

pub trait LoadLevel {
    /// Detects the format from the contents.
    fn load_level(&self) -> Result<Level, Box<dyn Error>>;

    fn load_level_as(&self, format: Format) -> Result<Level, Box<dyn Error>>;
}

pub trait Solve {
    /// Runs a single strategy to completion.
    fn solve(&self, strategy: Strategy) -> SolverOk;

    /// Races strategies against a deadline, see `SolverConfig`.
    ///
    /// A strategy proving there's no solution ends the race and the best-first fallback is skipped.
    fn solve_bounded(&self, config: &SolverConfig) -> SolverOk;
}
