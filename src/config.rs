use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Codes,
    Xsb,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Shortest solution in moves.
    Bfs,
    /// Cost is depth plus sum of box distances to their closest goal - not necessarily shortest.
    BestFirst,
}

impl Strategy {
    /// In the order they're started when racing.
    pub const ALL: [Strategy; 2] = [Strategy::Bfs, Strategy::BestFirst];
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::BestFirst => write!(f, "best-first"),
        }
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Strategy::Bfs),
            "best-first" | "astar" | "a-star" => Ok(Strategy::BestFirst),
            _ => Err(format!("Unknown strategy: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// How long to wait for the raced strategies.
    pub timeout: Duration,
    /// How many strategies to race, at most `Strategy::ALL.len()`.
    pub workers: usize,
    /// Run only this strategy, without racing and without a deadline.
    pub strategy: Option<Strategy>,
    /// Run best-first without a deadline when the race fails.
    pub fallback: bool,
    /// Give up after creating this many states (per search).
    pub max_states: Option<usize>,
}

impl SolverConfig {
    pub(crate) fn raced_strategies(&self) -> &'static [Strategy] {
        let all: &'static [Strategy] = &Strategy::ALL;
        &all[..self.workers.min(all.len())]
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            timeout: Duration::from_secs(30),
            workers: 2,
            strategy: None,
            fallback: true,
            max_states: None,
        }
    }
}
