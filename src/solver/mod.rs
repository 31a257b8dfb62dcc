pub(crate) mod a_star;
pub(crate) mod backtracking;
pub(crate) mod bounded;
pub(crate) mod frontier;
pub(crate) mod preprocessing;

use std::fmt::{self, Debug, Display, Formatter};

use fnv::FnvHashSet;
use log::{debug, info};
use typed_arena::Arena;

use crate::config::{SolverConfig, Strategy};
use crate::data::{Dir, DIRECTIONS};
use crate::level::Level;
use crate::map::GoalMap;
use crate::moves::{Move, Moves};
use crate::state::State;
use crate::Solve;

use self::a_star::SearchNode;
pub use self::a_star::Stats;
use self::frontier::{Fifo, Frontier, Priority};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Empty moves mean the level was solved to begin with.
    Solved(Moves),
    /// The whole reachable state space was searched.
    NoSolution,
    /// Gave up after creating `SolverConfig::max_states` states.
    StateLimit,
    /// None of the raced strategies finished before the deadline.
    TimedOut,
}

impl Outcome {
    pub fn is_solved(&self) -> bool {
        self.moves().is_some()
    }

    pub fn moves(&self) -> Option<&Moves> {
        match *self {
            Outcome::Solved(ref moves) => Some(moves),
            _ => None,
        }
    }

    /// Empty when there's no solution for any reason.
    pub fn into_moves(self) -> Moves {
        match self {
            Outcome::Solved(moves) => moves,
            _ => Moves::default(),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Outcome::Solved(ref moves) => write!(f, "Solved in {} moves", moves.move_cnt()),
            Outcome::NoSolution => write!(f, "No solution"),
            Outcome::StateLimit => write!(f, "No solution found within the state limit"),
            Outcome::TimedOut => write!(f, "No solution found before the deadline"),
        }
    }
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    /// Which strategy produced the outcome, `None` if none finished.
    pub strategy: Option<Strategy>,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, strategy: Strategy) -> Self {
        Self {
            outcome,
            stats,
            strategy: Some(strategy),
        }
    }

    fn timed_out() -> Self {
        Self {
            outcome: Outcome::TimedOut,
            stats: Stats::default(),
            strategy: None,
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.strategy {
            Some(strategy) => writeln!(f, "{}: {}", strategy, self.outcome)?,
            None => writeln!(f, "{}", self.outcome)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, strategy: Strategy) -> SolverOk {
        search(&self.map, &self.state, strategy, None)
    }

    fn solve_bounded(&self, config: &SolverConfig) -> SolverOk {
        bounded::solve_bounded(self, config)
    }
}

/// A state reachable by one move.
#[derive(Debug, Clone)]
pub struct Successor {
    pub dir: Dir,
    pub is_push: bool,
    pub state: State,
}

/// All states reachable by one move, in `DIRECTIONS` order.
///
/// Pushes onto dead ends are left out.
pub fn expand(map: &GoalMap, state: &State) -> Vec<Successor> {
    let mut new_states = Vec::with_capacity(DIRECTIONS.len());

    for &dir in &DIRECTIONS {
        let new_player_pos = state.player_pos() + dir;
        if map.is_wall(new_player_pos) {
            continue;
        }

        if !state.has_box(new_player_pos) {
            // step
            new_states.push(Successor {
                dir,
                is_push: false,
                state: state.step(new_player_pos),
            });
            continue;
        }

        // push
        let push_dest = new_player_pos + dir;
        if map.is_wall(push_dest) || state.has_box(push_dest) || map.is_dead_end(push_dest) {
            continue;
        }
        new_states.push(Successor {
            dir,
            is_push: true,
            state: state.push(new_player_pos, push_dest),
        });
    }

    new_states
}

/// Sum of distances of each box to its closest goal.
///
/// Boxes can share a goal here so this can both under- and overestimate.
fn heuristic_push(map: &GoalMap, state: &State) -> u32 {
    // less is better
    state
        .boxes()
        .iter()
        .map(|&box_pos| {
            map.goals()
                .iter()
                .map(|&goal| u32::from(box_pos.dist(goal)))
                .min()
                .unwrap_or(0)
        })
        .sum()
}

fn heuristic_none(_map: &GoalMap, _state: &State) -> u32 {
    0
}

pub(crate) fn search(
    map: &GoalMap,
    initial_state: &State,
    strategy: Strategy,
    max_states: Option<usize>,
) -> SolverOk {
    let arena = Arena::new();
    match strategy {
        Strategy::Bfs => search_with(
            &arena,
            Fifo::default(),
            heuristic_none,
            map,
            initial_state,
            strategy,
            max_states,
        ),
        Strategy::BestFirst => search_with(
            &arena,
            Priority::default(),
            heuristic_push,
            map,
            initial_state,
            strategy,
            max_states,
        ),
    }
}

fn search_with<'a, F, H>(
    arena: &'a Arena<SearchNode<'a>>,
    mut to_visit: F,
    heuristic: H,
    map: &GoalMap,
    initial_state: &State,
    strategy: Strategy,
    max_states: Option<usize>,
) -> SolverOk
where
    F: Frontier<'a>,
    H: Fn(&GoalMap, &State) -> u32,
{
    debug!("Search called: {}", strategy);

    let mut stats = Stats::new();

    if initial_state.boxes().iter().any(|&pos| map.is_dead_end(pos)) {
        debug!("Box in a dead end from the start");
        return SolverOk::new(Outcome::NoSolution, stats, strategy);
    }

    // states are marked as visited as soon as they're discovered
    // so every state gets the path that reached it first
    let mut visited: FnvHashSet<&'a State> = FnvHashSet::default();
    let mut queued = 0;

    let start: &'a SearchNode<'a> = arena.alloc(SearchNode::new(
        initial_state.clone(),
        None,
        None,
        heuristic(map, initial_state),
    ));
    stats.add_created(start.dist);
    visited.insert(&start.state);
    to_visit.push(start);
    queued += 1;

    while let Some(cur_node) = to_visit.pop() {
        if stats.add_unique_visited(cur_node.dist) {
            debug!(
                "{}: visited new depth {}, {} queued",
                strategy,
                cur_node.dist,
                to_visit.len()
            );
        }

        if map.solved(&cur_node.state) {
            debug!("Solved, backtracking path");
            let moves = backtracking::reconstruct_moves(cur_node);
            info!("{}: solved in {} moves", strategy, moves.move_cnt());
            return SolverOk::new(Outcome::Solved(moves), stats, strategy);
        }

        for successor in expand(map, &cur_node.state) {
            let dist = cur_node.dist + 1;
            stats.add_created(dist);
            if visited.contains(&successor.state) {
                stats.add_reached_duplicate(dist);
                continue;
            }

            if max_states.map_or(false, |max| queued >= max) {
                info!("{}: gave up after {} states", strategy, queued);
                return SolverOk::new(Outcome::StateLimit, stats, strategy);
            }

            let h = heuristic(map, &successor.state);
            let next_node: &'a SearchNode<'a> = arena.alloc(SearchNode::new(
                successor.state,
                Some(cur_node),
                Some(Move::new(successor.dir, successor.is_push)),
                h,
            ));
            visited.insert(&next_node.state);
            to_visit.push(next_node);
            queued += 1;
        }
    }

    info!("{}: no solution after {} states", strategy, queued);
    SolverOk::new(Outcome::NoSolution, stats, strategy)
}
