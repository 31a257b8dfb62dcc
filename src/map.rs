use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos};
use crate::map_formatter::MapFormatter;
use crate::solver::preprocessing;
use crate::state::State;
use crate::vec2d::Vec2d;

/// The static part of a level - everything that doesn't change while solving.
#[derive(Clone, PartialEq, Eq)]
pub struct GoalMap {
    pub(crate) grid: Vec2d<MapCell>,
    pub(crate) goals: Vec<Pos>,
    pub(crate) dead_ends: Vec2d<bool>,
}

impl GoalMap {
    pub(crate) fn new(grid: Vec2d<MapCell>, mut goals: Vec<Pos>) -> Self {
        goals.sort();
        let dead_ends = preprocessing::find_dead_ends(&grid);
        GoalMap {
            grid,
            goals,
            dead_ends,
        }
    }

    pub fn rows(&self) -> i16 {
        self.grid.rows()
    }

    pub fn cols(&self) -> i16 {
        self.grid.cols()
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    /// Walls and everything outside the grid.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    /// A box on this cell can never reach a goal.
    pub fn is_dead_end(&self, pos: Pos) -> bool {
        self.dead_ends.get(pos).cloned().unwrap_or(false)
    }

    pub fn dead_ends(&self) -> impl Iterator<Item = Pos> + '_ {
        self.dead_ends.positions().filter(move |&pos| self.dead_ends[pos])
    }

    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.grid
            .positions()
            .filter(move |&pos| self.grid[pos] == MapCell::Wall)
    }

    pub fn solved(&self, state: &State) -> bool {
        // all boxes on a goal, not all goals have a box - they're the same for valid levels
        state.boxes().iter().all(|&pos| self.is_goal(pos))
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        MapFormatter::new(self, Some(state))
    }
}

impl Display for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", MapFormatter::new(self, None))
    }
}

impl Debug for GoalMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
