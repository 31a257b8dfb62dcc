use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Dir, MapCell, Pos, MAX_SIZE};
use crate::map::GoalMap;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver;
use crate::state::State;
use crate::vec2d::Vec2d;

/// Cell codes of the raw level grid.
pub mod codes {
    /// Outside the level - nothing stops the player from walking there though.
    pub const VOID: u8 = 0;
    pub const WALL: u8 = 1;
    pub const FLOOR: u8 = 2;
    pub const GOAL: u8 = 3;
    pub const BOX: u8 = 4;
    pub const BOX_ON_GOAL: u8 = 5;
    pub const PLAYER: u8 = 6;
    pub const PLAYER_ON_GOAL: u8 = 7;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelErr {
    Empty,
    TooLarge,
    LineLength(usize),
    InvalidCode { r: usize, c: usize, code: u8 },
    MultiplePlayers,
    NoPlayer,
    BoxesGoals { boxes: usize, goals: usize },
}

impl Display for LevelErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            LevelErr::Empty => write!(f, "Empty level"),
            LevelErr::TooLarge => write!(f, "Level larger than {} rows/columns", MAX_SIZE),
            LevelErr::LineLength(r) => write!(f, "Wrong line length on line {}", r),
            LevelErr::InvalidCode { r, c, code } => {
                write!(f, "Invalid cell code {} at pos: [{}, {}]", code, r, c)
            }
            LevelErr::MultiplePlayers => write!(f, "More than one player"),
            LevelErr::NoPlayer => write!(f, "No player"),
            LevelErr::BoxesGoals { boxes, goals } => write!(
                f,
                "Different number of boxes ({}) and goals ({})",
                boxes, goals
            ),
        }
    }
}

impl Error for LevelErr {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayErr {
    /// The move at this index can't be made from the state reached by the previous moves.
    Illegal(usize, Dir),
    /// The move at this index pushes a box but is not marked as a push or vice versa.
    PushMismatch(usize, Dir),
}

impl Display for ReplayErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ReplayErr::Illegal(i, dir) => write!(f, "Illegal move {} at index {}", dir, i),
            ReplayErr::PushMismatch(i, dir) => {
                write!(f, "Move {} at index {} is marked incorrectly", dir, i)
            }
        }
    }
}

impl Error for ReplayErr {}

#[derive(Clone)]
pub struct Level {
    pub map: GoalMap,
    pub state: State,
}

impl Level {
    /// Builds the static map and the initial state from rows of cell codes.
    pub fn from_codes<R: AsRef<[u8]>>(rows: &[R]) -> Result<Level, LevelErr> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        if cols == 0 {
            return Err(LevelErr::Empty);
        }
        if rows.len() > MAX_SIZE || cols > MAX_SIZE {
            return Err(LevelErr::TooLarge);
        }

        let mut grid = Vec::with_capacity(rows.len());
        let mut goals = Vec::new();
        let mut boxes = Vec::new();
        let mut player_pos = None;

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LevelErr::LineLength(r));
            }

            let mut line = Vec::with_capacity(cols);
            for (c, &code) in row.iter().enumerate() {
                let pos = Pos::new(r as i16, c as i16);

                if code == codes::PLAYER || code == codes::PLAYER_ON_GOAL {
                    if player_pos.is_some() {
                        return Err(LevelErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                }
                if code == codes::BOX || code == codes::BOX_ON_GOAL {
                    boxes.push(pos);
                }

                let cell = match code {
                    codes::WALL => MapCell::Wall,
                    codes::VOID | codes::FLOOR | codes::BOX | codes::PLAYER => MapCell::Empty,
                    codes::GOAL | codes::BOX_ON_GOAL | codes::PLAYER_ON_GOAL => {
                        goals.push(pos);
                        MapCell::Goal
                    }
                    _ => return Err(LevelErr::InvalidCode { r, c, code }),
                };
                line.push(cell);
            }
            grid.push(line);
        }

        let player_pos = player_pos.ok_or(LevelErr::NoPlayer)?;
        if boxes.len() != goals.len() {
            return Err(LevelErr::BoxesGoals {
                boxes: boxes.len(),
                goals: goals.len(),
            });
        }

        Ok(Level {
            map: GoalMap::new(Vec2d::new(grid), goals),
            state: State::new(player_pos, boxes),
        })
    }

    pub fn xsb_with_state<'a>(&'a self, state: &'a State) -> MapFormatter<'a> {
        self.map.xsb_with_state(state)
    }

    pub fn xsb_solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(self, moves, include_steps)
    }

    /// Applies the moves to the initial state using the same rules as the solver.
    pub fn replay(&self, moves: &Moves) -> Result<State, ReplayErr> {
        let mut state = self.state.clone();
        for (i, mov) in moves.iter().enumerate() {
            let successor = solver::expand(&self.map, &state)
                .into_iter()
                .find(|successor| successor.dir == mov.dir)
                .ok_or(ReplayErr::Illegal(i, mov.dir))?;
            if successor.is_push != mov.is_push {
                return Err(ReplayErr::PushMismatch(i, mov.dir));
            }
            state = successor.state;
        }
        Ok(state)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb_with_state(&self.state))
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
