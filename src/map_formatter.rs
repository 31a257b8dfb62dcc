use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{Contents, MapCell, Pos};
use crate::map::GoalMap;
use crate::state::State;

/// Renders a map, optionally with boxes and the player, in XSB.
pub struct MapFormatter<'a> {
    map: &'a GoalMap,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(map: &'a GoalMap, state: Option<&'a State>) -> Self {
        Self { map, state }
    }
}

impl Display for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = &self.map.grid;
        let mut state_grid = grid.scratchpad_with_default(Contents::Empty);
        if let Some(state) = self.state {
            for &b in state.boxes() {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos()] = Contents::Player;
        }

        for r in 0..grid.rows() {
            // don't print trailing empty cells to match the input level strings
            let last_non_empty = (0..grid.cols())
                .map(|c| Pos::new(r, c))
                .filter(|&pos| grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty)
                .map(|pos| pos.c + 1)
                .last()
                .unwrap_or(0);

            for c in 0..last_non_empty {
                let pos = Pos::new(r, c);
                write_xsb(grid[pos], state_grid[pos], f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Debug for MapFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

fn write_xsb(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
    match (cell, contents) {
        (MapCell::Wall, Contents::Empty) => write!(f, "#"),
        (MapCell::Wall, _) => unreachable!(),
        (MapCell::Empty, Contents::Empty) => write!(f, " "),
        (MapCell::Empty, Contents::Box) => write!(f, "$"),
        (MapCell::Empty, Contents::Player) => write!(f, "@"),
        (MapCell::Goal, Contents::Empty) => write!(f, "."),
        (MapCell::Goal, Contents::Box) => write!(f, "*"),
        (MapCell::Goal, Contents::Player) => write!(f, "+"),
    }
}
