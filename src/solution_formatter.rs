use std::fmt::{self, Debug, Display, Formatter};

use crate::level::Level;
use crate::moves::Moves;

/// Every intermediate state of a solution.
pub struct SolutionFormatter<'a> {
    level: &'a Level,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(level: &'a Level, moves: &'a Moves, include_steps: bool) -> Self {
        Self {
            level,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.level)?;

        let mut last_state = self.level.state.clone();
        for &mov in self.moves {
            let new_player_pos = last_state.player_pos() + mov.dir;
            let new_state = if last_state.has_box(new_player_pos) {
                last_state.push(new_player_pos, new_player_pos + mov.dir)
            } else {
                last_state.step(new_player_pos)
            };
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", self.level.xsb_with_state(&new_state))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
