use std::fmt::{self, Display, Formatter};
use std::ops::Add;

/// The largest number of rows or columns a level can have.
pub(crate) const MAX_SIZE: usize = i16::max_value() as usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MapCell {
    Wall,
    Empty,
    Goal,
}

impl Display for MapCell {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            MapCell::Wall => write!(f, "#"),
            MapCell::Empty => write!(f, " "),
            MapCell::Goal => write!(f, "."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Contents {
    Empty,
    Box,
    Player,
}

// signed so that stepping off the edge of a level without a border is representable
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: i16,
    pub c: i16,
}

impl Pos {
    pub fn new(r: i16, c: i16) -> Pos {
        Pos { r, c }
    }

    pub fn dist(self, other: Pos) -> u16 {
        // i16 differences can overflow on large levels
        let dr = (i32::from(self.r) - i32::from(other.r)).abs();
        let dc = (i32::from(self.c) - i32::from(other.c)).abs();
        (dr + dc) as u16
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.r, self.c)
    }
}

/// The order matters - successors are always generated in this order.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// The next direction clockwise.
    pub(crate) fn clockwise(self) -> Dir {
        DIRECTIONS[(self as usize + 1) % 4]
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}

impl Add<Dir> for Pos {
    type Output = Pos;

    fn add(self, dir: Dir) -> Pos {
        match dir {
            Dir::Up => Pos::new(self.r - 1, self.c),
            Dir::Right => Pos::new(self.r, self.c + 1),
            Dir::Down => Pos::new(self.r + 1, self.c),
            Dir::Left => Pos::new(self.r, self.c - 1),
        }
    }
}
