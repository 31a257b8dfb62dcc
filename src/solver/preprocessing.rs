use crate::data::{MapCell, DIRECTIONS};
use crate::vec2d::Vec2d;

/// Marks empty cells in a corner.
///
/// A box can't be pulled so once it's pushed into a corner it can never leave.
/// Goals are never dead ends. Cells outside the grid count as walls.
/// Other kinds of deadlocks (boxes blocking each other, boxes along a wall with no goal) are not detected.
pub(crate) fn find_dead_ends(grid: &Vec2d<MapCell>) -> Vec2d<bool> {
    let mut dead_ends = grid.scratchpad();

    let blocked = |pos| grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall);

    for pos in grid.positions() {
        if grid[pos] != MapCell::Empty {
            continue;
        }

        // adjacent in the Up, Right, Down, Left cycle - never opposite
        dead_ends[pos] = DIRECTIONS
            .iter()
            .any(|&dir| blocked(pos + dir) && blocked(pos + dir.clockwise()));
    }

    dead_ends
}

#[cfg(test)]
mod tests {
    use crate::data::Pos;
    use crate::level::Level;

    #[test]
    fn dead_ends() {
        let level = r"
#####
##@##
##$##
#  .#
#####";
        let level: Level = level.parse().unwrap();
        let expected = r"
00000
00100
00000
01000
00000
"
        .trim_start();
        assert_eq!(level.map.dead_ends.to_string(), expected);
    }

    #[test]
    fn corners_and_corridors() {
        let level = r"
#######
#@    #
# ### #
#$  $.#
#.#####
#######";
        let level: Level = level.parse().unwrap();
        let expected = r"
0000000
0100010
0000000
0000000
0000000
0000000
"
        .trim_start();
        // [1, 1] is a corner even with the player on it, the bottom corridor has walls only on opposite sides
        // and the goals in the corners are fine
        assert_eq!(level.map.dead_ends.to_string(), expected);
    }

    #[test]
    fn goals_are_never_dead() {
        let rows: [[u8; 3]; 3] = [[1, 1, 1], [1, 5, 1], [1, 6, 1]];
        let level = Level::from_codes(&rows).unwrap();
        assert!(level.map.is_goal(Pos::new(1, 1)));
        assert!(!level.map.is_dead_end(Pos::new(1, 1)));
        // walls left and right, edge of the grid below
        assert!(level.map.is_dead_end(Pos::new(2, 1)));
    }

    #[test]
    fn grid_edge_counts_as_wall() {
        let rows: [[u8; 3]; 2] = [[6, 2, 3], [2, 4, 1]];
        let level = Level::from_codes(&rows).unwrap();
        let dead: Vec<_> = level.map.dead_ends().collect();
        assert_eq!(dead, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
    }
}
