use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use fnv::FnvHasher;

use crate::data::Pos;

/// Player position and box positions - nothing else.
///
/// Boxes are kept sorted so two states reached by moving boxes in a different order compare equal.
/// The box slice is shared between a state and the states reached from it by steps,
/// only pushes allocate a new one.
#[derive(Clone)]
pub struct State {
    player_pos: Pos,
    boxes: Arc<[Pos]>,
    // computed once, states never change after construction
    hash: u64,
}

impl State {
    pub(crate) fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        Self::with_boxes(player_pos, boxes.into())
    }

    fn with_boxes(player_pos: Pos, boxes: Arc<[Pos]>) -> State {
        let mut hasher = FnvHasher::default();
        player_pos.hash(&mut hasher);
        boxes.hash(&mut hasher);
        State {
            player_pos,
            boxes,
            hash: hasher.finish(),
        }
    }

    pub fn player_pos(&self) -> Pos {
        self.player_pos
    }

    pub fn boxes(&self) -> &[Pos] {
        &self.boxes
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Player moves without touching a box.
    pub(crate) fn step(&self, new_player_pos: Pos) -> State {
        Self::with_boxes(new_player_pos, Arc::clone(&self.boxes))
    }

    /// Player moves onto `box_pos` and the box there ends up on `box_dest`.
    pub(crate) fn push(&self, box_pos: Pos, box_dest: Pos) -> State {
        let mut boxes = self.boxes.to_vec();
        let old = boxes
            .binary_search(&box_pos)
            .expect("Pushed box must exist");
        boxes.remove(old);
        let new = match boxes.binary_search(&box_dest) {
            Ok(_) => panic!("Box pushed onto another box at {}", box_dest),
            Err(index) => index,
        };
        boxes.insert(new, box_dest);
        Self::with_boxes(box_pos, boxes.into())
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.player_pos == other.player_pos && self.boxes == other.boxes
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "player: {}, boxes:", self.player_pos)?;
        for b in self.boxes.iter() {
            write!(f, " {}", b)?;
        }
        Ok(())
    }
}
