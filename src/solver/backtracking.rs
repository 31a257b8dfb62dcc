use crate::moves::Moves;
use crate::solver::a_star::SearchNode;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Follows `prev` links back to the initial node.
pub(crate) fn reconstruct_moves(final_node: &SearchNode<'_>) -> Moves {
    let mut moves = Moves::default();
    let mut node = final_node;
    while let Some(prev) = node.prev {
        moves.add(node.mov.expect("Only the initial node has no move"));
        node = prev;
    }
    moves.reverse();
    moves
}
