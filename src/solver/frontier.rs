use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use crate::solver::a_star::SearchNode;

/// Nodes waiting to be expanded.
pub(crate) trait Frontier<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>);

    fn pop(&mut self) -> Option<&'a SearchNode<'a>>;

    fn len(&self) -> usize;
}

/// First in, first out - breadth-first search.
#[derive(Debug, Default)]
pub(crate) struct Fifo<'a>(VecDeque<&'a SearchNode<'a>>);

impl<'a> Frontier<'a> for Fifo<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.0.pop_front()
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

/// Lowest cost first, ties go to the node pushed first.
#[derive(Debug, Default)]
pub(crate) struct Priority<'a> {
    heap: BinaryHeap<Entry<'a>>,
    pushed: u64,
}

impl<'a> Frontier<'a> for Priority<'a> {
    fn push(&mut self, node: &'a SearchNode<'a>) {
        self.heap.push(Entry {
            cost: node.cost,
            seq: self.pushed,
            node,
        });
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<&'a SearchNode<'a>> {
        self.heap.pop().map(|entry| entry.node)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[derive(Debug)]
struct Entry<'a> {
    cost: u32,
    seq: u64,
    node: &'a SearchNode<'a>,
}

impl Ord for Entry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // intentionally reversed for BinaryHeap
        (other.cost, other.seq).cmp(&(self.cost, self.seq))
    }
}

impl PartialOrd for Entry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    use typed_arena::Arena;

    use crate::data::Pos;
    use crate::state::State;

    fn node<'a>(arena: &'a Arena<SearchNode<'a>>, c: i16, h: u32) -> &'a SearchNode<'a> {
        arena.alloc(SearchNode::new(State::new(Pos::new(0, c), vec![]), None, None, h))
    }

    #[test]
    fn fifo_order() {
        let arena = Arena::new();
        let mut fifo = Fifo::default();
        for c in 0..3 {
            fifo.push(node(&arena, c, 10 - c as u32));
        }
        assert_eq!(fifo.len(), 3);
        let order: Vec<_> = std::iter::from_fn(|| fifo.pop())
            .map(|n| n.state.player_pos().c)
            .collect();
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn priority_ties_are_insertion_ordered() {
        let arena = Arena::new();
        let mut priority = Priority::default();
        priority.push(node(&arena, 0, 5));
        priority.push(node(&arena, 1, 3));
        priority.push(node(&arena, 2, 5));
        priority.push(node(&arena, 3, 3));
        priority.push(node(&arena, 4, 9));
        let order: Vec<_> = std::iter::from_fn(|| priority.pop())
            .map(|n| n.state.player_pos().c)
            .collect();
        assert_eq!(order, vec![1, 3, 0, 2, 4]);
    }
}
