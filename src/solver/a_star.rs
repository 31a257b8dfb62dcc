use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

use crate::moves::Move;
use crate::state::State;

/// A state together with how the search got there.
///
/// Nodes live in an arena owned by the search, `prev` only ever points back towards the initial node.
pub(crate) struct SearchNode<'a> {
    pub(crate) state: State,
    pub(crate) prev: Option<&'a SearchNode<'a>>,
    /// `None` only for the initial node.
    pub(crate) mov: Option<Move>,
    pub(crate) dist: u32,
    pub(crate) cost: u32,
}

impl<'a> SearchNode<'a> {
    pub(crate) fn new(state: State, prev: Option<&'a SearchNode<'a>>, mov: Option<Move>, h: u32) -> Self {
        let dist = prev.map_or(0, |p| p.dist + 1);
        SearchNode {
            state,
            prev,
            mov,
            dist,
            cost: dist + h,
        }
    }
}

impl Debug for SearchNode<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchNode {{ {:?}, mov: {:?}, dist: {}, cost: {} }}",
            self.state, self.mov, self.dist, self.cost
        )
    }
}

/// Counts per depth.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stats {
    created_states: Vec<usize>,
    visited_states: Vec<usize>,
    duplicate_states: Vec<usize>,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_created(&self) -> usize {
        self.created_states.iter().sum()
    }

    pub fn total_unique_visited(&self) -> usize {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> usize {
        self.duplicate_states.iter().sum()
    }

    /// Returns true when this is the first state created at this depth.
    pub(crate) fn add_created(&mut self, dist: u32) -> bool {
        Self::add(&mut self.created_states, dist)
    }

    pub(crate) fn add_unique_visited(&mut self, dist: u32) -> bool {
        Self::add(&mut self.visited_states, dist)
    }

    pub(crate) fn add_reached_duplicate(&mut self, dist: u32) -> bool {
        Self::add(&mut self.duplicate_states, dist)
    }

    fn add(counts: &mut Vec<usize>, dist: u32) -> bool {
        let mut ret = false;

        // while because some depths might be skipped
        while dist as usize >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[dist as usize] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "created by depth: {:?}", self.created_states)?;
        writeln!(f, "reached duplicates by depth: {:?}", self.duplicate_states)?;
        writeln!(f, "unique visited by depth: {:?}", self.visited_states)?;
        writeln!(f, "total created: {}", self.total_created().separated_string())?;
        writeln!(
            f,
            "total reached duplicates: {}",
            self.total_reached_duplicates().separated_string()
        )?;
        writeln!(
            f,
            "total unique visited: {}",
            self.total_unique_visited().separated_string()
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let duplicates = self.total_reached_duplicates();
        let visited = self.total_unique_visited();
        // created includes duplicates which are never queued
        let left = created.saturating_sub(visited + duplicates);
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "Unique visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}{}",
            "Depth", "Created", "Unique", "Duplicates", "Unknown (not reached)"
        )?;
        let at = |counts: &[usize], i: usize| counts.get(i).cloned().unwrap_or(0);
        for i in 0..self.created_states.len() {
            let created = at(&self.created_states, i);
            let visited = at(&self.visited_states, i);
            let duplicates = at(&self.duplicate_states, i);
            let left = created.saturating_sub(visited + duplicates);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", i),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string()
            )?;
        }
        Ok(())
    }
}
