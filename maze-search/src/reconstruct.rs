//! Recovery of the optimal-path set from a finished search.
//!
//! The predecessor sets recorded by [`search::solve`](crate::search::solve)
//! form a graph whose edges all point back towards the start. Walking it
//! backwards from every goal state at the minimum cost visits exactly the
//! states that lie on some minimum-cost path.
//!
//! With zero-cost moves the graph may contain cycles between equal-cost
//! states, so every walk keeps a visited set.

use std::collections::{BTreeSet, HashSet};

use rayon::prelude::*;

use crate::grid::{Cell, State};
use crate::search::SearchResult;

/// Every cell lying on at least one minimum-cost path, start and goal included.
pub fn reconstruct(result: &SearchResult) -> BTreeSet<Cell> {
    walk_back(result, result.goal_states().iter().copied())
}

/// Same as [`reconstruct`], with one backward walk per goal orientation run on
/// the rayon thread pool and the cell sets unioned afterwards.
pub fn reconstruct_parallel(result: &SearchResult) -> BTreeSet<Cell> {
    result
        .goal_states()
        .par_iter()
        .map(|&goal| walk_back(result, [goal]))
        .reduce(BTreeSet::new, |mut cells, other| {
            cells.extend(other);
            cells
        })
}

fn walk_back(result: &SearchResult, sources: impl IntoIterator<Item = State>) -> BTreeSet<Cell> {
    let mut visited: HashSet<State> = HashSet::new();
    let mut pending: Vec<State> = Vec::new();
    let mut cells = BTreeSet::new();

    for source in sources {
        if visited.insert(source) {
            pending.push(source);
        }
    }

    while let Some(state) = pending.pop() {
        cells.insert(state.cell);
        for &pred in result.predecessors(state) {
            if visited.insert(pred) {
                pending.push(pred);
            }
        }
    }

    cells
}

/// Iterator over individual minimum-cost paths, each listed from the start
/// state to a goal state.
///
/// Paths are produced depth-first from each goal state in turn. A path never
/// visits the same state twice, so zero-cost loops are not unrolled. The number
/// of optimal paths can grow exponentially with the grid size; use
/// [`Iterator::take`] to bound the work.
pub struct OptimalPaths<'a> {
    result: &'a SearchResult,
    goals: std::slice::Iter<'a, State>,
    /// Current partial path from a goal backwards, with the index of the next
    /// predecessor to try for each state
    stack: Vec<(State, usize)>,
    on_path: HashSet<State>,
}

impl<'a> OptimalPaths<'a> {
    pub fn new(result: &'a SearchResult) -> Self {
        Self {
            result,
            goals: result.goal_states().iter(),
            stack: Vec::new(),
            on_path: HashSet::new(),
        }
    }

    /// Extends the partial path by `state`, or returns the finished path if
    /// `state` is the start.
    fn extend(&mut self, state: State) -> Option<Vec<State>> {
        if state == self.result.start() {
            let mut path = Vec::with_capacity(self.stack.len() + 1);
            path.push(state);
            path.extend(self.stack.iter().rev().map(|&(s, _)| s));
            return Some(path);
        }
        self.stack.push((state, 0));
        self.on_path.insert(state);
        None
    }
}

impl Iterator for OptimalPaths<'_> {
    type Item = Vec<State>;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.result;
        loop {
            let Some(&(state, cursor)) = self.stack.last() else {
                let goal = *self.goals.next()?;
                if let Some(path) = self.extend(goal) {
                    return Some(path);
                }
                continue;
            };

            match result.predecessors(state).get(cursor) {
                Some(&pred) => {
                    if let Some(top) = self.stack.last_mut() {
                        top.1 += 1;
                    }
                    if self.on_path.contains(&pred) {
                        continue;
                    }
                    if let Some(path) = self.extend(pred) {
                        return Some(path);
                    }
                }
                None => {
                    self.stack.pop();
                    self.on_path.remove(&state);
                }
            }
        }
    }
}

impl SearchResult {
    /// Iterate over the individual minimum-cost paths
    pub fn paths(&self) -> OptimalPaths<'_> {
        OptimalPaths::new(self)
    }
}
