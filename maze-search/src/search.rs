//! Optimal-cost search over the oriented state graph.
//!
//! A Dijkstra-style best-first search that keeps *every* equal-cost
//! predecessor of a state instead of a single parent pointer. The resulting
//! predecessor sets form the shortest-path DAG from which
//! [`reconstruct`](crate::reconstruct) recovers all optimal cells.
//!
//! The search does not stop at the first goal pop: it keeps draining the
//! frontier until the cheapest remaining entry costs strictly more than the
//! best goal cost found, so equal-cost routes still queued are recorded too.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::config::{Cost, SearchConfig};
use crate::error::SearchError;
use crate::expander::transitions;
use crate::grid::{Grid, Orientation, State};
use crate::table::StateTable;

/// Entry of the search frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    cost: Cost,
    state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Outcome of a successful search.
///
/// Holds the finalized cost of every state settled at or below the minimum
/// goal cost, together with the complete predecessor sets of those states.
#[derive(Debug, Clone)]
pub struct SearchResult {
    start: State,
    min_cost: Cost,
    goal_states: Vec<State>,
    costs: StateTable<Option<Cost>>,
    finalized: StateTable<bool>,
    predecessors: StateTable<Vec<State>>,
    expansions: usize,
}

impl SearchResult {
    pub fn start(&self) -> State {
        self.start
    }

    /// Minimum cost over all goal orientations
    pub fn min_cost(&self) -> Cost {
        self.min_cost
    }

    /// Goal states whose finalized cost equals [`min_cost`](Self::min_cost)
    pub fn goal_states(&self) -> &[State] {
        &self.goal_states
    }

    /// Whether the search settled `state`
    pub fn is_finalized(&self, state: State) -> bool {
        self.finalized.get(state).copied().unwrap_or(false)
    }

    /// Minimum cost from the start to `state`, if the search settled it
    pub fn cost_of(&self, state: State) -> Option<Cost> {
        if self.is_finalized(state) {
            self.costs[state]
        } else {
            None
        }
    }

    /// States immediately preceding `state` on some minimum-cost path to it.
    ///
    /// Empty for the start state and for states the search never settled.
    pub fn predecessors(&self, state: State) -> &[State] {
        if self.is_finalized(state) {
            &self.predecessors[state]
        } else {
            &[]
        }
    }

    /// Number of states the search finalized
    pub fn expansions(&self) -> usize {
        self.expansions
    }
}

/// Run the search from the grid's start state to its goal cell.
///
/// # Errors
/// * `SearchError::Unreachable` - no goal orientation can be reached
/// * `SearchError::BudgetExhausted` - more states would be finalized than
///   `config.max_expansions()` allows
pub fn solve(grid: &Grid, config: &SearchConfig) -> Result<SearchResult, SearchError> {
    let start = grid.start();
    let mut costs: StateTable<Option<Cost>> = StateTable::new(grid, None);
    let mut finalized = StateTable::new(grid, false);
    let mut predecessors: StateTable<Vec<State>> = StateTable::with_default(grid);
    let mut frontier = BinaryHeap::new();
    let mut best_goal: Option<Cost> = None;
    let mut expansions = 0usize;

    costs[start] = Some(0);
    frontier.push(FrontierEntry {
        cost: 0,
        state: start,
    });

    while let Some(FrontierEntry { cost, state }) = frontier.pop() {
        if best_goal.is_some_and(|best| cost > best) {
            break;
        }
        // Stale entry: a cheaper route was recorded after this one was queued
        if finalized[state] || costs[state].is_some_and(|known| cost > known) {
            continue;
        }
        if let Some(limit) = config.max_expansions()
            && expansions >= limit
        {
            debug!("search aborted after {} expansions", expansions);
            return Err(SearchError::BudgetExhausted { limit });
        }

        finalized[state] = true;
        expansions += 1;
        trace!("finalized {:?} at cost {}", state, cost);

        if grid.is_goal(state.cell) {
            best_goal = Some(best_goal.map_or(cost, |best| best.min(cost)));
        }

        // Settled costs are bounded by the state count times the largest step
        // cost, which fits in `Cost`
        for transition in transitions(grid, config, state) {
            let candidate = cost + transition.cost;
            let next = transition.to;
            let recorded = costs[next];
            match recorded {
                Some(known) if candidate > known => {}
                Some(known) if candidate == known => predecessors[next].push(state),
                _ => {
                    costs[next] = Some(candidate);
                    predecessors.replace(next, vec![state]);
                    frontier.push(FrontierEntry {
                        cost: candidate,
                        state: next,
                    });
                }
            }
        }
    }

    let Some(min_cost) = best_goal else {
        debug!(
            "goal {} unreachable after {} expansions",
            grid.goal(),
            expansions
        );
        return Err(SearchError::Unreachable);
    };

    let goal_states: Vec<State> = Orientation::ALL
        .into_iter()
        .map(|facing| State::new(grid.goal(), facing))
        .filter(|&goal| finalized[goal] && costs[goal] == Some(min_cost))
        .collect();

    debug!(
        "min cost {} reached in {} goal orientation(s) after {} expansions",
        min_cost,
        goal_states.len(),
        expansions
    );

    Ok(SearchResult {
        start,
        min_cost,
        goal_states,
        costs,
        finalized,
        predecessors,
        expansions,
    })
}
