//! Search configuration: move costs and an optional expansion budget

use crate::expander::Move;

/// Configured cost of a single move
pub type StepCost = u64;

/// Accumulated path cost.
///
/// Twice as wide as [`StepCost`], so a path through every state of a grid
/// cannot overflow even when each move costs `StepCost::MAX`.
pub type Cost = u128;

/// Cost of one advance in the classic reindeer maze
pub const DEFAULT_MOVE_COST: StepCost = 1;
/// Cost of one 90 degree rotation in the classic reindeer maze
pub const DEFAULT_TURN_COST: StepCost = 1000;

/// Static costs and limits for one search.
///
/// # Example
///
/// ```
/// use maze_search::SearchConfig;
///
/// let config = SearchConfig::builder()
///     .turn_cost(10)
///     .max_expansions(1_000_000)
///     .build();
/// assert_eq!(config.move_cost(), 1);
/// assert_eq!(config.turn_cost(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    move_cost: StepCost,
    turn_cost: StepCost,
    max_expansions: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            move_cost: DEFAULT_MOVE_COST,
            turn_cost: DEFAULT_TURN_COST,
            max_expansions: None,
        }
    }
}

impl SearchConfig {
    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder::default()
    }

    pub fn move_cost(&self) -> StepCost {
        self.move_cost
    }

    pub fn turn_cost(&self) -> StepCost {
        self.turn_cost
    }

    /// Maximum number of states the search may finalize, `None` for unlimited
    pub fn max_expansions(&self) -> Option<usize> {
        self.max_expansions
    }

    /// Incremental cost of a single move
    pub fn cost_of(&self, mv: Move) -> Cost {
        let step = match mv {
            Move::Advance => self.move_cost,
            Move::RotateLeft | Move::RotateRight => self.turn_cost,
        };
        Cost::from(step)
    }

    /// Total cost of a move sequence
    pub fn cost_of_moves(&self, moves: impl IntoIterator<Item = Move>) -> Cost {
        moves.into_iter().map(|mv| self.cost_of(mv)).sum()
    }
}

/// Builder for [`SearchConfig`], starting from the defaults
#[derive(Debug, Clone, Default)]
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn move_cost(mut self, cost: StepCost) -> Self {
        self.config.move_cost = cost;
        self
    }

    pub fn turn_cost(mut self, cost: StepCost) -> Self {
        self.config.turn_cost = cost;
        self
    }

    pub fn max_expansions(mut self, limit: usize) -> Self {
        self.config.max_expansions = Some(limit);
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}
