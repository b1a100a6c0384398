//! Maze Search Library
//!
//! Weighted shortest-path search over an oriented grid state space, with
//! reconstruction of every cell that belongs to *any* minimum-cost path.
//!
//! # Overview
//!
//! A searcher stands on a cell of a rectangular grid facing one of the four
//! compass directions. It can advance one cell in the facing direction or
//! rotate 90 degrees in place; each move class has a static, configurable cost
//! (1 and 1000 by default). The library provides:
//! - An immutable, validated grid model ([`Grid`])
//! - A Dijkstra-style search that keeps every equal-cost predecessor
//!   ([`search::solve`])
//! - Reconstruction of the optimal-path cell set, sequential or parallel
//!   ([`reconstruct()`], [`reconstruct_parallel`])
//! - Enumeration of individual optimal paths ([`SearchResult::paths`])
//! - A memoizing solver that answers both the cost and the cell-count question
//!   from one search ([`MazeSolver`])
//!
//! # Quick Example
//!
//! ```
//! use maze_search::{find_optimal_paths, Cell, Grid, Orientation, SearchConfig};
//!
//! // . . .
//! // S # E
//! // . . .
//! let grid = Grid::from_walls(
//!     3,
//!     3,
//!     [Cell::new(1, 1)],
//!     Cell::new(1, 0),
//!     Orientation::East,
//!     Cell::new(1, 2),
//! )?;
//!
//! let solution = find_optimal_paths(&grid, &SearchConfig::default())?;
//! assert_eq!(solution.min_cost, 3004);
//! // The routes above and below the wall tie, so every open cell counts
//! assert_eq!(solution.optimal_cells.len(), 8);
//! # Ok::<(), maze_search::Error>(())
//! ```
//!
//! # Errors
//!
//! Building a [`Grid`] fails with [`GridError`] on ragged rows, dimensions too
//! large to index, or a start/goal that is out of bounds or blocked. Searching fails with
//! [`SearchError::Unreachable`] when no move sequence reaches the goal, or with
//! [`SearchError::BudgetExhausted`] when a configured expansion budget runs out.
//! [`Error`] wraps both for callers that do everything in one go.

mod config;
mod error;
mod expander;
mod grid;
mod reconstruct;
pub mod search;
mod solver;
mod table;

// Re-export public API
pub use config::{
    Cost, DEFAULT_MOVE_COST, DEFAULT_TURN_COST, SearchConfig, SearchConfigBuilder, StepCost,
};
pub use error::{Endpoint, Error, GridError, SearchError};
pub use expander::{Move, Transition, move_between, reverse_transitions, transitions};
pub use grid::{Cell, Grid, Orientation, State};
pub use reconstruct::{OptimalPaths, reconstruct, reconstruct_parallel};
pub use search::SearchResult;
pub use solver::{MazeSolver, Solution, SolveReport, find_optimal_paths};
pub use table::StateTable;
