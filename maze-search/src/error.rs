//! Error types for grid construction and search

use std::fmt;

use thiserror::Error;

use crate::grid::Cell;

/// Which endpoint of the search a grid error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => f.write_str("start"),
            Endpoint::Goal => f.write_str("goal"),
        }
    }
}

/// Error type for building a grid model
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's width differs from the first row
    #[error("Ragged rows: row {row} has width {found}, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The start or goal cell lies outside the grid
    #[error("The {role} cell {cell} is outside the {height}x{width} grid")]
    OutOfBounds {
        role: Endpoint,
        cell: Cell,
        height: usize,
        width: usize,
    },
    /// The start or goal cell is a wall
    #[error("The {role} cell {cell} is blocked")]
    Blocked { role: Endpoint, cell: Cell },
    /// The state space of the grid cannot be indexed in memory
    #[error("The {height}x{width} grid is too large")]
    TooLarge { height: usize, width: usize },
}

/// Error type for running a search over a valid grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// No sequence of moves reaches the goal cell
    #[error("Goal is unreachable from the start state")]
    Unreachable,
    /// The configured expansion budget ran out before the search settled
    #[error("Search exceeded its budget of {limit} expansions")]
    BudgetExhausted { limit: usize },
}

/// Umbrella error for callers that build the grid and search in one go
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input grid is malformed
    #[error("Invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
    /// The search failed on a valid grid
    #[error("Search error: {0}")]
    Search(#[from] SearchError),
}
