//! High-level entry points: one-shot search and a memoizing solver

use std::cell::OnceCell;
use std::collections::BTreeSet;

use chrono::{DateTime, TimeDelta, Utc};

use crate::config::{Cost, SearchConfig};
use crate::error::SearchError;
use crate::grid::{Cell, Grid};
use crate::reconstruct::reconstruct;
use crate::search::{self, SearchResult};

/// Minimum cost and the set of cells on any minimum-cost path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub min_cost: Cost,
    pub optimal_cells: BTreeSet<Cell>,
}

/// Search `grid` and reconstruct its optimal-path set.
///
/// # Errors
/// Propagates [`SearchError`] from the search; no partial result is returned.
pub fn find_optimal_paths(grid: &Grid, config: &SearchConfig) -> Result<Solution, SearchError> {
    let result = search::solve(grid, config)?;
    Ok(Solution {
        min_cost: result.min_cost(),
        optimal_cells: reconstruct(&result),
    })
}

/// A finished solve, including timing information
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub solution: Solution,
    /// Raw search output, kept for path queries
    pub search: SearchResult,
    /// When solving started (UTC)
    pub solve_start: DateTime<Utc>,
    /// When solving completed (UTC)
    pub solve_end: DateTime<Utc>,
}

impl SolveReport {
    /// Get the solve duration as TimeDelta
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// Owns a grid and its configuration, and solves it at most once.
///
/// Both questions asked of a maze (the minimum cost and the number of cells on
/// optimal paths) come from the same search, so the first call runs it and
/// later calls reuse the cached report, or the cached error.
///
/// # Example
///
/// ```
/// use maze_search::{Cell, Grid, MazeSolver, Orientation, SearchConfig};
///
/// let grid = Grid::new(
///     vec![vec![true; 3]; 2],
///     Cell::new(1, 0),
///     Orientation::East,
///     Cell::new(1, 2),
/// )?;
/// let solver = MazeSolver::new(grid, SearchConfig::default());
///
/// assert_eq!(solver.min_cost()?, 2);
/// assert_eq!(solver.optimal_cell_count()?, 3);
/// # Ok::<(), maze_search::Error>(())
/// ```
pub struct MazeSolver {
    grid: Grid,
    config: SearchConfig,
    report: OnceCell<Result<SolveReport, SearchError>>,
}

impl MazeSolver {
    pub fn new(grid: Grid, config: SearchConfig) -> Self {
        Self {
            grid,
            config,
            report: OnceCell::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run the search on first use and return the cached report
    pub fn solve(&self) -> Result<&SolveReport, SearchError> {
        self.report
            .get_or_init(|| {
                let solve_start = Utc::now();
                let search = search::solve(&self.grid, &self.config)?;
                let solution = Solution {
                    min_cost: search.min_cost(),
                    optimal_cells: reconstruct(&search),
                };
                let solve_end = Utc::now();

                Ok(SolveReport {
                    solution,
                    search,
                    solve_start,
                    solve_end,
                })
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Lowest total cost from the start to the goal
    pub fn min_cost(&self) -> Result<Cost, SearchError> {
        Ok(self.solve()?.solution.min_cost)
    }

    /// Number of distinct cells on at least one minimum-cost path
    pub fn optimal_cell_count(&self) -> Result<usize, SearchError> {
        Ok(self.solve()?.solution.optimal_cells.len())
    }
}
