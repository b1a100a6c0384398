//! Grid model: cells, orientations, search states and the passability map

use std::fmt;

use crate::error::{Endpoint, GridError};

/// A `(row, col)` coordinate into a rectangular grid.
///
/// Cells order row-major, so sets of cells iterate top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another cell
    pub fn manhattan(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four compass directions.
///
/// Clockwise cyclic order is North, East, South, West.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Orientation {
    North,
    East,
    South,
    West,
}

impl Orientation {
    /// All orientations in clockwise order, starting from North
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Position in the clockwise cycle (North = 0)
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotate 90 degrees clockwise
    pub const fn rotate_right(self) -> Self {
        Self::ALL[(self.index() + 1) % 4]
    }

    /// Rotate 90 degrees counter-clockwise
    pub const fn rotate_left(self) -> Self {
        Self::ALL[(self.index() + 3) % 4]
    }

    pub const fn opposite(self) -> Self {
        Self::ALL[(self.index() + 2) % 4]
    }

    /// Unit vector as `(d_row, d_col)`; rows grow downwards
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::East => (0, 1),
            Orientation::South => (1, 0),
            Orientation::West => (0, -1),
        }
    }
}

/// The unit of search: a cell plus the direction being faced
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    pub cell: Cell,
    pub facing: Orientation,
}

impl State {
    pub const fn new(cell: Cell, facing: Orientation) -> Self {
        Self { cell, facing }
    }
}

/// Immutable passability map with a start state and a goal cell.
///
/// Construction validates the input once; afterwards every accessor is
/// infallible. Cells outside the bounds are reported as not open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    open: Vec<bool>,
    start: State,
    goal: Cell,
}

impl Grid {
    /// Build a grid from rows of passability markers (`true` = open).
    ///
    /// # Errors
    /// * `GridError::RaggedRows` - rows have unequal widths
    /// * `GridError::OutOfBounds` - start or goal outside the grid
    /// * `GridError::Blocked` - start or goal on a wall
    /// * `GridError::TooLarge` - the state count overflows `usize`
    pub fn new(
        rows: Vec<Vec<bool>>,
        start: Cell,
        facing: Orientation,
        goal: Cell,
    ) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut open = Vec::with_capacity(checked_area(height, width)?);
        for (row, markers) in rows.into_iter().enumerate() {
            if markers.len() != width {
                return Err(GridError::RaggedRows {
                    row,
                    expected: width,
                    found: markers.len(),
                });
            }
            open.extend(markers);
        }

        Self::validated(height, width, open, State::new(start, facing), goal)
    }

    /// Build a `height` x `width` grid that is open everywhere except `walls`.
    ///
    /// Walls outside the bounds have no effect. Fails like [`Grid::new`].
    pub fn from_walls(
        height: usize,
        width: usize,
        walls: impl IntoIterator<Item = Cell>,
        start: Cell,
        facing: Orientation,
        goal: Cell,
    ) -> Result<Self, GridError> {
        let mut open = vec![true; checked_area(height, width)?];
        for wall in walls {
            if wall.row < height && wall.col < width {
                open[wall.row * width + wall.col] = false;
            }
        }

        Self::validated(height, width, open, State::new(start, facing), goal)
    }

    fn validated(
        height: usize,
        width: usize,
        open: Vec<bool>,
        start: State,
        goal: Cell,
    ) -> Result<Self, GridError> {
        let grid = Self {
            height,
            width,
            open,
            start,
            goal,
        };
        grid.check_endpoint(Endpoint::Start, start.cell)?;
        grid.check_endpoint(Endpoint::Goal, goal)?;
        Ok(grid)
    }

    fn check_endpoint(&self, role: Endpoint, cell: Cell) -> Result<(), GridError> {
        if !self.contains(cell) {
            return Err(GridError::OutOfBounds {
                role,
                cell,
                height: self.height,
                width: self.width,
            });
        }
        if !self.is_open(cell) {
            return Err(GridError::Blocked { role, cell });
        }
        Ok(())
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether `cell` lies within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.height && cell.col < self.width
    }

    /// Whether `cell` is inside the grid and not a wall
    pub fn is_open(&self, cell: Cell) -> bool {
        self.contains(cell) && self.open[cell.row * self.width + cell.col]
    }

    pub fn start(&self) -> State {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    /// Goal test; any orientation on the goal cell counts
    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    /// The in-bounds cell one step from `cell` in direction `facing`
    pub fn neighbor(&self, cell: Cell, facing: Orientation) -> Option<Cell> {
        let (d_row, d_col) = facing.delta();
        let next = Cell::new(
            cell.row.checked_add_signed(d_row)?,
            cell.col.checked_add_signed(d_col)?,
        );
        self.contains(next).then_some(next)
    }

    /// Iterate over all open cells in row-major order
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.open
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(|(idx, _)| Cell::new(idx / self.width, idx % self.width))
    }

    /// Size of the state space (every cell in every orientation).
    ///
    /// Construction rejects grids for which this would overflow.
    pub fn state_count(&self) -> usize {
        self.height * self.width * Orientation::ALL.len()
    }
}

/// Number of cells in a `height` x `width` grid, provided all of its states
/// can be addressed by one allocation
fn checked_area(height: usize, width: usize) -> Result<usize, GridError> {
    height
        .checked_mul(width)
        .filter(|area| {
            area.checked_mul(Orientation::ALL.len())
                .is_some_and(|states| states <= isize::MAX as usize)
        })
        .ok_or(GridError::TooLarge { height, width })
}
