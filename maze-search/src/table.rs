//! Dense per-state storage.
//!
//! Every `(cell, orientation)` pair of a grid maps to one slot of a flat `Vec`,
//! so lookups during search are plain indexing instead of hashing.

use std::ops::{Index, IndexMut};

use crate::grid::{Grid, Orientation, State};

/// A table holding one `T` per state of a grid.
///
/// Indexing with a state whose cell lies outside the originating grid panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateTable<T> {
    height: usize,
    width: usize,
    slots: Vec<T>,
}

impl<T: Clone> StateTable<T> {
    /// Creates a table for `grid` with every slot set to `fill`
    pub fn new(grid: &Grid, fill: T) -> Self {
        Self {
            height: grid.height(),
            width: grid.width(),
            slots: vec![fill; grid.state_count()],
        }
    }
}

impl<T: Default> StateTable<T> {
    /// Creates a table for `grid` with every slot set to `T::default()`
    pub fn with_default(grid: &Grid) -> Self {
        let mut slots = Vec::with_capacity(grid.state_count());
        slots.resize_with(grid.state_count(), T::default);
        Self {
            height: grid.height(),
            width: grid.width(),
            slots,
        }
    }
}

impl<T> StateTable<T> {
    fn slot(&self, state: State) -> usize {
        (state.cell.row * self.width + state.cell.col) * Orientation::ALL.len()
            + state.facing.index()
    }

    /// The value for `state`, or `None` if its cell is outside the grid
    pub fn get(&self, state: State) -> Option<&T> {
        (state.cell.row < self.height && state.cell.col < self.width)
            .then(|| &self.slots[self.slot(state)])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Replaces the value for `state`, returning the previous one
    pub fn replace(&mut self, state: State, value: T) -> T {
        let slot = self.slot(state);
        std::mem::replace(&mut self.slots[slot], value)
    }
}

impl<T> Index<State> for StateTable<T> {
    type Output = T;

    fn index(&self, state: State) -> &T {
        &self.slots[self.slot(state)]
    }
}

impl<T> IndexMut<State> for StateTable<T> {
    fn index_mut(&mut self, state: State) -> &mut T {
        let slot = self.slot(state);
        &mut self.slots[slot]
    }
}
