//! State expansion: the moves available from a state and their costs

use crate::config::{Cost, SearchConfig};
use crate::grid::{Grid, State};

/// A single oriented move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Step one cell in the facing direction
    Advance,
    /// Turn 90 degrees counter-clockwise in place
    RotateLeft,
    /// Turn 90 degrees clockwise in place
    RotateRight,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Advance, Move::RotateLeft, Move::RotateRight];

    /// The state reached by taking this move from `state`, if the move is legal
    pub fn apply(self, grid: &Grid, state: State) -> Option<State> {
        match self {
            Move::Advance => grid
                .neighbor(state.cell, state.facing)
                .filter(|&cell| grid.is_open(cell))
                .map(|cell| State::new(cell, state.facing)),
            Move::RotateLeft => Some(State::new(state.cell, state.facing.rotate_left())),
            Move::RotateRight => Some(State::new(state.cell, state.facing.rotate_right())),
        }
    }

    /// The state from which this move leads to `state`, if such a state is legal
    pub fn undo(self, grid: &Grid, state: State) -> Option<State> {
        match self {
            Move::Advance => grid
                .neighbor(state.cell, state.facing.opposite())
                .filter(|&cell| grid.is_open(cell))
                .map(|cell| State::new(cell, state.facing)),
            Move::RotateLeft => Some(State::new(state.cell, state.facing.rotate_right())),
            Move::RotateRight => Some(State::new(state.cell, state.facing.rotate_left())),
        }
    }
}

/// One edge of the state graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub mv: Move,
    /// The other end of the edge: the next state for forward expansion,
    /// the previous state for reverse expansion
    pub to: State,
    pub cost: Cost,
}

/// Moves out of `state`: advance (when the next cell is open), rotate left,
/// rotate right.
pub fn transitions<'a>(
    grid: &'a Grid,
    config: &'a SearchConfig,
    state: State,
) -> impl Iterator<Item = Transition> + 'a {
    Move::ALL.into_iter().filter_map(move |mv| {
        mv.apply(grid, state).map(|to| Transition {
            mv,
            to,
            cost: config.cost_of(mv),
        })
    })
}

/// Moves into `state`, each reported with the state it came from
pub fn reverse_transitions<'a>(
    grid: &'a Grid,
    config: &'a SearchConfig,
    state: State,
) -> impl Iterator<Item = Transition> + 'a {
    Move::ALL.into_iter().filter_map(move |mv| {
        mv.undo(grid, state).map(|to| Transition {
            mv,
            to,
            cost: config.cost_of(mv),
        })
    })
}

/// The move leading from `from` to `to`, if they are adjacent in the state graph
pub fn move_between(grid: &Grid, from: State, to: State) -> Option<Move> {
    Move::ALL
        .into_iter()
        .find(|mv| mv.apply(grid, from) == Some(to))
}
