//! End-to-end scenarios over known mazes and degenerate inputs

mod common;

use std::collections::BTreeSet;

use common::{LARGER_MAZE, SMALL_MAZE, maze};
use maze_search::{
    Cell, Cost, Endpoint, Error, Grid, GridError, MazeSolver, Orientation, SearchConfig,
    SearchError, StepCost, find_optimal_paths, move_between, reconstruct, reconstruct_parallel,
    search,
};

#[test]
fn test_small_maze() {
    let grid = maze(SMALL_MAZE);
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(solution.min_cost, 7036);
    assert_eq!(solution.optimal_cells.len(), 45);
    assert!(solution.optimal_cells.contains(&grid.start().cell));
    assert!(solution.optimal_cells.contains(&grid.goal()));
}

#[test]
fn test_larger_maze() {
    let grid = maze(LARGER_MAZE);
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(solution.min_cost, 11048);
    assert_eq!(solution.optimal_cells.len(), 64);
}

#[test]
fn test_solver_answers_both_parts() {
    let solver = MazeSolver::new(maze(SMALL_MAZE), SearchConfig::default());
    assert_eq!(solver.min_cost().unwrap(), 7036);
    assert_eq!(solver.optimal_cell_count().unwrap(), 45);

    let report = solver.solve().unwrap();
    assert_eq!(report.search.min_cost(), 7036);
    assert!(report.solve_end >= report.solve_start);
}

#[test]
fn test_parallel_reconstruction_agrees() {
    for text in [SMALL_MAZE, LARGER_MAZE] {
        let result = search::solve(&maze(text), &SearchConfig::default()).unwrap();
        assert_eq!(reconstruct_parallel(&result), reconstruct(&result));
    }
}

#[test]
fn test_every_enumerated_path_costs_the_minimum() {
    let grid = maze(SMALL_MAZE);
    let config = SearchConfig::default();
    let result = search::solve(&grid, &config).unwrap();

    let paths: Vec<_> = result.paths().take(1000).collect();
    assert!(!paths.is_empty());

    let mut covered = BTreeSet::new();
    for path in &paths {
        assert_eq!(path.first(), Some(&grid.start()));
        assert_eq!(path.last().map(|s| s.cell), Some(grid.goal()));
        let moves = path
            .windows(2)
            .map(|pair| move_between(&grid, pair[0], pair[1]).expect("adjacent states"));
        assert_eq!(config.cost_of_moves(moves), 7036);
        covered.extend(path.iter().map(|s| s.cell));
    }
    assert_eq!(covered, reconstruct(&result));
}

#[test]
fn test_single_cell_grid() {
    let grid = Grid::new(
        vec![vec![true]],
        Cell::new(0, 0),
        Orientation::East,
        Cell::new(0, 0),
    )
    .unwrap();
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(solution.min_cost, 0);
    assert_eq!(solution.optimal_cells, BTreeSet::from([Cell::new(0, 0)]));
}

#[test]
fn test_start_equals_goal_in_open_room() {
    let grid = Grid::new(
        vec![vec![true; 5]; 5],
        Cell::new(2, 2),
        Orientation::South,
        Cell::new(2, 2),
    )
    .unwrap();
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(solution.min_cost, 0);
    assert_eq!(solution.optimal_cells, BTreeSet::from([Cell::new(2, 2)]));
}

#[test]
fn test_walled_in_goal_is_unreachable() {
    let grid = maze(
        "
        #######
        #S....#
        #..#..#
        #.#E#.#
        #..#..#
        #######
        ",
    );
    assert_eq!(
        find_optimal_paths(&grid, &SearchConfig::default()),
        Err(SearchError::Unreachable)
    );
}

#[test]
fn test_goal_orientations_tie() {
    // Stopping at the first goal pop would only report one side of the wall
    let grid = maze(
        "
        .....
        .S#E.
        .....
        ",
    );
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();

    assert_eq!(solution.min_cost, 3004);
    assert_eq!(solution.optimal_cells.len(), 8);
    assert!(solution.optimal_cells.contains(&Cell::new(0, 2)));
    assert!(solution.optimal_cells.contains(&Cell::new(2, 2)));
    assert!(!solution.optimal_cells.contains(&Cell::new(0, 0)));
}

#[test]
fn test_custom_costs() {
    //   S . .
    //   # # .
    //   E . .
    let grid = maze(
        "
        S..
        ##.
        E..
        ",
    );
    let config = SearchConfig::builder().move_cost(5).turn_cost(2).build();
    let solution = find_optimal_paths(&grid, &config).unwrap();

    // 6 advances and 2 right turns
    assert_eq!(solution.min_cost, 6 * 5 + 2 * 2);
    assert_eq!(solution.optimal_cells.len(), 7);
}

#[test]
fn test_start_facing_selects_route() {
    //   S . . . .
    //   . # # # .
    //   . . . . E
    let text = "
        S....
        .###.
        ....E
        ";

    // Facing East the single turn happens at the top-right corner
    let solution = find_optimal_paths(&maze(text), &SearchConfig::default()).unwrap();
    assert_eq!(solution.min_cost, 1006);
    assert_eq!(solution.optimal_cells.len(), 7);
    assert!(solution.optimal_cells.contains(&Cell::new(0, 4)));
    assert!(!solution.optimal_cells.contains(&Cell::new(2, 0)));

    // Facing South it happens at the bottom-left corner instead
    let grid = common::maze_facing(text, Orientation::South);
    let solution = find_optimal_paths(&grid, &SearchConfig::default()).unwrap();
    assert_eq!(solution.min_cost, 1006);
    assert_eq!(solution.optimal_cells.len(), 7);
    assert!(solution.optimal_cells.contains(&Cell::new(2, 0)));
    assert!(!solution.optimal_cells.contains(&Cell::new(0, 4)));
}

#[test]
fn test_extreme_turn_cost_reports_exact_route() {
    //   S .
    //   . E
    let grid = maze(
        "
        S.
        .E
        ",
    );
    let config = SearchConfig::builder().turn_cost(StepCost::MAX).build();
    let solution = find_optimal_paths(&grid, &config).unwrap();

    // Turning once at the top-right corner; the lower route turns twice
    assert_eq!(solution.min_cost, Cost::from(StepCost::MAX) + 2);
    assert_eq!(
        solution.optimal_cells,
        BTreeSet::from([Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)])
    );
}

#[test]
fn test_invalid_grids() {
    let ragged = Grid::new(
        vec![vec![true, true], vec![true, true, true]],
        Cell::new(0, 0),
        Orientation::East,
        Cell::new(1, 1),
    );
    assert!(matches!(ragged, Err(GridError::RaggedRows { row: 1, .. })));

    let blocked = Grid::from_walls(
        3,
        3,
        [Cell::new(2, 2)],
        Cell::new(0, 0),
        Orientation::East,
        Cell::new(2, 2),
    );
    assert_eq!(
        blocked,
        Err(GridError::Blocked {
            role: Endpoint::Goal,
            cell: Cell::new(2, 2)
        })
    );

    let outside = Grid::from_walls(
        3,
        3,
        Vec::<Cell>::new(),
        Cell::new(3, 0),
        Orientation::East,
        Cell::new(2, 2),
    );
    assert!(matches!(
        outside,
        Err(GridError::OutOfBounds {
            role: Endpoint::Start,
            height: 3,
            width: 3,
            ..
        })
    ));
}

#[test]
fn test_error_messages() {
    let err = GridError::Blocked {
        role: Endpoint::Start,
        cell: Cell::new(1, 1),
    };
    assert_eq!(err.to_string(), "The start cell (1, 1) is blocked");

    let err: Error = SearchError::Unreachable.into();
    assert_eq!(
        err.to_string(),
        "Search error: Goal is unreachable from the start state"
    );

    let err: Error = err_from_grid().unwrap_err();
    assert!(matches!(
        err,
        Error::InvalidGrid(GridError::OutOfBounds { .. })
    ));
}

fn err_from_grid() -> Result<(), Error> {
    let grid = Grid::from_walls(
        2,
        2,
        Vec::<Cell>::new(),
        Cell::new(0, 0),
        Orientation::East,
        Cell::new(0, 9),
    )?;
    find_optimal_paths(&grid, &SearchConfig::default())?;
    Ok(())
}
