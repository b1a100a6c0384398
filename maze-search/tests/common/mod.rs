//! Shared fixtures for integration tests

#![allow(dead_code)]

use maze_search::{Cell, Grid, Orientation};

/// First published reindeer maze: best cost 7036, 45 cells on best paths
pub const SMALL_MAZE: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

/// Second published reindeer maze: best cost 11048, 64 cells on best paths
pub const LARGER_MAZE: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

/// Build a grid from ASCII art: `#` wall, `.` open, `S` start, `E` goal.
/// The start faces East.
pub fn maze(text: &str) -> Grid {
    maze_facing(text, Orientation::East)
}

pub fn maze_facing(text: &str, facing: Orientation) -> Grid {
    let mut start = None;
    let mut goal = None;
    let rows: Vec<Vec<bool>> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .enumerate()
        .map(|(row, line)| {
            line.trim()
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    match ch {
                        'S' => start = Some(Cell::new(row, col)),
                        'E' => goal = Some(Cell::new(row, col)),
                        _ => {}
                    }
                    ch != '#'
                })
                .collect()
        })
        .collect();

    Grid::new(
        rows,
        start.expect("maze has no S"),
        facing,
        goal.expect("maze has no E"),
    )
    .expect("fixture maze is valid")
}
