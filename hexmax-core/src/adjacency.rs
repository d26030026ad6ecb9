//! Hex adjacency on a column-major board
//!
//! The board is drawn as a hexagon of columns whose heights grow up to the
//! middle column and shrink after it. Diagonal neighbours therefore shift by
//! one line depending on which side of the middle a column sits:
//!
//! - right-hand diagonals change formula from column [`RIGHT_PIVOT`] on
//! - left-hand diagonals change formula from column [`LEFT_PIVOT`] on
//!
//! Every candidate is bounds-checked against the actual board, so ragged or
//! rectangular boards are handled as well.

use crate::board::{Board, Coord};

/// First column whose right-hand diagonals lean upwards
pub const RIGHT_PIVOT: usize = 5;

/// First column whose left-hand diagonals lean downwards
pub const LEFT_PIVOT: usize = 6;

/// The six neighbour directions, in the order they are reported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    DownLeft,
    UpLeft,
    Up,
    UpRight,
    DownRight,
}

pub const DIRECTIONS: [Direction; 6] = [
    Direction::Down,
    Direction::DownLeft,
    Direction::UpLeft,
    Direction::Up,
    Direction::UpRight,
    Direction::DownRight,
];

impl Direction {
    /// Raw target of one step from `coord`, before the board bounds check.
    /// `None` when the step would leave the grid through column or line 0.
    fn step(self, coord: Coord) -> Option<Coord> {
        let Coord { column, line } = coord;
        let (column, line) = match self {
            Direction::Down => (column, line + 1),
            Direction::Up => (column, line.checked_sub(1)?),
            Direction::DownLeft if column < LEFT_PIVOT => (column.checked_sub(1)?, line),
            Direction::DownLeft => (column - 1, line + 1),
            Direction::UpLeft if column < LEFT_PIVOT => {
                (column.checked_sub(1)?, line.checked_sub(1)?)
            }
            Direction::UpLeft => (column - 1, line),
            Direction::UpRight if column < RIGHT_PIVOT => (column + 1, line),
            Direction::UpRight => (column + 1, line.checked_sub(1)?),
            Direction::DownRight if column < RIGHT_PIVOT => (column + 1, line + 1),
            Direction::DownRight => (column + 1, line),
        };
        Some(Coord::new(column, line))
    }
}

/// Neighbour of `coord` in `direction`, if it is on the board
pub fn neighbor(board: &Board, coord: Coord, direction: Direction) -> Option<Coord> {
    direction.step(coord).filter(|&target| board.contains(target))
}

/// Neighbours of `coord` paired with the direction they lie in
pub fn neighbors_with_direction(board: &Board, coord: Coord) -> Vec<(Direction, Coord)> {
    DIRECTIONS
        .iter()
        .filter_map(|&direction| neighbor(board, coord, direction).map(|c| (direction, c)))
        .collect()
}

/// Neighbours of `coord`: between 0 and 6 in-bounds coordinates, never `coord` itself
pub fn neighbors(board: &Board, coord: Coord) -> Vec<Coord> {
    DIRECTIONS
        .iter()
        .filter_map(|&direction| neighbor(board, coord, direction))
        .collect()
}
