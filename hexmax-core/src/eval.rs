//! Static evaluation of a candidate cell

use serde::{Deserialize, Serialize};

use crate::adjacency::neighbors;
use crate::board::{Board, Cell, Coord, Player};

/// Per-neighbour weights for the leaf heuristic
///
/// Scores are always from player One's point of view, whoever is searching.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heuristics {
    /// Contribution of an empty neighbour
    pub empty_weight: i32,
    /// Contribution of a neighbour held by player One
    pub player_one_weight: i32,
    /// Contribution of a neighbour held by player Two
    pub player_two_weight: i32,
}

impl Default for Heuristics {
    fn default() -> Self {
        Self {
            empty_weight: 10,
            player_one_weight: 20,
            player_two_weight: -50,
        }
    }
}

impl Heuristics {
    pub fn weight(&self, cell: Cell) -> i32 {
        match cell {
            Cell::Empty => self.empty_weight,
            Cell::Taken(Player::One) => self.player_one_weight,
            Cell::Taken(Player::Two) => self.player_two_weight,
        }
    }
}

/// Score occupying `coord` by summing the weights of its neighbours
///
/// The sum saturates at the `i32` bounds instead of wrapping.
pub fn evaluate_cell(board: &Board, coord: Coord, heuristics: &Heuristics) -> i32 {
    neighbors(board, coord)
        .into_iter()
        .map(|n| heuristics.weight(board.cell(n)))
        .fold(0i32, i32::saturating_add)
}
