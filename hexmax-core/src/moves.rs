//! Placing and lifting stones on the shared search board

use std::ops::{Deref, DerefMut};

use crate::board::{Board, Cell, Coord, Player};

/// Place `player`'s stone on `coord`
///
/// No legality check: callers only hand in cells that are currently empty.
///
/// # Panics
/// If `coord` is outside the board.
pub fn apply(board: &mut Board, player: Player, coord: Coord) {
    debug_assert!(board.cell(coord).is_empty(), "apply onto occupied cell {}", coord);
    board.set(coord, Cell::Taken(player));
}

/// Clear `coord` back to empty
///
/// # Panics
/// If `coord` is outside the board.
pub fn revert(board: &mut Board, coord: Coord) {
    board.set(coord, Cell::Empty);
}

/// A move held on the board for as long as the guard lives
///
/// The move is applied on construction and reverted on drop, so the board is
/// restored on every exit path out of the scope that owns the guard,
/// including `?` returns and unwinding. The guard derefs to the board so the
/// search can keep descending through it.
pub struct MoveGuard<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> MoveGuard<'a> {
    pub fn new(board: &'a mut Board, player: Player, coord: Coord) -> Self {
        apply(board, player, coord);
        Self { board, coord }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        revert(self.board, self.coord);
    }
}
