//! Error types for board construction and search

use crate::board::Coord;
use crate::tree::NodeId;

/// Errors raised while building a board from raw cell codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board has no columns")]
    Empty,

    #[error("invalid cell code {code} at column {column}, line {line}")]
    InvalidCell { column: usize, line: usize, code: u8 },
}

/// Errors raised by the minimax search
///
/// All of these are contract violations rather than transient failures;
/// nothing here is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal moves: the board has no empty cells")]
    NoLegalMoves,

    #[error("score of node {0:?} read before it was resolved")]
    Unresolved(NodeId),

    #[error("tree already evaluated; build a fresh tree per search")]
    TreeReused,

    #[error("coordinate {0} is outside the board")]
    OutOfBounds(Coord),
}
