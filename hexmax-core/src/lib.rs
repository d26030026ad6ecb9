//! HEXMAX Core - Minimax move selection for a hex connection game
//!
//! This crate provides:
//! - Board model (ragged columns of cells)
//! - Hex adjacency with pivot columns
//! - Neighbourhood heuristic for leaf scoring
//! - Backtracking move application
//! - Arena decision tree and plain (unpruned) minimax

pub mod board;
pub mod adjacency;
pub mod eval;
pub mod moves;
pub mod tree;
pub mod search;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Board, Cell, Coord, Player};
pub use adjacency::{neighbors, Direction, DIRECTIONS, LEFT_PIVOT, RIGHT_PIVOT};
pub use eval::{evaluate_cell, Heuristics};
pub use moves::{apply, revert, MoveGuard};
pub use tree::{DecisionNode, DecisionTree, NodeId};
pub use search::{Minimax, SearchOutcome};
pub use config::SearchConfig;
pub use error::{BoardError, SearchError};
