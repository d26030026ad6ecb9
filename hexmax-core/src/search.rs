//! Plain minimax over a shared, backtracked board
//!
//! No pruning, no transposition table, no iterative deepening: every empty
//! cell is expanded at every ply, in board scan order.

use serde::Serialize;

use crate::board::{Board, Coord, Player};
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::eval::{evaluate_cell, Heuristics};
use crate::moves::MoveGuard;
use crate::tree::{DecisionTree, NodeId};

// ============================================================================
// TREE EVALUATION
// ============================================================================

impl DecisionTree {
    /// Expand the root to `plies` and resolve every score in the tree
    ///
    /// The board is borrowed for the whole search and comes back with the
    /// same contents. The tree must be fresh: a root that already has
    /// children is rejected.
    pub fn evaluate(
        &mut self,
        board: &mut Board,
        plies: u32,
        player: Player,
        config: &SearchConfig,
    ) -> Result<(), SearchError> {
        if !self.is_terminal(self.root()) {
            return Err(SearchError::TreeReused);
        }
        if board.is_full() {
            return Err(SearchError::NoLegalMoves);
        }

        let occupied = board.occupied_count();
        let result = self.expand(self.root(), board, plies, player, config);
        debug_assert_eq!(board.occupied_count(), occupied);
        result
    }

    fn expand(
        &mut self,
        node: NodeId,
        board: &mut Board,
        plies: u32,
        player: Player,
        config: &SearchConfig,
    ) -> Result<(), SearchError> {
        let final_ply = plies == 0;
        self.generate_children(node, board, final_ply, &config.heuristics);

        if self.is_terminal(node) {
            tracing::warn!(
                "Board filled with {} plies left; scoring node {:?} as {}",
                plies,
                node,
                config.full_board_score
            );
            self.get_mut(node).score = Some(config.full_board_score);
            return Ok(());
        }

        for index in 0..self.children(node).len() {
            let child = self.children(node)[index];
            let movement = self.get(child).movement;

            let mut held = MoveGuard::new(board, player, movement);
            if !final_ply {
                self.expand(child, &mut held, plies - 1, player.opponent(), config)?;
            }
            self.propagate(child)?;
        }

        Ok(())
    }

    /// One child per empty cell; on the final ply each is scored immediately
    fn generate_children(&mut self, node: NodeId, board: &Board, final_ply: bool, heuristics: &Heuristics) {
        for coord in board.empty_cells() {
            if final_ply {
                let score = evaluate_cell(board, coord, heuristics);
                self.add_terminal(node, score, coord);
            } else {
                self.add(node, coord);
            }
        }
    }

    /// Fold a resolved child's score into its parent
    ///
    /// Opponent moves raise the parent's score, own moves lower it. Ties keep
    /// the earlier child.
    fn propagate(&mut self, child: NodeId) -> Result<(), SearchError> {
        let score = self.score(child)?;
        let node = self.get(child);
        let Some(parent) = node.parent else {
            return Ok(());
        };

        let adopt = match self.get(parent).score {
            None => true,
            Some(current) if node.mover_is_opponent => score > current,
            Some(current) => score < current,
        };

        if adopt {
            tracing::trace!("{:?} takes {} from {:?}", parent, score, child);
            self.get_mut(parent).score = Some(score);
        }

        Ok(())
    }
}

// ============================================================================
// MINIMAX PLAYER
// ============================================================================

/// Result of a top-level search
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    /// Chosen move
    pub movement: Coord,
    /// Root score backing the choice
    pub score: i32,
    /// Nodes built, root included
    pub nodes: usize,
    /// Root children with their scores, in scan order
    pub candidates: Vec<(Coord, Option<i32>)>,
}

/// Minimax player
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Build and fully evaluate a fresh tree for `player` to move
    pub fn search(&self, board: &mut Board, player: Player) -> Result<DecisionTree, SearchError> {
        let mut tree = DecisionTree::new();
        tree.evaluate(board, self.config.plies, player, &self.config)?;
        Ok(tree)
    }

    /// Get best move for `player` on `board`
    pub fn best_move(&self, board: &mut Board, player: Player) -> Result<SearchOutcome, SearchError> {
        let tree = self.search(board, player)?;
        let movement = tree.best_move()?;
        let score = tree.score(tree.root())?;

        tracing::debug!(
            "Searched {} nodes at {} plies for {:?}: {} scores {}",
            tree.len(),
            self.config.plies,
            player,
            movement,
            score
        );

        Ok(SearchOutcome {
            movement,
            score,
            nodes: tree.len(),
            candidates: tree.child_scores(tree.root()),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
