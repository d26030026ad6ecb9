//! Search configuration

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::eval::Heuristics;

/// Minimax search configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched below the root's children (0 scores the root's
    /// children directly with the heuristic)
    pub plies: u32,
    /// Leaf heuristic weights
    pub heuristics: Heuristics,
    /// Score given to a node whose board filled up before its ply budget ran out
    pub full_board_score: i32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            plies: 1,
            heuristics: Heuristics::default(),
            full_board_score: 0,
        }
    }
}

impl SearchConfig {
    pub fn with_plies(mut self, plies: u32) -> Self {
        self.plies = plies;
        self
    }

    pub fn with_heuristics(mut self, heuristics: Heuristics) -> Self {
        self.heuristics = heuristics;
        self
    }

    pub fn with_full_board_score(mut self, score: i32) -> Self {
        self.full_board_score = score;
        self
    }

    /// Load from a JSON file; missing fields take their defaults
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read search config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse search config: {}", path.display()))?;
        Ok(config)
    }
}
