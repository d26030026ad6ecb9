//! Best-move command - search one board and report the chosen move
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_inputs(), report_outcome()
//! - Level 3: build_config()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use hexmax_core::{Board, Minimax, Player, SearchConfig, SearchOutcome};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BestMoveArgs {
    /// Board JSON file (nested arrays of 0/1/2 cell codes)
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    /// Plies searched below the candidate moves (overrides the config file)
    #[arg(long)]
    pub plies: Option<u32>,

    /// Player to move (1 or 2)
    #[arg(long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=2))]
    pub player: u8,

    /// Search config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run best-move command
///
/// 1. Load board and config
/// 2. Search
/// 3. Report the outcome
pub fn run(args: BestMoveArgs) -> Result<()> {
    let (mut board, config) = load_inputs(&args)?;
    let player = Player::from_code(args.player).context("Player must be 1 or 2")?;

    tracing::info!(
        "Searching {} columns at {} plies for {:?}",
        board.columns(),
        config.plies,
        player
    );

    let outcome = Minimax::new(config)
        .best_move(&mut board, player)
        .context("Search failed")?;

    report_outcome(&outcome, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_inputs(args: &BestMoveArgs) -> Result<(Board, SearchConfig)> {
    let board = Board::load(&args.board)?;
    let config = build_config(args)?;
    Ok((board, config))
}

fn report_outcome(outcome: &SearchOutcome, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(outcome)?);
    } else {
        println!("{}", format_outcome(outcome));
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Config file if given, then the --plies override
fn build_config(args: &BestMoveArgs) -> Result<SearchConfig> {
    let config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    Ok(match args.plies {
        Some(plies) => config.with_plies(plies),
        None => config,
    })
}

// ============================================================================
// LEVEL 4 - FORMATTING
// ============================================================================

fn format_outcome(outcome: &SearchOutcome) -> String {
    let mut lines = vec![format!(
        "Best move: column {}, line {} (score {}, {} nodes)",
        outcome.movement.column, outcome.movement.line, outcome.score, outcome.nodes
    )];
    for (coord, score) in &outcome.candidates {
        let score = score.map_or_else(|| "-".to_string(), |s| s.to_string());
        lines.push(format!("  {} {}", coord, score));
    }
    lines.join("\n")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hexmax_core::Coord;

    fn args(plies: Option<u32>) -> BestMoveArgs {
        BestMoveArgs {
            board: PathBuf::from("board.json"),
            plies,
            player: 1,
            config: None,
            json: false,
        }
    }

    #[test]
    fn test_build_config_defaults() {
        let config = build_config(&args(None)).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_build_config_plies_override() {
        let config = build_config(&args(Some(3))).unwrap();
        assert_eq!(config.plies, 3);
    }

    #[test]
    fn test_build_config_missing_file() {
        let mut a = args(None);
        a.config = Some(PathBuf::from("/nonexistent/config.json"));
        assert!(build_config(&a).is_err());
    }

    #[test]
    fn test_format_outcome() {
        let outcome = SearchOutcome {
            movement: Coord::new(0, 1),
            score: 20,
            nodes: 4,
            candidates: vec![(Coord::new(0, 0), Some(10)), (Coord::new(0, 1), Some(20))],
        };
        assert_eq!(
            format_outcome(&outcome),
            "Best move: column 0, line 1 (score 20, 4 nodes)\n  (0, 0) 10\n  (0, 1) 20"
        );
    }
}
