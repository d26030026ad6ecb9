//! HEXMAX CLI - Command-line interface
//!
//! Commands:
//! - best-move: Search a board and print the chosen move
//! - neighbors: Show the adjacency of one cell

mod best_move;
mod neighbors_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "hexmax")]
#[command(about = "HEXMAX minimax move picker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a board and print the best move
    BestMove(best_move::BestMoveArgs),
    /// Print the neighbours of a cell
    Neighbors(neighbors_cmd::NeighborsArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr, so --json output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BestMove(args) => best_move::run(args),
        Commands::Neighbors(args) => neighbors_cmd::run(args),
    }
}
