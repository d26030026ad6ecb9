//! Neighbors command - print the adjacency of one cell

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use hexmax_core::adjacency::neighbors_with_direction;
use hexmax_core::{evaluate_cell, Board, Coord, Heuristics};

#[derive(Args)]
pub struct NeighborsArgs {
    /// Board JSON file
    #[arg(long, value_name = "FILE")]
    pub board: PathBuf,

    #[arg(long)]
    pub column: usize,

    #[arg(long)]
    pub line: usize,
}

pub fn run(args: NeighborsArgs) -> Result<()> {
    let board = Board::load(&args.board)?;
    let coord = Coord::new(args.column, args.line);
    board.require(coord)?;

    for (direction, target) in neighbors_with_direction(&board, coord) {
        println!("{:?}: {} = {}", direction, target, board.cell(target).code());
    }
    println!("heuristic: {}", evaluate_cell(&board, coord, &Heuristics::default()));

    Ok(())
}
