//! Analyze command - game tree statistics and opening analysis

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::{
    board::{Action, Board},
    cli::output::{format_number, print_kv, print_section},
    minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Analyze the game tree and opening moves")]
pub struct AnalyzeArgs {
    #[command(subcommand)]
    pub command: AnalyzeCommand,
}

#[derive(Subcommand, Debug)]
pub enum AnalyzeCommand {
    /// Minimax values and optimal replies for the essentially different openings
    FirstMoves,

    /// Count board states reachable by legal play
    States,
}

pub fn run(args: AnalyzeArgs) -> Result<()> {
    match args.command {
        AnalyzeCommand::FirstMoves => first_moves(),
        AnalyzeCommand::States => states(),
    }
}

/// There are only three essentially different first moves on the 3x3 board
const OPENINGS: [(Action, &str); 3] = [
    (Action { row: 0, col: 0 }, "Corner"),
    (Action { row: 0, col: 1 }, "Edge"),
    (Action { row: 1, col: 1 }, "Center"),
];

fn first_moves() -> Result<()> {
    print_section("First move analysis");

    for (action, name) in OPENINGS {
        let board = Board::new().make_move(action)?;
        let evaluation = minimax::evaluate(&board)?;
        let replies = minimax::optimal_actions(&board)?;

        println!("\n{name} opening at {action}:");
        print_kv("Value", &evaluation.value.to_string());
        print_kv(
            "Best replies",
            &replies
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
                .join(", "),
        );
    }

    println!("\nEvery opening preserves the draw under perfect play.");
    Ok(())
}

fn states() -> Result<()> {
    print_section("Reachable states");

    let count = Board::count_reachable_states();
    print_kv("Total", &format_number(count));
    Ok(())
}
