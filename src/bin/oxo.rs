//! oxo CLI - perfect-play Tic-Tac-Toe solver
//!
//! This CLI provides a front door to the minimax engine:
//! - Solving arbitrary positions
//! - Playing positions out under perfect play
//! - Analyzing the game tree

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play Tic-Tac-Toe solver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a position and report the optimal action
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play a position to completion with both sides optimal
    Play(oxo::cli::commands::play::PlayArgs),

    /// Analyze the game tree and opening moves
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::run(args),
        Commands::Play(args) => oxo::cli::commands::play::run(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::run(args),
    }
}
