//! Solve command - evaluate a position and report the optimal action

use std::{fs::File, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::{Action, Board, Player},
    cli::output::{format_board, print_kv, print_section},
    minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Evaluate a position and report the optimal action")]
pub struct SolveArgs {
    /// Board as 9 cell characters in row-major order ('.', 'X', 'O')
    pub state: String,

    /// Print every equally optimal action, not just the first
    #[arg(long)]
    pub all: bool,

    /// Export the evaluation as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// JSON export shape for a solved position
#[derive(Debug, Serialize)]
struct SolveReport {
    state: String,
    to_move: Option<Player>,
    value: i32,
    best: Option<Action>,
    optimal: Vec<Action>,
}

pub fn run(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;

    print_section("Position");
    println!("{}", format_board(&board));

    let evaluation = minimax::evaluate(&board)?;
    let optimal = minimax::optimal_actions(&board)?;

    println!();
    if board.is_terminal() {
        let verdict = match board.winner() {
            Some(player) => format!("{player} has won"),
            None => "draw".to_string(),
        };
        print_kv("Status", &format!("terminal ({verdict})"));
        print_kv("Value", &evaluation.value.to_string());
    } else {
        let to_move = board.to_move()?;
        print_kv("To move", &to_move.to_string());
        print_kv("Value", &describe_value(evaluation.value));
        if let Some(action) = evaluation.action {
            print_kv("Best action", &action.to_string());
        }
        if args.all {
            let all: Vec<String> = optimal.iter().map(|a| a.to_string()).collect();
            print_kv("Optimal set", &all.join(", "));
        }
    }

    if let Some(path) = args.export {
        let report = SolveReport {
            state: board.encode(),
            to_move: board.to_move().ok(),
            value: evaluation.value,
            best: evaluation.action,
            optimal,
        };
        serde_json::to_writer_pretty(File::create(&path)?, &report)?;
        println!("\nExported evaluation to {}", path.display());
    }

    Ok(())
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "+1 (X wins with perfect play)".to_string(),
        -1 => "-1 (O wins with perfect play)".to_string(),
        _ => "0 (draw with perfect play)".to_string(),
    }
}
