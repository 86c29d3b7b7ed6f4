//! Play command - play a position to completion under perfect play

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    board::Board,
    cli::output::{format_board, print_section},
    game::{Game, GameOutcome},
    minimax,
};

#[derive(Parser, Debug)]
#[command(about = "Play a position to completion with both sides optimal")]
pub struct PlayArgs {
    /// Starting board (default: empty board)
    pub state: Option<String>,

    /// Export the played game history as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: PlayArgs) -> Result<()> {
    let initial = match args.state {
        Some(s) => Board::from_string(&s)?,
        None => Board::new(),
    };

    print_section("Perfect play");
    println!("{}", format_board(&initial));

    let mut game = Game::from_position(initial);
    while game.outcome.is_none() {
        let board = game.current_state()?;
        let action = match minimax::best_action(&board)? {
            Some(action) => action,
            None => break,
        };
        let player = board.to_move()?;
        game.play(action)?;

        println!("\n{player} plays {action}");
        println!("{}", format_board(&game.current_state()?));
    }

    println!();
    match game.outcome {
        Some(GameOutcome::Win(player)) => {
            println!("{player} wins after {} moves", game.moves.len());
        }
        Some(GameOutcome::Draw) => println!("Draw after {} moves", game.moves.len()),
        None => println!("No moves available"),
    }

    if let Some(path) = args.export {
        std::fs::write(&path, game.to_json()?)?;
        println!("Exported game history to {}", path.display());
    }

    Ok(())
}
