//! Perfect-play Tic-Tac-Toe engine
//!
//! This crate provides:
//! - An immutable 3x3 board value type with turn inference
//! - Exhaustive minimax search returning provably optimal actions
//! - Board reachability validation
//! - Game history management and a CLI front end

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod validation;

pub use board::{Action, Board, Cell, Player};
pub use error::{Error, Result};
pub use game::{Game, GameOutcome, Move};
pub use lines::WINNING_LINES;
pub use minimax::{Evaluation, best_action, evaluate, optimal_actions};
