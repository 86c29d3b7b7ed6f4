//! Exhaustive minimax search over the game tree.
//!
//! Each call is a fresh, self-contained traversal of the subtree rooted at
//! the given board: no memoization, no state shared across calls. The full
//! 3x3 tree is small enough (at most 9! leaf paths) that exhaustive
//! recursion completes instantly.

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// Result of evaluating a position under perfect play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Game value: +1 X wins, -1 O wins, 0 draw
    pub value: i32,
    /// Optimal action for the side to move; `None` on terminal boards
    pub action: Option<Action>,
}

/// Get the optimal action for the side to move, or `None` if the board is
/// terminal.
///
/// Among equally good actions the first in row-major enumeration order
/// wins, so the result is deterministic.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidState`] if the side to move cannot be
/// inferred from the piece counts.
pub fn best_action(board: &Board) -> crate::Result<Option<Action>> {
    Ok(evaluate(board)?.action)
}

/// Evaluate a position: the optimal action together with its game value.
///
/// X maximizes, O minimizes. Ties break to the first action in enumeration
/// order (strict comparison), and scanning stops early once the mover's
/// extremum is reached, which cannot change the outcome since the value
/// range is {-1, 0, 1}.
pub fn evaluate(board: &Board) -> crate::Result<Evaluation> {
    if board.is_terminal() {
        return Ok(Evaluation {
            value: board.terminal_value(),
            action: None,
        });
    }

    let mover = board.to_move()?;
    let mut best_value = match mover {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best = None;

    for action in board.legal_moves() {
        let child = evaluate(&board.make_move(action)?)?;

        let improved = match mover {
            Player::X => child.value > best_value,
            Player::O => child.value < best_value,
        };
        if improved {
            best_value = child.value;
            best = Some(action);
        }

        let at_extremum = match mover {
            Player::X => best_value == 1,
            Player::O => best_value == -1,
        };
        if at_extremum {
            break;
        }
    }

    Ok(Evaluation {
        value: best_value,
        action: best,
    })
}

/// Collect every equally optimal action in enumeration order.
///
/// Unlike [`evaluate`] this visits every child so the set is complete.
/// Empty on terminal boards.
pub fn optimal_actions(board: &Board) -> crate::Result<Vec<Action>> {
    if board.is_terminal() {
        return Ok(Vec::new());
    }

    let mover = board.to_move()?;
    let mut best_value = match mover {
        Player::X => i32::MIN,
        Player::O => i32::MAX,
    };
    let mut best_actions: Vec<Action> = Vec::new();

    for action in board.legal_moves() {
        let child = evaluate(&board.make_move(action)?)?;

        let improved = match mover {
            Player::X => child.value > best_value,
            Player::O => child.value < best_value,
        };
        if improved {
            best_value = child.value;
            best_actions.clear();
            best_actions.push(action);
        } else if child.value == best_value {
            best_actions.push(action);
        }
    }

    Ok(best_actions)
}
