//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board, row-major
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Check if a player has three in a row
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}

/// Get the winner, if there is one.
///
/// A board reachable under alternating play has at most one winner, so the
/// scan order does not matter.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    if has_won(cells, Player::X) {
        Some(Player::X)
    } else if has_won(cells, Player::O) {
        Some(Player::O)
    } else {
        None
    }
}

/// Collect every completed line for a player
pub fn completed_lines(cells: &[Cell; 9], player: Player) -> Vec<[usize; 3]> {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .filter(|line| line.iter().all(|&idx| cells[idx] == target))
        .copied()
        .collect()
}
