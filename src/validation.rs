//! Board state validation logic

use crate::{
    board::{Board, Player},
    lines,
};

impl Board {
    /// Check if the board state is reachable under alternating X-first play
    pub fn is_valid(&self) -> bool {
        let count = self.count_pieces();

        // X moves first, so X is never behind and never more than one ahead
        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false; // Both can't win
        }

        // The winner must have moved last
        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.o != count.x {
            return false;
        }

        // Multiple winning lines can only be formed by a single move, so
        // they must share a cell
        if x_wins && !Self::lines_share_cell(&lines::completed_lines(&self.cells, Player::X)) {
            return false;
        }
        if o_wins && !Self::lines_share_cell(&lines::completed_lines(&self.cells, Player::O)) {
            return false;
        }

        true
    }

    fn lines_share_cell(completed: &[[usize; 3]]) -> bool {
        if completed.len() < 2 {
            return true;
        }
        (0..9).any(|pos| completed.iter().all(|line| line.contains(&pos)))
    }

    /// Count states reachable from the empty board by legal play
    pub fn count_reachable_states() -> usize {
        let mut seen = std::collections::HashSet::new();
        let mut stack = vec![Board::new()];

        while let Some(state) = stack.pop() {
            if !seen.insert(state) {
                continue;
            }

            if !state.is_terminal() {
                for action in state.legal_moves() {
                    if let Ok(next) = state.make_move(action) {
                        stack.push(next);
                    }
                }
            }
        }

        seen.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Action, Cell};

    #[test]
    fn test_empty_board_is_valid() {
        assert!(Board::new().is_valid());
    }

    #[test]
    fn test_played_out_game_is_valid() {
        let mut board = Board::new();
        board = board.make_move(Action::new(0, 0)).unwrap(); // X
        board = board.make_move(Action::new(1, 1)).unwrap(); // O
        board = board.make_move(Action::new(0, 1)).unwrap(); // X
        assert!(board.is_valid());
    }

    #[test]
    fn test_rejects_bad_piece_counts() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::O;
        assert!(!Board { cells }.is_valid());

        cells[0] = Cell::X;
        cells[1] = Cell::X;
        assert!(!Board { cells }.is_valid());
    }

    #[test]
    fn test_rejects_double_winner() {
        // X X X
        // O O O
        // X . .
        let board = Board::from_string("XXXOOOX..").unwrap();
        assert!(!board.is_valid());
    }

    #[test]
    fn test_rejects_play_after_win() {
        // X won the top row but the counts are equal, meaning O answered
        // after the game had already ended
        let board = Board::from_string("XXXOO.O..").unwrap();
        assert!(board.has_won(Player::X));
        assert!(!board.is_valid());
    }

    #[test]
    fn test_double_line_requires_shared_cell() {
        // X X X
        // X O O
        // X O .
        // Both X lines share cell 0: formed by one move, valid shape
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        cells[2] = Cell::X;
        cells[3] = Cell::X;
        cells[4] = Cell::O;
        cells[5] = Cell::O;
        cells[6] = Cell::X;
        cells[7] = Cell::O;
        assert!(Board { cells }.is_valid());

        // X X X
        // O O .
        // X X X
        // Two disjoint X lines cannot come from a single move
        let mut cells = [Cell::Empty; 9];
        for i in [0, 1, 2, 6, 7, 8] {
            cells[i] = Cell::X;
        }
        cells[3] = Cell::O;
        cells[4] = Cell::O;
        assert!(!Board { cells }.is_valid());
    }

    #[test]
    fn test_count_reachable_states() {
        // Known result for 3x3 Tic-Tac-Toe without turn annotations
        assert_eq!(Board::count_reachable_states(), 5478);
    }
}
