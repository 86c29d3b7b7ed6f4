//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }
}

/// A player in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A move target: one cell addressed by 0-indexed row and column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// Row-major cell index, valid only when both coordinates are in range
    pub fn index(self) -> usize {
        self.row * 3 + self.col
    }

    /// Action addressing the cell at a row-major index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }

    pub fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

/// Complete board state.
///
/// The side to move is never stored: it is inferred from the piece counts
/// (X moves first, so equal counts mean X to move). This type implements
/// `Copy` since it is only 9 bytes, and every transformation returns a new
/// value rather than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board (X to move)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Helper: Count pieces on the board.
    pub(crate) fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Get cell at an action's coordinates
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.index()]
    }

    /// Check if a cell is empty
    pub fn is_empty(&self, action: Action) -> bool {
        self.get(action) == Cell::Empty
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Infer the player to move from the piece counts.
    ///
    /// X moves first, so equal counts mean X is to move and X one ahead
    /// means O is to move.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidState`] if the counts cannot arise
    /// under alternating X-first play.
    pub fn to_move(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvalidState {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Get all legal moves: the empty cells in row-major order.
    ///
    /// The order is part of the contract. Callers that tie-break on the
    /// first equally-good action rely on it being stable.
    pub fn legal_moves(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Make a move for the inferred side to move and return a new board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the target cell is out of
    /// range or occupied, and [`crate::Error::InvalidState`] if the side to
    /// move cannot be inferred.
    #[must_use = "make_move returns a new board; the original is unchanged"]
    pub fn make_move(&self, action: Action) -> Result<Board, crate::Error> {
        if !action.in_bounds() || !self.is_empty(action) {
            return Err(crate::Error::InvalidMove {
                row: action.row,
                col: action.col,
            });
        }

        let mover = self.to_move()?;
        let mut next = *self;
        next.cells[action.index()] = mover.to_cell();
        Ok(next)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        lines::winner(&self.cells)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Score a finished game: +1 X won, -1 O won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; the search never calls it
    /// elsewhere.
    pub fn terminal_value(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Create a board from a string of 9 cell characters in row-major order.
    ///
    /// Whitespace is filtered out; `.` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable under alternating play
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        board.to_move()?;
        Ok(board)
    }

    /// Get the compact string representation (9 cell characters, row-major)
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.to_move().unwrap(), Player::X);
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
    }

    #[test]
    fn test_make_move() {
        let board = Board::new();

        // Valid move
        let result = board.make_move(Action::new(1, 1));
        assert!(result.is_ok());
        let new_board = result.unwrap();
        assert_eq!(new_board.cells[4], Cell::X);
        assert_eq!(new_board.to_move().unwrap(), Player::O);

        // Move on occupied cell
        let result2 = new_board.make_move(Action::new(1, 1));
        assert!(result2.is_err());
        assert!(result2.unwrap_err().to_string().contains("occupied"));
    }

    #[test]
    fn test_make_move_out_of_range() {
        let board = Board::new();
        assert!(board.make_move(Action::new(3, 0)).is_err());
        assert!(board.make_move(Action::new(0, 3)).is_err());
    }

    #[test]
    fn test_legal_moves() {
        let mut board = Board::new();
        assert_eq!(board.legal_moves().len(), 9);

        board = board.make_move(Action::new(0, 0)).unwrap();
        assert_eq!(board.legal_moves().len(), 8);
        assert!(!board.legal_moves().contains(&Action::new(0, 0)));

        board = board.make_move(Action::new(1, 1)).unwrap();
        assert_eq!(board.legal_moves().len(), 7);
        assert!(!board.legal_moves().contains(&Action::new(1, 1)));
    }

    #[test]
    fn test_legal_moves_row_major_order() {
        let board = Board::from_string("X.O......").unwrap();
        let moves = board.legal_moves();
        assert_eq!(moves[0], Action::new(0, 1));
        assert_eq!(moves[1], Action::new(1, 0));
        assert_eq!(*moves.last().unwrap(), Action::new(2, 2));
    }

    #[test]
    fn test_win_detection_horizontal() {
        let mut board = Board::new();
        // X wins on top row
        board = board.make_move(Action::new(0, 0)).unwrap(); // X
        board = board.make_move(Action::new(1, 0)).unwrap(); // O
        board = board.make_move(Action::new(0, 1)).unwrap(); // X
        board = board.make_move(Action::new(1, 1)).unwrap(); // O
        board = board.make_move(Action::new(0, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
        assert_eq!(board.terminal_value(), 1);
    }

    #[test]
    fn test_win_detection_vertical() {
        let mut board = Board::new();
        // O wins on middle column
        board = board.make_move(Action::new(0, 0)).unwrap(); // X
        board = board.make_move(Action::new(0, 1)).unwrap(); // O
        board = board.make_move(Action::new(0, 2)).unwrap(); // X
        board = board.make_move(Action::new(1, 1)).unwrap(); // O
        board = board.make_move(Action::new(1, 2)).unwrap(); // X
        board = board.make_move(Action::new(2, 1)).unwrap(); // O

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::O));
        assert_eq!(board.terminal_value(), -1);
    }

    #[test]
    fn test_win_detection_diagonal() {
        let mut board = Board::new();
        // X wins on main diagonal
        board = board.make_move(Action::new(0, 0)).unwrap(); // X
        board = board.make_move(Action::new(0, 1)).unwrap(); // O
        board = board.make_move(Action::new(1, 1)).unwrap(); // X
        board = board.make_move(Action::new(0, 2)).unwrap(); // O
        board = board.make_move(Action::new(2, 2)).unwrap(); // X

        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Player::X));
    }

    #[test]
    fn test_draw_detection() {
        // XOX / XOO / OXX
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.terminal_value(), 0);
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        assert_eq!(board.to_move().unwrap(), Player::X);

        board = board.make_move(Action::new(0, 0)).unwrap();
        assert_eq!(board.to_move().unwrap(), Player::O);

        board = board.make_move(Action::new(0, 1)).unwrap();
        assert_eq!(board.to_move().unwrap(), Player::X);

        board = board.make_move(Action::new(0, 2)).unwrap();
        assert_eq!(board.to_move().unwrap(), Player::O);
    }

    #[test]
    fn test_to_move_rejects_unreachable_counts() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::X;
        cells[1] = Cell::X;
        let board = Board { cells };

        let err = board.to_move().unwrap_err();
        assert!(err.to_string().contains("unreachable"));
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);
        assert_eq!(board.to_move().unwrap(), Player::O);

        // Invalid string length
        assert!(Board::from_string("XO").is_err());

        // Invalid character
        assert!(Board::from_string("XOZ......").is_err());

        // Unreachable counts
        assert!(Board::from_string("XXX......").is_err());
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO.......").unwrap();
        assert_eq!(board.encode(), "XO.......");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);

        let empty = Board::new();
        assert_eq!(empty.encode(), ".........");
    }

    #[test]
    fn test_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert!(display.contains("XOX"));
        assert!(display.contains(".O."));
        assert!(display.contains("X.."));
    }

    #[test]
    fn test_action_index_mapping() {
        assert_eq!(Action::new(0, 0).index(), 0);
        assert_eq!(Action::new(1, 2).index(), 5);
        assert_eq!(Action::new(2, 2).index(), 8);
        assert_eq!(Action::from_index(7), Action::new(2, 1));
    }
}
