//! High-level game management

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A complete game with history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_position(Board::new())
    }

    /// Create a game starting from an arbitrary position.
    ///
    /// A position that is already finished gets its outcome recorded right
    /// away, so `play` rejects further moves.
    pub fn from_position(initial: Board) -> Self {
        let outcome = if initial.is_terminal() {
            Some(match initial.winner() {
                Some(winner) => GameOutcome::Win(winner),
                None => GameOutcome::Draw,
            })
        } else {
            None
        };

        Game {
            initial,
            moves: Vec::new(),
            outcome,
        }
    }

    /// Play a move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once an outcome has been reached,
    /// and propagates [`crate::Error::InvalidMove`] for illegal targets.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let player = current.to_move()?;
        let new_state = current.make_move(action)?;

        self.moves.push(Move { action, player });

        if new_state.is_terminal() {
            self.outcome = Some(if let Some(winner) = new_state.winner() {
                GameOutcome::Win(winner)
            } else {
                GameOutcome::Draw
            });
        }

        Ok(())
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the current
    /// state. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        let mut state = self.initial;
        for m in self.moves.iter().take(end_index) {
            state = state.make_move(m.action)?;
        }
        Ok(state)
    }

    /// Get the current board state by replaying the history
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Get the sequence of board states from the initial position onward
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        states.push(self.initial);

        for i in 1..=self.moves.len() {
            states.push(self.replay_moves_until(i)?);
        }

        Ok(states)
    }

    /// Serialize the game history to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, crate::Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize a game history from JSON
    pub fn from_json(s: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(s)?)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
