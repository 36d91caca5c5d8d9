//! A mutable, stateful session around the [`Board`] engine.
//!
//! `GameSession` is the interface the MCTS engine drives during playouts:
//! it can accept moves one at a time or as a batch, report the current
//! outcome, and be reset to the empty position, all without the caller
//! having to understand the board's internal bitboard representation.

use crate::board::{Board, Column, Outcome};
use crate::error::{ConnectFourError, Result};

/// A read-only view of a session's current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The move history played so far.
    pub history: Vec<Column>,
    /// The current (possibly terminal) result.
    pub result: Outcome,
}

/// A mutable Connect Four game, sequencing moves into a [`Board`].
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A new session at the empty starting position.
    pub fn new() -> Self {
        GameSession { board: Board::new() }
    }

    /// A new session loaded with `history`, equivalent to `new()` followed
    /// by `play_many(history)`. Fails with `InvalidGame` if any move in
    /// `history` is illegal.
    pub fn new_with_history(history: &[Column]) -> Result<Self> {
        let mut session = Self::new();
        session.play_many(history)?;
        Ok(session)
    }

    /// Plays a single move for the color to move.
    ///
    /// Fails with `GameOver` if the game already ended, or `IllegalMove`
    /// if `column` is full or out of range. On failure the session is
    /// left unchanged.
    pub fn play(&mut self, column: Column) -> Result<Snapshot> {
        let next = self.board.apply_move(column)?;
        self.board = next;
        log::trace!("played column {column}, plies={}", self.board.plies());
        Ok(self.look())
    }

    /// Plays every move in `columns` in order, atomically: if any move is
    /// illegal, or the game ends before the last supplied move (so a later
    /// move can't be applied), the session is left unchanged and this
    /// fails with `InvalidGame`. Ending exactly at the last supplied move
    /// is fine.
    pub fn play_many(&mut self, columns: &[Column]) -> Result<Snapshot> {
        let mut trial = self.board.clone();
        for &column in columns {
            trial = trial
                .apply_move(column)
                .map_err(|_| ConnectFourError::InvalidGame)?;
        }
        self.board = trial;
        Ok(self.look())
    }

    /// The columns currently playable.
    pub fn legal_moves(&self) -> Vec<Column> {
        self.board.legal_moves()
    }

    /// A non-mutating snapshot of the current history and result.
    pub fn look(&self) -> Snapshot {
        Snapshot {
            history: self.board.history().to_vec(),
            result: self.board.result(),
        }
    }

    /// Resets the session to the empty starting position, discarding any
    /// current state.
    pub fn reset(&mut self) {
        self.board = Board::new();
    }
}
