//! Bitboard rules engine for Connect Four.
//!
//! A position is two 49-bit bitboards (one per color) plus per-column
//! height counters, following Tromp's layout: for column `c` and row `r`
//! (`r = 0` at the bottom), the bit index is `7*c + r`. Row 6 of each
//! column is a guard bit that is always zero in a valid position; its
//! presence prevents horizontal and diagonal shifts from wrapping between
//! columns during four-in-a-row detection.

use crate::error::ConnectFourError;

/// A column index, 0 (leftmost) through 6.
pub type Column = u8;

/// Number of columns on the board.
pub const COLUMNS: usize = 7;
/// Number of playable rows per column (row 6 is the guard row).
pub const ROWS: usize = 6;
/// Total number of moves in a full, undrawn game.
pub const MAX_PLIES: u32 = 42;

/// Base bit index of each column (row 0 of that column).
const BASES: [u32; COLUMNS] = [0, 7, 14, 21, 28, 35, 42];

/// Direction offsets for four-in-a-row detection: vertical, horizontal,
/// `/` diagonal, `\` diagonal.
const DIRECTIONS: [u32; 4] = [1, 7, 6, 8];

/// The color of a piece, or the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Moves first.
    Yellow,
    Red,
}

impl Color {
    fn index(self) -> usize {
        match self {
            Color::Yellow => 0,
            Color::Red => 1,
        }
    }

    /// The other color.
    pub fn opponent(self) -> Color {
        match self {
            Color::Yellow => Color::Red,
            Color::Red => Color::Yellow,
        }
    }
}

/// The terminal status of a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// The game is still in progress.
    #[default]
    None,
    YellowWins,
    RedWins,
    Draw,
}

impl Outcome {
    /// True if the position is terminal.
    pub fn is_terminal(self) -> bool {
        self != Outcome::None
    }
}

/// A Connect Four position: two bitboards, column heights, move history,
/// ply count, and the (possibly terminal) result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    bitboards: [u64; 2],
    heights: [u32; COLUMNS],
    history: Vec<Column>,
    plies: u32,
    result: Outcome,
}

impl Default for Board {
    fn default() -> Self {
        Board {
            bitboards: [0, 0],
            heights: BASES,
            history: Vec::new(),
            plies: 0,
            result: Outcome::None,
        }
    }
}

impl Board {
    /// The empty starting position.
    pub fn new() -> Self {
        Board::default()
    }

    /// The move history played to reach this position.
    pub fn history(&self) -> &[Column] {
        &self.history
    }

    /// The number of plies (half-moves) played.
    pub fn plies(&self) -> u32 {
        self.plies
    }

    /// The terminal result of this position, or `Outcome::None` if the
    /// game is still in progress.
    pub fn result(&self) -> Outcome {
        self.result
    }

    /// The color to move. Yellow moves first, so Yellow is to move
    /// whenever an even number of plies have been played.
    pub fn to_move(&self) -> Color {
        if self.plies % 2 == 0 {
            Color::Yellow
        } else {
            Color::Red
        }
    }

    /// Every column whose top playable row is not yet occupied, in
    /// ascending order. Empty iff the position is terminal.
    pub fn legal_moves(&self) -> Vec<Column> {
        (0..COLUMNS as Column)
            .filter(|&c| self.is_legal(c))
            .collect()
    }

    fn is_legal(&self, column: Column) -> bool {
        (column as usize) < COLUMNS
            && self.heights[column as usize] < BASES[column as usize] + ROWS as u32
    }

    /// Drops a piece for the color to move into `column`, returning the
    /// resulting position.
    ///
    /// Fails with `GameOver` if the position is already terminal, or
    /// `IllegalMove` if the column is out of range or full.
    pub fn apply_move(&self, column: Column) -> Result<Board, ConnectFourError> {
        if self.result.is_terminal() {
            return Err(ConnectFourError::GameOver);
        }
        if !self.is_legal(column) {
            return Err(ConnectFourError::IllegalMove(column));
        }

        let mover = self.to_move();
        let mut next = self.clone();
        let bit = 1u64 << next.heights[column as usize];
        next.bitboards[mover.index()] |= bit;
        next.heights[column as usize] += 1;
        next.history.push(column);
        next.plies += 1;
        next.result = next.result_after(mover);
        Ok(next)
    }

    fn result_after(&self, mover: Color) -> Outcome {
        if self.has_connected_four(mover) {
            match mover {
                Color::Yellow => Outcome::YellowWins,
                Color::Red => Outcome::RedWins,
            }
        } else if self.plies == MAX_PLIES {
            Outcome::Draw
        } else {
            Outcome::None
        }
    }

    /// Whether `color`'s bitboard contains four connected bits in any of
    /// the four directions, via the shifted-AND trick:
    /// `x = b & (b >> d); win = (x & (x >> 2d)) != 0`.
    fn has_connected_four(&self, color: Color) -> bool {
        let b = self.bitboards[color.index()];
        DIRECTIONS.iter().any(|&d| {
            let x = b & (b >> d);
            (x & (x >> (2 * d))) != 0
        })
    }
}
