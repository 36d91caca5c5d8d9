//! Error taxonomy shared by the board engine, game session, search tree,
//! and MCTS engine.
//!
//! Every fallible operation in this crate returns one of these variants
//! instead of panicking. The one exception is an internal invariant that
//! the search itself would have to violate to trigger (e.g. computing UCT
//! for a child with zero visits); those are programming errors and are
//! reported with `expect()` rather than threaded through `Result`.

use crate::board::Column;

/// Errors produced by the board engine, game session, search tree, and
/// MCTS engine.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectFourError {
    /// A move was played into a full column or an out-of-range column.
    #[error("illegal move: column {0} is not playable")]
    IllegalMove(Column),

    /// A move was submitted after the game already reached a terminal result.
    #[error("game is already over")]
    GameOver,

    /// A supplied history contains an illegal move, or ends the game before
    /// its last entry. The session is left unchanged.
    #[error("supplied history is not a valid game")]
    InvalidGame,

    /// Tree navigation asked for a child index that doesn't exist.
    #[error("child index {index} out of bounds (have {len} children)")]
    OutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of children actually present.
        len: usize,
    },

    /// Tree navigation asked to descend from a focus with no children.
    #[error("cannot descend: focus has no children")]
    NoChildren,

    /// `search` was invoked with a non-positive budget.
    #[error("search budget must be positive")]
    BudgetInvalid,
}

/// Result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ConnectFourError>;
