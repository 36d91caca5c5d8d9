//! # connect-four-mcts
//!
//! A Connect Four engine and Monte Carlo Tree Search AI: a bitboard rules
//! core, a mutable game session built on top of it, and an MCTS player
//! that searches the session's legal moves under an iteration or
//! wall-clock budget.
//!
//! ## Basic usage
//!
//! ```
//! use connect_four_mcts::{Budget, GameSession, Mcts, MctsConfig};
//!
//! let mut session = GameSession::new();
//! let mut mcts = Mcts::new(MctsConfig::default().with_seed(42));
//!
//! let column = mcts
//!     .search(&session.look().history, Budget::Iterations(200))
//!     .expect("opening position always has legal moves");
//! session.play(column).expect("search only returns legal columns");
//!
//! println!("{}", mcts.statistics().summary());
//! ```
//!
//! ## How it works
//!
//! Each call to [`Mcts::search`] runs four phases per iteration, over a
//! search tree represented as a [`tree::Zipper`]:
//!
//! 1. **Selection**: descend from the root while every child has been
//!    visited at least once, picking the child that maximizes a UCT score.
//! 2. **Expansion**: attach a child for every legal move from the first
//!    not-yet-fully-expanded node reached, then descend into one that has
//!    never been visited.
//! 3. **Simulation**: play uniformly random moves from there to a
//!    terminal result.
//! 4. **Backpropagation**: credit that result to every node from the
//!    simulated leaf back up to the root.
//!
//! Repeating this many times gradually concentrates visits on the
//! strongest moves; the column with the most root-level visits is
//! returned as the search's answer.

pub mod board;
pub mod config;
pub mod error;
pub mod mcts;
pub mod session;
pub mod stats;
pub mod tree;

pub use board::{Board, Color, Column, Outcome};
pub use config::MctsConfig;
pub use error::{ConnectFourError, Result};
pub use mcts::{Budget, Mcts};
pub use session::{GameSession, Snapshot};
pub use stats::SearchStatistics;
pub use tree::{Node, Zipper};
