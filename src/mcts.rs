//! The Monte Carlo Tree Search engine: the four-phase iteration of
//! selection, expansion, simulation, and backpropagation, driven over the
//! zipper-based search tree in [`crate::tree`] and the rules engine in
//! [`crate::session`].

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::board::{Color, Column, Outcome};
use crate::config::MctsConfig;
use crate::error::{ConnectFourError, Result};
use crate::session::GameSession;
use crate::stats::SearchStatistics;
use crate::tree::{Node, Zipper};

/// How long a search is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    /// Stop after this much wall-clock time has elapsed.
    Time(Duration),
    /// Stop after this many iterations.
    Iterations(u64),
}

impl Budget {
    fn is_valid(self) -> bool {
        match self {
            Budget::Time(duration) => !duration.is_zero(),
            Budget::Iterations(n) => n > 0,
        }
    }
}

/// A Monte Carlo Tree Search engine for Connect Four.
///
/// `Mcts` owns the configuration and the random number generator used for
/// expansion and rollouts; the search tree itself is rebuilt fresh for
/// every call to [`Mcts::search`], since tree reuse across moves is out of
/// scope.
pub struct Mcts {
    config: MctsConfig,
    rng: StdRng,
    statistics: SearchStatistics,
}

impl Mcts {
    /// A new engine with the given configuration. If `config.seed` is
    /// set, the search is reproducible; otherwise the RNG is seeded from
    /// entropy.
    pub fn new(config: MctsConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Mcts {
            config,
            rng,
            statistics: SearchStatistics::new(),
        }
    }

    /// The statistics gathered during the most recent call to `search`.
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Searches from the position reached by `history` and returns the
    /// column judged best by total visit count.
    ///
    /// Fails with `BudgetInvalid` if `budget` is non-positive, or
    /// `InvalidGame` if `history` is not a legal sequence of moves, or
    /// `GameOver` if the position reached by `history` is already
    /// terminal.
    pub fn search(&mut self, history: &[Column], budget: Budget) -> Result<Column> {
        if !budget.is_valid() {
            return Err(ConnectFourError::BudgetInvalid);
        }

        let mut session = GameSession::new_with_history(history)?;
        if session.look().result.is_terminal() {
            return Err(ConnectFourError::GameOver);
        }

        log::debug!("starting search from {} plies with {:?}", history.len(), budget);

        self.statistics = SearchStatistics::new();
        let mut zipper = Zipper::new(Node::new(history.to_vec()));
        let start = Instant::now();
        let mut iterations: u64 = 0;

        loop {
            match budget {
                Budget::Iterations(n) if iterations >= n => break,
                Budget::Time(duration) if start.elapsed() >= duration => {
                    self.statistics.stopped_early = true;
                    break;
                }
                _ => {}
            }

            self.run_iteration(&mut zipper, &mut session);
            iterations += 1;
        }

        self.statistics.iterations = iterations;
        self.statistics.total_time = start.elapsed();
        self.statistics.tree_size = count_nodes(zipper.focus());
        self.statistics.max_depth = max_depth(zipper.focus());

        let column = self.best_root_child(&zipper)?;
        log::debug!("search chose column {column} after {iterations} iterations");
        Ok(column)
    }

    /// One full selection/expansion/simulation/backpropagation cycle.
    fn run_iteration(&mut self, zipper: &mut Zipper, session: &mut GameSession) {
        session.reset();
        session
            .play_many(&zipper.focus().state)
            .expect("zipper state is always a legal history");

        let mut outcome = session.look().result;

        // Selection: descend while the focus is fully expanded.
        while outcome == Outcome::None && zipper.focus().expanded {
            let index = self.select_child_index(zipper.focus());
            let column = zipper.focus().children[index]
                .state
                .last()
                .copied()
                .expect("child state always has at least one more move than its parent");
            zipper.down(index).expect("selected index is within bounds");
            outcome = session
                .play(column)
                .expect("zipper state is always a legal history")
                .result;
        }

        // Expansion + simulation. A node's first visit only attaches its
        // children and rolls out from the node's own position; descending
        // into a specific unvisited child happens on a later visit to the
        // same node, once its children already exist.
        if outcome == Outcome::None {
            if zipper.focus().children.is_empty() {
                let children = session
                    .legal_moves()
                    .into_iter()
                    .map(|column| {
                        let mut state = zipper.focus().state.clone();
                        state.push(column);
                        Node::new(state)
                    })
                    .collect();
                zipper.replace_children(children);
            } else {
                let unvisited = (0..zipper.focus().children.len())
                    .filter(|&i| zipper.focus().children[i].visits == 0)
                    .choose(&mut self.rng)
                    .expect("a not-fully-expanded node always has an unvisited child");
                let column = zipper.focus().children[unvisited]
                    .state
                    .last()
                    .copied()
                    .expect("child state always has at least one more move than its parent");
                zipper.down(unvisited).expect("unvisited index is within bounds");
                outcome = session
                    .play(column)
                    .expect("zipper state is always a legal history")
                    .result;
            }

            while outcome == Outcome::None {
                let choices = session.legal_moves();
                let column = *choices
                    .iter()
                    .choose(&mut self.rng)
                    .expect("a non-terminal position always has a legal move");
                outcome = session
                    .play(column)
                    .expect("column was drawn from legal_moves")
                    .result;
            }
        }

        self.backpropagate(zipper, outcome);
    }

    /// Updates visit counts and rewards from the focus up to the root.
    fn backpropagate(&self, zipper: &mut Zipper, outcome: Outcome) {
        loop {
            let mover = player_to_move(zipper.focus().state.len());
            let reward = reward_for(outcome, mover);
            zipper.update_focus(|node| {
                node.visits += 1;
                node.reward += reward;
                node.expanded = !node.children.is_empty()
                    && node.children.iter().all(|child| child.visits >= 1);
            });
            if zipper.at_root() {
                break;
            }
            zipper.up().expect("not at root");
        }
    }

    /// The child index maximizing the literal UCT score
    /// `win_ratio + exploration_constant + sqrt(ln(parent_visits) / visits)`,
    /// breaking ties toward the lowest index.
    fn select_child_index(&self, parent: &Node) -> usize {
        let parent_visits = parent.visits as f64;
        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;

        for (index, child) in parent.children.iter().enumerate() {
            let score = uct_score(parent_visits, child, self.config.exploration_constant);
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }

        best_index
    }

    /// The root's child with the most visits, as the column that reaches
    /// it. Ties break toward the lowest index.
    fn best_root_child(&self, zipper: &Zipper) -> Result<Column> {
        let root = zipper.focus();
        let mut best_index: Option<usize> = None;
        let mut best_visits = 0u64;

        for (index, child) in root.children.iter().enumerate() {
            if best_index.is_none() || child.visits > best_visits {
                best_index = Some(index);
                best_visits = child.visits;
            }
        }

        let index = best_index.ok_or(ConnectFourError::NoChildren)?;
        root.children[index]
            .state
            .last()
            .copied()
            .ok_or(ConnectFourError::NoChildren)
    }
}

/// The literal UCT value for `child` under `parent_visits`:
/// `win_ratio + exploration_constant + sqrt(ln(parent_visits) / visits)`.
///
/// An unvisited child scores positive infinity so it is always selected
/// before any visited sibling.
fn uct_score(parent_visits: f64, child: &Node, exploration_constant: f64) -> f64 {
    if child.visits == 0 {
        return f64::INFINITY;
    }
    let win_ratio = child.value();
    let visits = child.visits as f64;
    win_ratio + exploration_constant + (parent_visits.ln() / visits).sqrt()
}

/// The color credited with the reward at a node whose history has
/// `history_len` moves played: Red if the history is empty, else Yellow
/// if its length is odd, else Red.
fn player_to_move(history_len: usize) -> Color {
    if history_len == 0 {
        Color::Red
    } else if history_len % 2 == 1 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// The reward credited to `mover` for a finished game that ended in
/// `outcome`: 1.0 for a win, 0.5 for a draw, 0.0 for a loss.
fn reward_for(outcome: Outcome, mover: Color) -> f64 {
    match outcome {
        Outcome::YellowWins => {
            if mover == Color::Yellow {
                1.0
            } else {
                0.0
            }
        }
        Outcome::RedWins => {
            if mover == Color::Red {
                1.0
            } else {
                0.0
            }
        }
        Outcome::Draw => 0.5,
        Outcome::None => unreachable!("backpropagation only runs after a terminal outcome"),
    }
}

fn count_nodes(node: &Node) -> usize {
    1 + node.children.iter().map(count_nodes).sum::<usize>()
}

fn max_depth(node: &Node) -> usize {
    node.children
        .iter()
        .map(|child| 1 + max_depth(child))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget(iterations: u64) -> Budget {
        Budget::Iterations(iterations)
    }

    #[test]
    fn search_returns_a_legal_move() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
        let column = mcts.search(&[], budget(200)).unwrap();
        assert!(column < 7);
    }

    #[test]
    fn search_rejects_nonpositive_budget() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
        assert_eq!(
            mcts.search(&[], Budget::Iterations(0)).unwrap_err(),
            ConnectFourError::BudgetInvalid
        );
        assert_eq!(
            mcts.search(&[], Budget::Time(Duration::ZERO)).unwrap_err(),
            ConnectFourError::BudgetInvalid
        );
    }

    #[test]
    fn search_rejects_terminal_position() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
        let history = [1, 1, 2, 2, 3, 3, 4];
        assert_eq!(
            mcts.search(&history, budget(50)).unwrap_err(),
            ConnectFourError::GameOver
        );
    }

    #[test]
    fn search_rejects_invalid_history() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
        assert_eq!(
            mcts.search(&[0, 0, 0, 0, 0, 0, 0], budget(50)).unwrap_err(),
            ConnectFourError::InvalidGame
        );
    }

    #[test]
    fn search_finds_the_one_move_win() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(7));
        let history = [1, 1, 2, 2, 3, 3];
        let column = mcts.search(&history, budget(400)).unwrap();
        assert_eq!(column, 4);
    }

    #[test]
    fn same_seed_gives_the_same_move() {
        let history = [3];
        let first = Mcts::new(MctsConfig::default().with_seed(99))
            .search(&history, budget(300))
            .unwrap();
        let second = Mcts::new(MctsConfig::default().with_seed(99))
            .search(&history, budget(300))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn statistics_report_the_requested_iteration_count() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(3));
        let column = mcts.search(&[], budget(300)).unwrap();
        assert!(column < 7);
        assert_eq!(mcts.statistics().iterations, 300);
    }

    #[test]
    fn player_to_move_matches_the_literal_rule() {
        assert_eq!(player_to_move(0), Color::Red);
        assert_eq!(player_to_move(1), Color::Yellow);
        assert_eq!(player_to_move(2), Color::Red);
        assert_eq!(player_to_move(3), Color::Yellow);
    }

    #[test]
    fn reward_for_draw_is_one_half_for_either_color() {
        assert_eq!(reward_for(Outcome::Draw, Color::Yellow), 0.5);
        assert_eq!(reward_for(Outcome::Draw, Color::Red), 0.5);
    }

    #[test]
    fn unvisited_child_has_infinite_uct_score() {
        let child = Node::new(vec![0]);
        assert_eq!(uct_score(10.0, &child, std::f64::consts::SQRT_2), f64::INFINITY);
    }

    fn run_iterations(history: &[u8], n: u64) -> Node {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(42));
        let mut zipper = Zipper::new(Node::new(history.to_vec()));
        let mut session = GameSession::new_with_history(history).unwrap();
        for _ in 0..n {
            mcts.run_iteration(&mut zipper, &mut session);
        }
        zipper.focus().clone()
    }

    #[test]
    fn root_visits_equal_iteration_count() {
        let root = run_iterations(&[], 200);
        assert_eq!(root.visits, 200);
    }

    #[test]
    fn children_visits_sum_to_root_visits_minus_one() {
        let root = run_iterations(&[], 200);
        let child_sum: u64 = root.children.iter().map(|c| c.visits).sum();
        assert_eq!(child_sum, root.visits - 1);
    }

    #[test]
    fn rewards_are_bounded_by_visits() {
        let root = run_iterations(&[], 200);
        fn check(node: &Node) {
            assert!(node.reward >= 0.0 && node.reward <= node.visits as f64);
            for child in &node.children {
                check(child);
            }
        }
        check(&root);
    }

    #[test]
    fn expansion_attaches_exactly_once_per_node() {
        let root = run_iterations(&[], 300);
        assert_eq!(root.children.len(), 7);
        for child in &root.children {
            if child.visits > 0 && !child.children.is_empty() {
                // each expanded child gets one node per legal move from its state
                assert!(child.children.len() <= 7);
            }
        }
    }

    #[test]
    fn search_sanity_scenario_from_a_midgame_position() {
        let mut mcts = Mcts::new(MctsConfig::default().with_seed(1));
        let column = mcts.search(&[3, 3, 4, 2, 2, 4, 5], budget(5)).unwrap();
        assert!(column < 7);
    }
}
