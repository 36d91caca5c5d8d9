//! Configuration for the MCTS search.

/// Configuration for the MCTS algorithm.
///
/// Use the builder methods to customize a configuration; both knobs have
/// sensible defaults, so `MctsConfig::default()` is a reasonable starting
/// point for most searches.
///
/// # Example
///
/// ```
/// use connect_four_mcts::MctsConfig;
///
/// let config = MctsConfig::default()
///     .with_exploration_constant(1.5)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MctsConfig {
    /// The exploration constant added to a child's win ratio during
    /// selection. The standard value is sqrt(2) ≈ 1.414.
    pub exploration_constant: f64,

    /// Seed for the search's random number generator. `None` draws from
    /// entropy, giving a different playout sequence on every call;
    /// `Some(seed)` makes the search reproducible.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            exploration_constant: std::f64::consts::SQRT_2,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Sets the exploration constant.
    pub fn with_exploration_constant(mut self, constant: f64) -> Self {
        self.exploration_constant = constant;
        self
    }

    /// Sets the RNG seed, making the search reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
