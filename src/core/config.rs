//! Game configuration.
//!
//! A `GameConfig` fixes the shape of every round dealt by a controller:
//! how many pairs, how many attempts, which values can appear, and how long
//! a mismatch stays visible before flipping back.
//!
//! Defaults match the classic 3-pair game: values 2 through 10, three
//! attempts, one second of mismatch display.

use serde::{Deserialize, Serialize};

use super::card::CardValue;

/// Default number of pairs per round.
pub const DEFAULT_PAIR_COUNT: usize = 3;

/// Default attempt budget per round.
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 3;

/// Default delay before mismatched cards flip back, in milliseconds.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Configuration for a game session.
///
/// Construct with `GameConfig::new()` and customize via the builder
/// methods:
///
/// ```
/// use card_match::core::GameConfig;
///
/// let config = GameConfig::new()
///     .with_pair_count(4)
///     .with_attempt_budget(5);
///
/// assert_eq!(config.deck_size(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of value pairs per round.
    pub pair_count: usize,

    /// Mismatches allowed before the round is lost.
    pub attempt_budget: u32,

    /// Candidate values the deal samples from, without replacement.
    pub value_pool: Vec<CardValue>,

    /// Delay before mismatched cards flip back, in milliseconds.
    pub mismatch_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: DEFAULT_PAIR_COUNT,
            attempt_budget: DEFAULT_ATTEMPT_BUDGET,
            value_pool: (2..=10).map(CardValue::new).collect(),
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of pairs per round.
    ///
    /// ## Panics
    ///
    /// Panics if `count` is zero.
    #[must_use]
    pub fn with_pair_count(mut self, count: usize) -> Self {
        assert!(count > 0, "Must have at least 1 pair");
        self.pair_count = count;
        self
    }

    /// Set the attempt budget.
    ///
    /// ## Panics
    ///
    /// Panics if `budget` is zero.
    #[must_use]
    pub fn with_attempt_budget(mut self, budget: u32) -> Self {
        assert!(budget > 0, "Must allow at least 1 attempt");
        self.attempt_budget = budget;
        self
    }

    /// Set the candidate value pool.
    ///
    /// ## Panics
    ///
    /// Panics if the pool is empty or contains duplicate values.
    #[must_use]
    pub fn with_value_pool(mut self, pool: Vec<CardValue>) -> Self {
        assert!(!pool.is_empty(), "Value pool must not be empty");

        let mut sorted = pool.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), pool.len(), "Value pool must not contain duplicates");

        self.value_pool = pool;
        self
    }

    /// Set the mismatch flip-back delay in milliseconds.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, delay_ms: u64) -> Self {
        self.mismatch_delay_ms = delay_ms;
        self
    }

    /// Number of cards in a dealt deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.pair_count * 2
    }
}
