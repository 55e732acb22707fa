//! Core building blocks: cards, configuration, deck dealing, RNG.
//!
//! These types are independent of the controller; they define what a round
//! is made of, not how it plays out.

pub mod card;
pub mod config;
pub mod deck;
pub mod rng;

pub use card::{Card, CardId, CardValue};
pub use config::{GameConfig, DEFAULT_ATTEMPT_BUDGET, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_PAIR_COUNT};
pub use deck::Deck;
pub use rng::{GameRng, GameRngState};
