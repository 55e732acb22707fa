//! # card-match
//!
//! A deterministic memory/matching card game engine.
//!
//! A round deals a grid of face-down cards hiding pairs of values. The
//! player flips two cards at a time: matches lock face-up, mismatches flip
//! back after a delay and spend one attempt. Matching every pair wins the
//! round; exhausting the attempts loses it.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The controller emits typed render effects;
//!    drawing and timers belong to the host.
//!
//! 2. **Deterministic**: Deals run on a seedable ChaCha8 RNG, so any round
//!    can be reproduced from its seed or scripted from an explicit layout.
//!
//! 3. **No Hidden Timers**: The mismatch delay is an effect asking the host
//!    to call back; a round generation counter discards callbacks that
//!    outlive their round.
//!
//! ## Modules
//!
//! - `core`: cards, configuration, deck dealing, RNG
//! - `round`: per-round state and transitions
//! - `effects`: the render-effect boundary and `Presenter` trait
//! - `controller`: the event-driven game controller
//!
//! ## Example
//!
//! ```
//! use card_match::{CardId, Effect, GameConfig, GameController};
//!
//! let (mut game, effects) = GameController::new(GameConfig::new(), 42);
//! assert!(matches!(effects.last(), Some(Effect::RenderGrid(_))));
//!
//! // Flip the first card.
//! let effects = game.select_card(CardId::new(0));
//! assert!(matches!(effects.first(), Some(Effect::RenderGrid(_))));
//! ```

pub mod controller;
pub mod core;
pub mod effects;
pub mod round;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, CardValue, Deck, GameConfig, GameRng, GameRngState,
    DEFAULT_ATTEMPT_BUDGET, DEFAULT_MISMATCH_DELAY_MS, DEFAULT_PAIR_COUNT,
};

pub use crate::round::{Round, RoundGeneration, RoundPhase, SelectOutcome, SelectionRecord};

pub use crate::effects::{
    dispatch_effects, CardView, Effect, Outcome, Presenter, LOSS_MESSAGE, WIN_MESSAGE,
};

pub use crate::controller::GameController;
