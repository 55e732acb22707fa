//! The game controller: input events in, render effects out.
//!
//! `GameController` owns the configuration, the RNG, the current round, and
//! the round generation counter. It exposes the three external events the
//! system reacts to:
//!
//! - [`GameController::restart`] — restart requested (initial deal included)
//! - [`GameController::select_card`] — card clicked
//! - [`GameController::flip_back`] — the deferred mismatch timer fired
//!
//! Every event returns the batch of effects the presentation layer should
//! apply. Invalid input returns an empty batch; nothing is queued.

use crate::core::card::CardId;
use crate::core::config::GameConfig;
use crate::core::deck::Deck;
use crate::core::rng::GameRng;
use crate::effects::{CardView, Effect, Outcome, LOSS_MESSAGE, WIN_MESSAGE};
use crate::round::{Round, RoundGeneration, SelectOutcome};

/// Single-threaded controller for a session of rounds.
pub struct GameController {
    config: GameConfig,
    rng: GameRng,
    round: Round,
    generation: RoundGeneration,
}

impl GameController {
    /// Start a session: deal the first round and return the effects that
    /// render it.
    #[must_use]
    pub fn new(config: GameConfig, seed: u64) -> (Self, Vec<Effect>) {
        let mut rng = GameRng::new(seed);
        let round = Round::deal(&config, &mut rng);

        let controller = Self {
            config,
            rng,
            round,
            generation: RoundGeneration::default(),
        };
        let effects = controller.fresh_round_effects();
        (controller, effects)
    }

    /// Start a session over a prepared first deck.
    ///
    /// Later restarts deal from the seeded RNG as usual. Used for scripted
    /// rounds and tests.
    #[must_use]
    pub fn with_deck(config: GameConfig, deck: Deck, seed: u64) -> (Self, Vec<Effect>) {
        let round = Round::with_deck(deck, config.attempt_budget);

        let controller = Self {
            config,
            rng: GameRng::new(seed),
            round,
            generation: RoundGeneration::default(),
        };
        let effects = controller.fresh_round_effects();
        (controller, effects)
    }

    /// Restart: discard the current round and deal a new one.
    ///
    /// Bumping the generation invalidates any flip-back timer still pending
    /// from the discarded round.
    pub fn restart(&mut self) -> Vec<Effect> {
        self.generation = self.generation.next();
        self.round = Round::deal(&self.config, &mut self.rng);
        self.fresh_round_effects()
    }

    /// A card was clicked.
    ///
    /// Returns no effects when the click is discarded: processing flag set,
    /// card already face-up or matched, unknown id, or round over.
    pub fn select_card(&mut self, id: CardId) -> Vec<Effect> {
        match self.round.select(id) {
            SelectOutcome::Ignored => vec![],
            SelectOutcome::Flipped => vec![self.render_grid()],
            SelectOutcome::Matched { won } => {
                let mut effects = vec![self.render_grid()];
                if won {
                    effects.push(Effect::ShowEndMessage {
                        text: WIN_MESSAGE.to_string(),
                        outcome: Outcome::Win,
                    });
                }
                effects
            }
            SelectOutcome::Mismatched => vec![
                self.render_grid(),
                Effect::ScheduleFlipBack {
                    generation: self.generation,
                    delay_ms: self.config.mismatch_delay_ms,
                },
            ],
        }
    }

    /// The flip-back timer fired.
    ///
    /// A generation other than the current one belongs to a round discarded
    /// by a restart and is ignored.
    pub fn flip_back(&mut self, generation: RoundGeneration) -> Vec<Effect> {
        if generation != self.generation {
            return vec![];
        }

        match self.round.resolve_mismatch() {
            None => vec![],
            Some(lost) => {
                let mut effects = vec![
                    Effect::RenderAttempts(self.round.attempts_left()),
                    self.render_grid(),
                ];
                if lost {
                    effects.push(Effect::ShowEndMessage {
                        text: LOSS_MESSAGE.to_string(),
                        outcome: Outcome::Lose,
                    });
                }
                effects
            }
        }
    }

    /// The current round.
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// The current round generation.
    #[must_use]
    pub fn generation(&self) -> RoundGeneration {
        self.generation
    }

    /// The session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Effects that present a freshly dealt round.
    fn fresh_round_effects(&self) -> Vec<Effect> {
        vec![
            Effect::ClearEndMessage,
            Effect::RenderAttempts(self.round.attempts_left()),
            self.render_grid(),
        ]
    }

    fn render_grid(&self) -> Effect {
        Effect::RenderGrid(self.round.deck().cards().iter().map(CardView::from).collect())
    }
}
