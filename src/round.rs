//! Per-round state and transitions.
//!
//! A `Round` owns the dealt deck, the attempt counter, the current
//! selection, and the processing flag that blocks input while a mismatch
//! resolution is pending. Rounds are created by a restart and replaced
//! wholesale by the next one; no state survives across rounds.
//!
//! ## Phase machine
//!
//! `Idle` → `OneSelected` → `Resolving` → back to `Idle` (immediately on a
//! match, after the flip-back on a mismatch) → … → `Won` or `Lost`. The
//! terminal phases only yield to a restart.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::card::CardId;
use crate::core::config::GameConfig;
use crate::core::deck::Deck;
use crate::core::rng::GameRng;

/// Monotonic counter distinguishing rounds within a session.
///
/// Deferred flip-back work carries the generation it was scheduled under;
/// a generation that no longer matches the controller's current one belongs
/// to a discarded round and is ignored. This closes the stale-timer race
/// where a pending mismatch resolution from a previous round could fire
/// into a freshly dealt deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoundGeneration(pub u64);

impl RoundGeneration {
    /// Create a generation from a raw counter value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw counter value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// The generation following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for RoundGeneration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Round({})", self.0)
    }
}

/// Where a round currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No cards selected; awaiting the first flip.
    Idle,
    /// One card face-up; awaiting the second flip.
    OneSelected,
    /// Two mismatched cards face-up; input blocked until the flip-back.
    Resolving,
    /// All pairs matched. Terminal.
    Won,
    /// Attempts exhausted. Terminal.
    Lost,
}

/// Result of offering a card to the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Invalid input: unknown id, card not selectable, input blocked, or
    /// round already over. Silently discarded.
    Ignored,
    /// First card of a selection turned face-up.
    Flipped,
    /// Second card completed a matching pair.
    Matched {
        /// True when this match was the last pair.
        won: bool,
    },
    /// Second card did not match; a deferred flip-back is now pending.
    Mismatched,
}

/// A resolved two-card selection, kept for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRecord {
    /// First card selected.
    pub first: CardId,
    /// Second card selected.
    pub second: CardId,
    /// Did the selection match?
    pub matched: bool,
}

/// One complete play-through from deal to win or loss.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    deck: Deck,
    attempts_left: u32,
    matched_pairs: usize,
    /// Cards face-up awaiting resolution. At most two.
    selection: SmallVec<[CardId; 2]>,
    /// Blocks input while a mismatch flip-back is pending.
    processing: bool,
    /// Resolved selections in order.
    history: Vector<SelectionRecord>,
}

impl Round {
    /// Deal a fresh round from the config.
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        Self::with_deck(Deck::deal(config, rng), config.attempt_budget)
    }

    /// Create a round over a prepared deck (scripted layouts, tests).
    #[must_use]
    pub fn with_deck(deck: Deck, attempt_budget: u32) -> Self {
        Self {
            deck,
            attempts_left: attempt_budget,
            matched_pairs: 0,
            selection: SmallVec::new(),
            processing: false,
            history: Vector::new(),
        }
    }

    /// Offer a card selection to the round.
    ///
    /// Returns `SelectOutcome::Ignored` without touching any state when the
    /// processing flag is set, the round is over, the id is unknown, or the
    /// card is already face-up.
    pub fn select(&mut self, id: CardId) -> SelectOutcome {
        if self.processing || self.is_over() {
            return SelectOutcome::Ignored;
        }

        match self.deck.get_mut(id) {
            Some(card) if card.is_selectable() => card.flip(),
            _ => return SelectOutcome::Ignored,
        }
        self.selection.push(id);

        if self.selection.len() < 2 {
            return SelectOutcome::Flipped;
        }

        self.resolve_selection()
    }

    /// Resolve a completed two-card selection.
    fn resolve_selection(&mut self) -> SelectOutcome {
        let first = self.selection[0];
        let second = self.selection[1];

        let matched = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.value == b.value,
            _ => false,
        };

        if matched {
            if let Some(card) = self.deck.get_mut(first) {
                card.mark_matched();
            }
            if let Some(card) = self.deck.get_mut(second) {
                card.mark_matched();
            }
            self.matched_pairs += 1;
            self.selection.clear();
            self.history.push_back(SelectionRecord {
                first,
                second,
                matched: true,
            });

            SelectOutcome::Matched {
                won: self.matched_pairs == self.deck.pair_count(),
            }
        } else {
            // Cards stay face-up until the deferred flip-back fires.
            self.processing = true;
            SelectOutcome::Mismatched
        }
    }

    /// Apply the deferred mismatch resolution.
    ///
    /// Flips both selected cards back down, clears the selection, spends
    /// one attempt, and unblocks input. Returns `Some(true)` when the spent
    /// attempt was the last one (the round is now lost), `Some(false)`
    /// otherwise, and `None` when no mismatch resolution was pending.
    pub fn resolve_mismatch(&mut self) -> Option<bool> {
        if !self.processing {
            return None;
        }

        let selection = self.selection.clone();
        for &id in &selection {
            if let Some(card) = self.deck.get_mut(id) {
                card.unflip();
            }
        }
        self.history.push_back(SelectionRecord {
            first: selection[0],
            second: selection[1],
            matched: false,
        });

        self.selection.clear();
        self.attempts_left -= 1;
        self.processing = false;

        Some(self.attempts_left == 0)
    }

    /// Current phase.
    ///
    /// Won takes precedence over Lost: a match never spends an attempt, so
    /// the two cannot be signalled by the same resolution.
    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        if self.matched_pairs == self.deck.pair_count() {
            RoundPhase::Won
        } else if self.attempts_left == 0 {
            RoundPhase::Lost
        } else if self.processing {
            RoundPhase::Resolving
        } else if self.selection.is_empty() {
            RoundPhase::Idle
        } else {
            RoundPhase::OneSelected
        }
    }

    /// Is the round terminal?
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.phase(), RoundPhase::Won | RoundPhase::Lost)
    }

    /// Attempts remaining.
    #[must_use]
    pub fn attempts_left(&self) -> u32 {
        self.attempts_left
    }

    /// Pairs matched so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.matched_pairs
    }

    /// Cards currently face-up awaiting resolution.
    #[must_use]
    pub fn selection(&self) -> &[CardId] {
        &self.selection
    }

    /// Is input blocked by a pending mismatch resolution?
    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// The dealt deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Resolved selections in order.
    #[must_use]
    pub fn history(&self) -> &Vector<SelectionRecord> {
        &self.history
    }
}
