//! Deck construction and inspection.
//!
//! A `Deck` is an ordered sequence of cards, two per chosen value. Dealing
//! samples `pair_count` distinct values from the configured pool, duplicates
//! each, and applies a uniform Fisher–Yates permutation. Card ids are
//! assigned by final grid position, so `CardId(n)` is always grid slot `n`.
//!
//! ## Invariant
//!
//! The multiset of values is exactly `pair_count` distinct values, each
//! appearing exactly twice, for every seed. `from_layout` enforces the same
//! invariant on scripted layouts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, CardValue};
use super::config::GameConfig;
use super::rng::GameRng;

/// An ordered deck of cards for one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deal a fresh shuffled deck from the config's value pool.
    ///
    /// ## Panics
    ///
    /// Panics if the pool holds fewer values than `pair_count` (caught by
    /// the sampling step).
    #[must_use]
    pub fn deal(config: &GameConfig, rng: &mut GameRng) -> Self {
        let chosen = rng.sample_distinct(&config.value_pool, config.pair_count);

        let mut layout: Vec<CardValue> = Vec::with_capacity(config.deck_size());
        for value in chosen {
            layout.push(value);
            layout.push(value);
        }
        rng.shuffle(&mut layout);

        Self::from_positions(&layout)
    }

    /// Build a deck from an explicit post-shuffle value layout.
    ///
    /// Returns `None` if the layout is not a valid pair multiset (some
    /// value does not appear exactly twice). Used for scripted rounds and
    /// tests.
    #[must_use]
    pub fn from_layout(layout: &[CardValue]) -> Option<Self> {
        if layout.is_empty() || layout.len() % 2 != 0 {
            return None;
        }

        let mut counts: FxHashMap<CardValue, usize> = FxHashMap::default();
        for &value in layout {
            *counts.entry(value).or_insert(0) += 1;
        }
        if counts.values().any(|&count| count != 2) {
            return None;
        }

        Some(Self::from_positions(layout))
    }

    fn from_positions(layout: &[CardValue]) -> Self {
        let cards = layout
            .iter()
            .enumerate()
            .map(|(i, &value)| Card::new(CardId::new(i as u32), value))
            .collect();
        Self { cards }
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the deck empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get a card by id.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    /// Get a mutable card by id.
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// All cards in grid order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Count of cards per value.
    #[must_use]
    pub fn value_counts(&self) -> FxHashMap<CardValue, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.value).or_insert(0) += 1;
        }
        counts
    }

    /// Are all cards matched?
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(|c| c.matched)
    }
}
