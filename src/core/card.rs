//! Card identity and per-card flags.
//!
//! A `Card` is created once per round and mutated by flip/match/unflip
//! transitions until the round is discarded on restart.
//!
//! ## Flags
//!
//! - `flipped`: currently face-up but not yet confirmed as part of a match
//! - `matched`: permanently face-up and inert to further clicks
//!
//! A matched card is always rendered face-up regardless of its `flipped`
//! flag.

use serde::{Deserialize, Serialize};

/// Stable identifier for a card: its index in the dealt grid.
///
/// Ids are assigned left to right after the shuffle, so id 0 is always the
/// first grid position. Ids are only meaningful within a single round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the grid index this ID refers to.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card's face value.
///
/// Values come from the configured candidate pool (2 through 10 by
/// default). The engine only compares values for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardValue(pub u8);

impl CardValue {
    /// Create a new card value.
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single card in the grid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Stable identity (grid index).
    pub id: CardId,

    /// Face value.
    pub value: CardValue,

    /// Face-up but not yet confirmed matched.
    pub flipped: bool,

    /// Permanently face-up, inert to clicks.
    pub matched: bool,
}

impl Card {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub fn new(id: CardId, value: CardValue) -> Self {
        Self {
            id,
            value,
            flipped: false,
            matched: false,
        }
    }

    /// Is this card shown face-up?
    ///
    /// Matched cards render face-up even after their flipped flag clears.
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }

    /// Can this card still be selected?
    ///
    /// Already-flipped and matched cards ignore clicks.
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !self.flipped && !self.matched
    }

    /// Turn the card face-up.
    pub fn flip(&mut self) {
        self.flipped = true;
    }

    /// Turn the card back face-down after a mismatch.
    pub fn unflip(&mut self) {
        self.flipped = false;
    }

    /// Lock the card face-up as part of a matched pair.
    pub fn mark_matched(&mut self) {
        self.matched = true;
    }
}
