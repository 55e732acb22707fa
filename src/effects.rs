//! The output boundary between controller and presentation layer.
//!
//! The controller never draws anything. Every transition returns a batch of
//! `Effect` values describing what the presentation surface should do:
//! redraw the grid, update the attempt counter, show or clear the
//! end-of-round message, or arm the one-shot flip-back timer.
//!
//! Hosts can either pattern-match the effects directly or implement
//! `Presenter` and feed batches through [`dispatch_effects`].

use serde::{Deserialize, Serialize};

use crate::core::card::{Card, CardId, CardValue};
use crate::round::RoundGeneration;

/// End-of-round message shown on a win.
pub const WIN_MESSAGE: &str = "You Won!";

/// End-of-round message shown on a loss.
pub const LOSS_MESSAGE: &str = "Game Over!";

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// All pairs matched.
    Win,
    /// Attempts exhausted with pairs left unmatched.
    Lose,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win => write!(f, "win"),
            Outcome::Lose => write!(f, "lose"),
        }
    }
}

/// Presentation snapshot of one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    /// Stable identity (grid index).
    pub id: CardId,
    /// Face value.
    pub value: CardValue,
    /// Face-up awaiting resolution.
    pub flipped: bool,
    /// Locked face-up as part of a matched pair.
    pub matched: bool,
}

impl CardView {
    /// Should this card be drawn face-up?
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.flipped || self.matched
    }
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            value: card.value,
            flipped: card.flipped,
            matched: card.matched,
        }
    }
}

/// One instruction to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Effect {
    /// Redraw the whole grid.
    RenderGrid(Vec<CardView>),

    /// Update the attempts-remaining display.
    RenderAttempts(u32),

    /// Show the end-of-round message. The round is terminal.
    ShowEndMessage {
        /// Message text.
        text: String,
        /// Win or loss.
        outcome: Outcome,
    },

    /// Clear any shown end-of-round message.
    ClearEndMessage,

    /// Arm a one-shot timer that calls `flip_back(generation)` after
    /// `delay_ms` milliseconds. At most one is ever outstanding per round.
    ScheduleFlipBack {
        /// Round the timer belongs to; stale generations are ignored.
        generation: RoundGeneration,
        /// Timer delay in milliseconds.
        delay_ms: u64,
    },
}

/// A presentation surface the controller's effects drive.
///
/// Implementations own the actual drawing and timer machinery; the engine
/// stays free of I/O.
pub trait Presenter {
    /// Redraw the grid.
    fn render_grid(&mut self, cards: &[CardView]);

    /// Update the attempts-remaining display.
    fn render_attempts(&mut self, remaining: u32);

    /// Show the end-of-round message.
    fn show_end_message(&mut self, text: &str, outcome: Outcome);

    /// Clear any shown end-of-round message.
    fn clear_end_message(&mut self);

    /// Arm the one-shot flip-back timer.
    fn schedule_flip_back(&mut self, generation: RoundGeneration, delay_ms: u64);
}

/// Feed a batch of effects to a presenter, in order.
pub fn dispatch_effects(presenter: &mut dyn Presenter, effects: &[Effect]) {
    for effect in effects {
        match effect {
            Effect::RenderGrid(cards) => presenter.render_grid(cards),
            Effect::RenderAttempts(remaining) => presenter.render_attempts(*remaining),
            Effect::ShowEndMessage { text, outcome } => presenter.show_end_message(text, *outcome),
            Effect::ClearEndMessage => presenter.clear_end_message(),
            Effect::ScheduleFlipBack { generation, delay_ms } => {
                presenter.schedule_flip_back(*generation, *delay_ms);
            }
        }
    }
}
