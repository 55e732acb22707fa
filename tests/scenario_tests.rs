//! End-to-end round scenarios driven through the controller and a test
//! presentation surface.
//!
//! The harness plays host: it applies effect batches to a recording
//! presenter and fires scheduled flip-back timers on demand, the way a real
//! host would after the configured delay.

use card_match::{
    dispatch_effects, CardId, CardValue, CardView, Deck, GameConfig, GameController, Outcome,
    Presenter, RoundGeneration, RoundPhase, LOSS_MESSAGE, WIN_MESSAGE,
};

/// Recording presentation surface.
#[derive(Default)]
struct Screen {
    grid: Vec<CardView>,
    attempts: Option<u32>,
    message: Option<(String, Outcome)>,
    pending_timer: Option<RoundGeneration>,
    renders: usize,
}

impl Presenter for Screen {
    fn render_grid(&mut self, cards: &[CardView]) {
        self.grid = cards.to_vec();
        self.renders += 1;
    }

    fn render_attempts(&mut self, remaining: u32) {
        self.attempts = Some(remaining);
    }

    fn show_end_message(&mut self, text: &str, outcome: Outcome) {
        self.message = Some((text.to_string(), outcome));
    }

    fn clear_end_message(&mut self) {
        self.message = None;
    }

    fn schedule_flip_back(&mut self, generation: RoundGeneration, _delay_ms: u64) {
        assert!(self.pending_timer.is_none(), "Only one timer may be outstanding");
        self.pending_timer = Some(generation);
    }
}

struct Harness {
    game: GameController,
    screen: Screen,
}

impl Harness {
    fn scripted(layout: &[u8]) -> Self {
        let values: Vec<CardValue> = layout.iter().map(|&v| CardValue::new(v)).collect();
        let deck = Deck::from_layout(&values).expect("Valid pair layout");
        let (game, effects) = GameController::with_deck(GameConfig::new(), deck, 42);

        let mut screen = Screen::default();
        dispatch_effects(&mut screen, &effects);
        Self { game, screen }
    }

    fn click(&mut self, index: u32) {
        let effects = self.game.select_card(CardId::new(index));
        dispatch_effects(&mut self.screen, &effects);
    }

    /// Fire the pending flip-back timer, as the host would after the delay.
    fn fire_timer(&mut self) {
        let generation = self.screen.pending_timer.take().expect("A timer should be pending");
        let effects = self.game.flip_back(generation);
        dispatch_effects(&mut self.screen, &effects);
    }

    fn restart(&mut self) {
        let effects = self.game.restart();
        dispatch_effects(&mut self.screen, &effects);
    }
}

#[test]
fn initial_deal_renders_face_down_grid() {
    let harness = Harness::scripted(&[4, 7, 4, 9, 7, 9]);

    assert_eq!(harness.screen.grid.len(), 6);
    assert!(harness.screen.grid.iter().all(|c| !c.is_face_up()));
    assert_eq!(harness.screen.attempts, Some(3));
    assert!(harness.screen.message.is_none());
    assert!(harness.screen.pending_timer.is_none());
}

/// The concrete win scenario: grid [4, 7, 4, 9, 7, 9].
#[test]
fn win_scenario_over_scripted_grid() {
    let mut harness = Harness::scripted(&[4, 7, 4, 9, 7, 9]);

    // Pair of 4s: matched, attempts untouched.
    harness.click(0);
    harness.click(2);
    assert_eq!(harness.game.round().matched_pairs(), 1);
    assert_eq!(harness.game.round().attempts_left(), 3);
    assert!(harness.screen.grid[0].matched && harness.screen.grid[2].matched);

    // 7 against 9: mismatch, attempt spent after the timer.
    harness.click(1);
    harness.click(3);
    assert!(harness.screen.grid[1].flipped && harness.screen.grid[3].flipped);
    harness.fire_timer();
    assert_eq!(harness.game.round().attempts_left(), 2);
    assert!(!harness.screen.grid[1].is_face_up());
    assert!(!harness.screen.grid[3].is_face_up());

    // Pair of 7s.
    harness.click(1);
    harness.click(4);
    assert_eq!(harness.game.round().matched_pairs(), 2);
    assert_eq!(harness.game.round().attempts_left(), 2);

    // Pair of 9s: win, attempts untouched at 2.
    harness.click(3);
    harness.click(5);
    assert_eq!(harness.game.round().phase(), RoundPhase::Won);
    assert_eq!(harness.game.round().attempts_left(), 2);
    assert_eq!(
        harness.screen.message,
        Some((WIN_MESSAGE.to_string(), Outcome::Win))
    );

    // Terminal: clicks are no-ops until restart.
    let renders = harness.screen.renders;
    harness.click(0);
    assert_eq!(harness.screen.renders, renders);
}

/// Three consecutive mismatches exhaust the budget 3 → 2 → 1 → 0; the third
/// resolution signals the loss.
#[test]
fn loss_scenario_three_mismatches() {
    let mut harness = Harness::scripted(&[4, 7, 4, 9, 7, 9]);

    for expected_left in [2u32, 1, 0] {
        harness.click(0);
        harness.click(1);
        harness.fire_timer();
        assert_eq!(harness.screen.attempts, Some(expected_left));
    }

    assert_eq!(harness.game.round().phase(), RoundPhase::Lost);
    assert_eq!(harness.game.round().matched_pairs(), 0);
    assert_eq!(
        harness.screen.message,
        Some((LOSS_MESSAGE.to_string(), Outcome::Lose))
    );
}

#[test]
fn clicks_during_mismatch_resolution_are_discarded() {
    let mut harness = Harness::scripted(&[4, 7, 4, 9, 7, 9]);

    harness.click(0);
    harness.click(1);

    // Frantic clicking before the timer fires changes nothing.
    let renders = harness.screen.renders;
    harness.click(2);
    harness.click(3);
    harness.click(0);
    assert_eq!(harness.screen.renders, renders);

    harness.fire_timer();
    assert_eq!(harness.game.round().attempts_left(), 2);
    assert_eq!(harness.game.round().phase(), RoundPhase::Idle);
}

#[test]
fn restart_clears_message_and_resets_round() {
    let mut harness = Harness::scripted(&[2, 3, 2, 4, 3, 4]);

    // Lose the round.
    for _ in 0..3 {
        harness.click(0);
        harness.click(1);
        harness.fire_timer();
    }
    assert!(harness.screen.message.is_some());

    harness.restart();

    assert!(harness.screen.message.is_none());
    assert_eq!(harness.screen.attempts, Some(3));
    assert_eq!(harness.game.round().attempts_left(), 3);
    assert_eq!(harness.game.round().matched_pairs(), 0);
    assert!(harness.screen.grid.iter().all(|c| !c.is_face_up()));
}

/// A flip-back timer from a round discarded by restart must not fire into
/// the new deck.
#[test]
fn stale_timer_from_previous_round_is_ignored() {
    let mut harness = Harness::scripted(&[4, 7, 4, 9, 7, 9]);

    harness.click(0);
    harness.click(1);
    assert!(harness.screen.pending_timer.is_some());

    // Restart while the mismatch timer is still pending.
    harness.restart();
    assert_eq!(harness.game.round().attempts_left(), 3);

    // The orphaned timer fires: no state change, no render.
    let renders = harness.screen.renders;
    harness.fire_timer();
    assert_eq!(harness.screen.renders, renders);
    assert_eq!(harness.game.round().attempts_left(), 3);
    assert_eq!(harness.game.round().phase(), RoundPhase::Idle);

    // The new round is fully playable afterwards.
    harness.click(0);
    assert_eq!(harness.game.round().phase(), RoundPhase::OneSelected);
}

/// Exhaustively sweep a seeded deal: pair up cards by value and win.
#[test]
fn seeded_round_can_always_be_won_by_value_lookup() {
    for seed in 0..20u64 {
        let (mut game, _) = GameController::new(GameConfig::new(), seed);

        let pairs: Vec<(CardId, CardId)> = {
            let cards = game.round().deck().cards();
            let mut pairs = Vec::new();
            for (i, card) in cards.iter().enumerate() {
                for other in cards.iter().skip(i + 1) {
                    if other.value == card.value {
                        pairs.push((card.id, other.id));
                    }
                }
            }
            pairs
        };
        assert_eq!(pairs.len(), 3);

        for &(first, second) in &pairs {
            game.select_card(first);
            game.select_card(second);
        }

        assert_eq!(game.round().phase(), RoundPhase::Won, "seed {}", seed);
        assert_eq!(game.round().attempts_left(), 3);
    }
}
