//! Turn orchestration: Player turn, Dealer turn, Result, replay.

use crate::controller::Flow;
use crate::hand::Hand;
use crate::input::ButtonId;
use crate::random::RandomSource;
use crate::result::Outcome;

mod dealer;
mod player;
mod render;
pub mod state;

pub use dealer::{DEALER_STANDS_AT, dealer_move};
pub use state::{GamePhase, Move, Replay, Stage};

/// A single-player blackjack table driven by button events.
///
/// The game owns the random source and both hands. Each call to
/// [`Game::handle_event`] makes at most one transition, so the same game can
/// be driven by a live debouncer or by a scripted list of events.
#[derive(Debug, Clone)]
pub struct Game<R> {
    /// Random number source for draws.
    rng: R,
    /// Player's hand.
    player: Hand,
    /// Dealer's hand; empty until the dealer's turn.
    dealer: Hand,
    /// Whether the dealer's turn happened this round.
    dealer_played: bool,
    /// Current stage.
    stage: Stage,
    /// Outcome of the finished round.
    outcome: Option<Outcome>,
}

impl<R: RandomSource> Game<R> {
    /// Creates a game and deals the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use cardpad::{Game, GamePhase, SeededRandom};
    ///
    /// let game = Game::new(SeededRandom::new(42));
    /// assert_eq!(game.phase(), GamePhase::PlayerTurn);
    /// ```
    #[must_use]
    pub fn new(rng: R) -> Self {
        let mut game = Self {
            rng,
            player: Hand::new(),
            dealer: Hand::new(),
            dealer_played: false,
            stage: Stage::PlayerDone,
            outcome: None,
        };
        game.start();
        game
    }

    /// Clears both hands and deals the player two cards.
    pub fn start(&mut self) {
        self.dealer.clear();
        self.dealer_played = false;
        self.outcome = None;

        self.player.clear();
        self.player.draw_card(&mut self.rng);
        let result = self.player.draw_card(&mut self.rng);
        debug!("round start, player total {}", result.total);

        self.stage = Self::player_stage(result);
    }

    /// Applies one button event.
    ///
    /// Returns [`Flow::Exit`] when the player declines another round.
    pub fn handle_event(&mut self, event: ButtonId) -> Flow {
        if !event.is_pressed() {
            return Flow::Continue;
        }

        match self.stage {
            Stage::PlayerChoice(_) | Stage::PlayerDone => self.player_event(event),
            Stage::DealerPacing(_) => self.dealer_event(event),
            Stage::Replay(_) => return self.replay_event(event),
        }
        Flow::Continue
    }

    fn replay_event(&mut self, event: ButtonId) -> Flow {
        let Stage::Replay(toggle) = &mut self.stage else {
            return Flow::Continue;
        };

        match toggle.handle_event(event) {
            Some(Replay::Yes) => {
                self.start();
                Flow::Continue
            }
            Some(Replay::No) => Flow::Exit,
            None => Flow::Continue,
        }
    }
}

impl<R> Game<R> {
    /// Returns the current phase.
    pub const fn phase(&self) -> GamePhase {
        self.stage.phase()
    }

    /// Returns the current stage.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the player's hand.
    pub const fn player_hand(&self) -> &Hand {
        &self.player
    }

    /// Returns the dealer's hand, or `None` if the dealer has not played.
    pub const fn dealer_hand(&self) -> Option<&Hand> {
        if self.dealer_played {
            Some(&self.dealer)
        } else {
            None
        }
    }

    /// Returns the outcome once the round reached the result phase.
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Consumes the game and returns its random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}
