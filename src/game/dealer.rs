use crate::hand::ScoreResult;
use crate::input::ButtonId;
use crate::nav::Toggle;
use crate::random::RandomSource;
use crate::result::Outcome;

use super::{Game, Move, Replay, Stage};

/// Dealer keeps drawing below this total.
pub const DEALER_STANDS_AT: u8 = 17;

/// Fixed dealer policy: hit below 17 unless the hand is already terminal.
#[must_use]
pub const fn dealer_move(result: ScoreResult) -> Move {
    if !result.state.is_terminal() && result.total < DEALER_STANDS_AT {
        Move::Hit
    } else {
        Move::Sit
    }
}

impl<R: RandomSource> Game<R> {
    /// Deals the dealer two cards and announces their first move.
    pub(super) fn begin_dealer_turn(&mut self) {
        self.dealer.clear();
        self.dealer_played = true;
        self.dealer.draw_card(&mut self.rng);
        let result = self.dealer.draw_card(&mut self.rng);
        debug!("dealer turn, total {}", result.total);

        self.stage = Stage::DealerPacing(dealer_move(result));
    }

    /// Carries out the announced move on Select.
    ///
    /// The pause does not change the decision; it only lets the player read
    /// each card before the next one lands.
    pub(super) fn dealer_event(&mut self, event: ButtonId) {
        let Stage::DealerPacing(announced) = self.stage else {
            return;
        };
        if event != ButtonId::Select {
            return;
        }

        match announced {
            Move::Hit => {
                let result = self.dealer.draw_card(&mut self.rng);
                self.stage = Stage::DealerPacing(dealer_move(result));
            }
            Move::Sit => self.settle(),
        }
    }

    /// Compares both hands and offers a replay.
    pub(super) fn settle(&mut self) {
        let dealer = self.dealer_played.then(|| self.dealer.score());
        let outcome = Outcome::compare(self.player.score(), dealer);
        info!("round over: {}", outcome);

        self.outcome = Some(outcome);
        self.stage = Stage::Replay(Toggle::new(Replay::Yes, Replay::No));
    }
}
