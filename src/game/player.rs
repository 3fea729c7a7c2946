use crate::hand::ScoreResult;
use crate::input::ButtonId;
use crate::nav::Toggle;
use crate::random::RandomSource;

use super::{Game, Move, Stage};

impl<R: RandomSource> Game<R> {
    /// Stage that follows a player draw.
    pub(super) const fn player_stage(result: ScoreResult) -> Stage {
        if result.state.is_terminal() {
            Stage::PlayerDone
        } else {
            Stage::PlayerChoice(Toggle::new(Move::Hit, Move::Sit))
        }
    }

    pub(super) fn player_event(&mut self, event: ButtonId) {
        match &mut self.stage {
            Stage::PlayerChoice(toggle) => match toggle.handle_event(event) {
                Some(Move::Hit) => self.hit(),
                Some(Move::Sit) => {
                    debug!("player sits on {}", self.player.score().total);
                    self.begin_dealer_turn();
                }
                None => {}
            },
            Stage::PlayerDone if event == ButtonId::Select => {
                if self.player.score().is_bust() {
                    // The dealer does not play against a bust hand.
                    self.settle();
                } else {
                    self.begin_dealer_turn();
                }
            }
            _ => {}
        }
    }

    /// Player action: Hit.
    ///
    /// The mark stays on Hit while the hand is live; a terminal hand moves
    /// on to the banner.
    fn hit(&mut self) {
        let result = self.player.draw_card(&mut self.rng);
        if result.state.is_terminal() {
            debug!("player hand closed at {}", result.total);
            self.stage = Stage::PlayerDone;
        }
    }
}
