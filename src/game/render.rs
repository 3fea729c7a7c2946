//! Game screens.
//!
//! ```text
//! row 0: cards (cols 0-13)      total (cols 14-15)
//! row 1: prompt (cols 0-9)      owner (cols 10-15)
//! ```

use core::fmt::Write;

use heapless::String;

use crate::display::{COLS, Frame};
use crate::hand::{Hand, HandState, ScoreResult};
use crate::nav::Toggle;
use crate::result::Outcome;

use super::{Game, Move, Stage};

/// Columns of the Hit/Sit cursor marks.
const MOVE_SLOTS: [usize; 2] = [0, 5];
/// Columns of the Yes/No cursor marks.
const REPLAY_SLOTS: [usize; 2] = [7, 12];
/// First column of the owner tag.
const OWNER_COL: usize = 10;

fn put_hand(frame: &mut Frame, hand: &Hand) {
    let mut col = 0;
    for card in hand.cards() {
        frame.put(col, 0, card.label());
        col += card.label().len() + 1;
    }

    let mut total: String<3> = String::new();
    let _ = write!(total, "{}", hand.score().total);
    frame.put_right(COLS, 0, &total);
}

fn put_marks<T: Copy>(frame: &mut Frame, row: usize, slots: [usize; 2], toggle: &Toggle<T>) {
    for (slot, &col) in slots.iter().enumerate() {
        let mark = if slot == toggle.marked() { ">" } else { " " };
        frame.put(col, row, mark);
    }
}

const fn banner(state: HandState) -> &'static str {
    match state {
        HandState::Blackjack => "Blackjack!",
        HandState::Bust => "Bust!",
        HandState::FiveUnder => "5 Cards!",
        HandState::InProgress => "",
    }
}

fn score_text(result: Option<ScoreResult>) -> String<4> {
    let mut text = String::new();
    let _ = match result {
        None => text.push_str("--"),
        Some(result) if result.is_bust() => text.push_str("Bust"),
        Some(result) => write!(text, "{}", result.total).map_err(|_| ()),
    };
    text
}

impl<R> Game<R> {
    /// Renders the current stage.
    #[must_use]
    pub fn frame(&self) -> Frame {
        let mut frame = Frame::blank();

        match &self.stage {
            Stage::PlayerChoice(toggle) => {
                put_hand(&mut frame, &self.player);
                frame.put(1, 1, "Hit");
                frame.put(6, 1, "Sit");
                put_marks(&mut frame, 1, MOVE_SLOTS, toggle);
                frame.put(OWNER_COL, 1, "Player");
            }
            Stage::PlayerDone => {
                put_hand(&mut frame, &self.player);
                frame.put(0, 1, banner(self.player.score().state));
                frame.put(OWNER_COL, 1, "Player");
            }
            Stage::DealerPacing(announced) => {
                put_hand(&mut frame, &self.dealer);
                let label = match announced {
                    Move::Hit => "Hit",
                    Move::Sit => "Sit",
                };
                frame.put(0, 1, label);
                frame.put(OWNER_COL, 1, "Dealer");
            }
            Stage::Replay(toggle) => {
                let mut line: String<COLS> = String::new();
                let outcome = self.outcome.map_or("", Outcome::label);
                let player = score_text(Some(self.player.score()));
                let dealer = score_text(self.dealer_hand().map(Hand::score));
                let _ = write!(line, "{outcome} {player} vs {dealer}");
                frame.put(0, 0, &line);

                frame.put(0, 1, "Again?");
                frame.put(8, 1, "Yes");
                frame.put(13, 1, "No");
                put_marks(&mut frame, 1, REPLAY_SLOTS, toggle);
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonId;
    use crate::random::tests::Scripted;

    #[test]
    fn player_choice_screen() {
        let mut game = Game::new(Scripted::new(&[10, 6]));
        let frame = game.frame();
        assert_eq!(frame.row(0), "10 6          16");
        assert_eq!(frame.row(1), ">Hit  Sit Player");

        game.handle_event(ButtonId::Right);
        assert_eq!(game.frame().row(1), " Hit >Sit Player");
    }

    #[test]
    fn blackjack_banner() {
        let game = Game::new(Scripted::new(&[1, 13]));
        let frame = game.frame();
        assert_eq!(frame.row(0), "A K           21");
        assert_eq!(frame.row(1), "Blackjack!Player");
    }

    #[test]
    fn dealer_and_result_screens() {
        // Player 10+9 sits; dealer 7+9 hits into a 2.
        let mut game = Game::new(Scripted::new(&[10, 9, 7, 9, 2]));
        game.handle_event(ButtonId::Down);
        game.handle_event(ButtonId::Select);
        assert_eq!(game.frame().row(0), "7 9           16");
        assert_eq!(game.frame().row(1), "Hit       Dealer");

        game.handle_event(ButtonId::Select);
        assert_eq!(game.frame().row(0), "7 9 2         18");
        assert_eq!(game.frame().row(1), "Sit       Dealer");

        game.handle_event(ButtonId::Select);
        assert_eq!(game.frame().row(0), "Win 19 vs 18    ");
        assert_eq!(game.frame().row(1), "Again? >Yes  No ");

        game.handle_event(ButtonId::Up);
        assert_eq!(game.frame().row(1), "Again?  Yes >No ");
    }

    #[test]
    fn bust_result_shows_skipped_dealer() {
        let mut game = Game::new(Scripted::new(&[10, 6, 8]));
        game.handle_event(ButtonId::Select);
        assert_eq!(game.frame().row(1), "Bust!     Player");
        game.handle_event(ButtonId::Select);
        assert_eq!(game.frame().row(0), "Lose Bust vs -- ");
    }
}
