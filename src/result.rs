//! Round outcome and the showdown comparison.

use crate::hand::ScoreResult;

/// Comparison value of a dealer who never played because the player busted.
///
/// It sits above a bust (0) and below any real total, so the dealer still
/// wins by default.
const UNPLAYED_DEALER: u8 = 1;

/// Result of a round from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Player total beats the dealer.
    Win,
    /// Dealer total beats the player.
    Lose,
    /// Equal totals, or both hands bust.
    Draw,
}

impl Outcome {
    /// Compares the player's final score against the dealer's.
    ///
    /// `dealer` is `None` when the dealer's turn was skipped.
    #[must_use]
    pub fn compare(player: ScoreResult, dealer: Option<ScoreResult>) -> Self {
        let player = player.rank();
        let dealer = dealer.map_or(UNPLAYED_DEALER, ScoreResult::rank);

        match player.cmp(&dealer) {
            core::cmp::Ordering::Greater => Self::Win,
            core::cmp::Ordering::Less => Self::Lose,
            core::cmp::Ordering::Equal => Self::Draw,
        }
    }

    /// Label shown on the result screen.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Win => "Win",
            Self::Lose => "Lose",
            Self::Draw => "Draw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hand::HandState;

    const fn scored(total: u8, state: HandState) -> ScoreResult {
        ScoreResult { total, state }
    }

    #[test]
    fn player_bust_loses_to_standing_dealer() {
        let player = scored(24, HandState::Bust);
        let dealer = scored(18, HandState::InProgress);
        assert_eq!(Outcome::compare(player, Some(dealer)), Outcome::Lose);
    }

    #[test]
    fn both_bust_is_a_draw() {
        let player = scored(24, HandState::Bust);
        let dealer = scored(26, HandState::Bust);
        assert_eq!(Outcome::compare(player, Some(dealer)), Outcome::Draw);
    }

    #[test]
    fn dealer_bust_loses_to_standing_player() {
        let player = scored(20, HandState::InProgress);
        let dealer = scored(22, HandState::Bust);
        assert_eq!(Outcome::compare(player, Some(dealer)), Outcome::Win);
    }

    #[test]
    fn skipped_dealer_beats_a_bust() {
        let player = scored(23, HandState::Bust);
        assert_eq!(Outcome::compare(player, None), Outcome::Lose);
    }

    #[test]
    fn equal_totals_draw() {
        let player = scored(21, HandState::Blackjack);
        let dealer = scored(21, HandState::InProgress);
        assert_eq!(Outcome::compare(player, Some(dealer)), Outcome::Draw);
        assert_eq!(Outcome::Draw.label(), "Draw");
    }
}
