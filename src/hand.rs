//! Hand storage and Ace-flexible scoring.

use heapless::Vec;

use crate::card::Card;
use crate::error::HandError;
use crate::random::RandomSource;

/// Maximum number of cards in one hand.
pub const MAX_CARDS: usize = 5;

/// Best total a hand can have without busting.
pub const TARGET: u8 = 21;

/// Returns the Ace-adjusted total of the cards.
///
/// Aces count 11 until the total goes over 21, then drop to 1 one at a time.
fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value = value.saturating_add(card.value());
    }

    while value > TARGET && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// Classification of a hand after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandState {
    /// The hand may draw again.
    InProgress,
    /// Over 21 even with every Ace low.
    Bust,
    /// 21 on exactly two cards.
    Blackjack,
    /// Five cards without busting; the hand stands automatically.
    FiveUnder,
}

impl HandState {
    /// Whether no further card may be drawn.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Total and classification of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScoreResult {
    /// Best Ace-adjusted total.
    pub total: u8,
    /// Derived classification.
    pub state: HandState,
}

impl ScoreResult {
    /// Comparison value for showdown: a bust ranks below every standing total.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self.state {
            HandState::Bust => 0,
            _ => self.total,
        }
    }

    /// Whether the hand busted.
    #[must_use]
    pub const fn is_bust(self) -> bool {
        matches!(self.state, HandState::Bust)
    }
}

/// Scores a sequence of cards.
///
/// An empty sequence scores 0 and is in progress.
#[must_use]
pub fn score(cards: &[Card]) -> ScoreResult {
    let total = evaluate_cards(cards);

    let state = if cards.len() == 2 && total == TARGET {
        HandState::Blackjack
    } else if total > TARGET {
        HandState::Bust
    } else if cards.len() == MAX_CARDS {
        HandState::FiveUnder
    } else {
        HandState::InProgress
    };

    ScoreResult { total, state }
}

/// One participant's hand.
///
/// # Example
///
/// ```
/// use cardpad::{Card, Hand, HandState};
///
/// let mut hand = Hand::new();
/// hand.push(Card::new(1)).unwrap();
/// let result = hand.push(Card::new(13)).unwrap();
/// assert_eq!(result.total, 21);
/// assert_eq!(result.state, HandState::Blackjack);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card, MAX_CARDS>,
}

impl Hand {
    /// Creates an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Empties the hand for the next turn.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Appends a card and returns the new score.
    ///
    /// # Errors
    ///
    /// Returns [`HandError::Closed`] if the hand is already terminal and
    /// [`HandError::Full`] if it already holds five cards.
    pub fn push(&mut self, card: Card) -> Result<ScoreResult, HandError> {
        if self.score().state.is_terminal() {
            return Err(HandError::Closed);
        }
        self.cards.push(card).map_err(|_| HandError::Full)?;
        Ok(self.score())
    }

    /// Draws a uniformly random card into the hand and returns the new score.
    ///
    /// # Panics
    ///
    /// Panics if the hand is already terminal. The turn logic never draws on
    /// a finished hand, so reaching this is a bug in the caller.
    pub fn draw_card<R: RandomSource>(&mut self, rng: &mut R) -> ScoreResult {
        let card = Card::random(rng);
        match self.push(card) {
            Ok(result) => {
                trace!("drew rank {}, total {}", card.rank, result.total);
                result
            }
            Err(err) => panic!("cannot draw: {err}"),
        }
    }

    /// Returns the current score.
    #[must_use]
    pub fn score(&self) -> ScoreResult {
        score(&self.cards)
    }

    /// Returns the cards in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::tests::Scripted;
    use proptest::prelude::*;

    fn hand_of(ranks: &[u8]) -> Hand {
        let mut hand = Hand::new();
        for &rank in ranks {
            hand.push(Card::new(rank)).expect("hand accepts card");
        }
        hand
    }

    #[test]
    fn ace_and_king_is_blackjack() {
        let result = hand_of(&[1, 13]).score();
        assert_eq!(result.total, 21);
        assert_eq!(result.state, HandState::Blackjack);
    }

    #[test]
    fn three_card_twenty_one_is_not_blackjack() {
        let result = hand_of(&[7, 7, 7]).score();
        assert_eq!(result.total, 21);
        assert_eq!(result.state, HandState::InProgress);
    }

    #[test]
    fn aces_demote_one_at_a_time() {
        assert_eq!(hand_of(&[1, 1]).score().total, 12);
        assert_eq!(hand_of(&[1, 1, 9]).score().total, 21);
        assert_eq!(hand_of(&[1, 6, 10]).score().total, 17);
    }

    #[test]
    fn undemotable_bust_keeps_lowest_total() {
        let mut hand = Hand::new();
        hand.push(Card::new(1)).unwrap();
        hand.push(Card::new(1)).unwrap();
        hand.push(Card::new(12)).unwrap();
        hand.push(Card::new(13)).unwrap();
        let err = hand.push(Card::new(11));
        // 1 + 1 + 10 + 10 = 22 busts on the fourth card already.
        assert_eq!(err, Err(HandError::Closed));
        assert_eq!(hand.score().total, 22);
        assert_eq!(hand.score().state, HandState::Bust);

        assert_eq!(
            score(&[Card::new(1), Card::new(1), Card::new(10), Card::new(11), Card::new(12)]),
            ScoreResult {
                total: 32,
                state: HandState::Bust
            }
        );
    }

    #[test]
    fn five_cards_under_twenty_two_stand() {
        let result = hand_of(&[2, 3, 2, 4, 1]).score();
        assert_eq!(result.total, 12);
        assert_eq!(result.state, HandState::FiveUnder);
        assert_eq!(hand_of(&[2, 3, 2, 4, 1]).push(Card::new(2)), Err(HandError::Closed));
    }

    #[test]
    fn bust_ranks_below_everything() {
        let bust = score(&[Card::new(10), Card::new(10), Card::new(5)]);
        assert_eq!(bust.rank(), 0);
        assert!(bust.is_bust());
        assert_eq!(score(&[Card::new(2), Card::new(2)]).rank(), 4);
    }

    #[test]
    fn draw_card_samples_rank_range() {
        let mut rng = Scripted::new(&[9, 12]);
        let mut hand = Hand::new();
        hand.draw_card(&mut rng);
        let result = hand.draw_card(&mut rng);
        assert_eq!(result.total, 19);
        assert_eq!(rng.calls(), &[(1, 14), (1, 14)]);
    }

    #[test]
    #[should_panic(expected = "cannot draw")]
    fn draw_card_on_terminal_hand_panics() {
        let mut rng = Scripted::new(&[5]);
        let mut hand = hand_of(&[1, 10]);
        hand.draw_card(&mut rng);
    }

    #[test]
    fn clear_resets_the_hand() {
        let mut hand = hand_of(&[10, 10, 10]);
        hand.clear();
        assert!(hand.is_empty());
        assert_eq!(hand.score().state, HandState::InProgress);
    }

    proptest! {
        #[test]
        fn total_is_best_achievable(ranks in proptest::collection::vec(1u8..=13, 1..=5)) {
            let cards: Vec<Card, MAX_CARDS> = ranks.iter().map(|&r| Card::new(r)).collect();
            let result = score(&cards);

            let aces = cards.iter().filter(|c| c.is_ace()).count() as u8;
            let hard: u8 = cards.iter().map(|c| if c.is_ace() { 1 } else { c.value() }).sum();
            let best = (0..=aces)
                .map(|high| hard + 10 * high)
                .filter(|&total| total <= TARGET)
                .max()
                .unwrap_or(hard);

            prop_assert_eq!(result.total, best);
            prop_assert_eq!(result.is_bust(), best > TARGET);
        }

        #[test]
        fn drawing_never_exceeds_five_cards(seed in any::<u64>()) {
            let mut rng = crate::random::SeededRandom::new(seed);
            let mut hand = Hand::new();
            let mut result = hand.draw_card(&mut rng);
            while !result.state.is_terminal() {
                result = hand.draw_card(&mut rng);
            }
            prop_assert!(hand.len() <= MAX_CARDS);
            if hand.len() == MAX_CARDS && result.total <= 21 {
                prop_assert_eq!(result.state, HandState::FiveUnder);
            }
        }
    }
}
