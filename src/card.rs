//! Card types and card sampling.

use crate::error::CardError;
use crate::random::RandomSource;

/// Card suit.
///
/// Only the dice roller's card mode draws a suit; blackjack scoring ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in sampling order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    /// Single-letter label used on the display.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Hearts => 'H',
            Self::Diamonds => 'D',
            Self::Clubs => 'C',
            Self::Spades => 'S',
        }
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(CardError::InvalidSuit(index))
    }
}

/// Lowest valid rank (Ace).
pub const ACE: u8 = 1;
/// Highest valid rank (King).
pub const KING: u8 = 13;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Card {
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// The suit, present only for cards drawn by the dice roller.
    pub suit: Option<Suit>,
}

impl Card {
    /// Creates a suitless card.
    ///
    /// Note: This function does not validate the rank. Use [`Card::try_new`]
    /// for untrusted input.
    #[must_use]
    pub const fn new(rank: u8) -> Self {
        Self { rank, suit: None }
    }

    /// Creates a card with a suit.
    #[must_use]
    pub const fn with_suit(rank: u8, suit: Suit) -> Self {
        Self {
            rank,
            suit: Some(suit),
        }
    }

    /// Creates a suitless card, rejecting ranks outside `1..=13`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the rank is out of range.
    pub const fn try_new(rank: u8) -> Result<Self, CardError> {
        if rank >= ACE && rank <= KING {
            Ok(Self::new(rank))
        } else {
            Err(CardError::InvalidRank(rank))
        }
    }

    /// Draws a uniformly random suitless card.
    pub fn random<R: RandomSource>(rng: &mut R) -> Self {
        Self::new(rng.random_in_range(ACE, KING + 1))
    }

    /// Draws a uniformly random card with a suit.
    pub fn random_with_suit<R: RandomSource>(rng: &mut R) -> Self {
        let rank = rng.random_in_range(ACE, KING + 1);
        let suit = Suit::ALL[rng.random_in_range(0, 4) as usize % Suit::ALL.len()];
        Self::with_suit(rank, suit)
    }

    /// Blackjack value with the Ace counted high.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self.rank {
            ACE => 11,
            2..=10 => self.rank,
            11..=KING => 10,
            _ => 0,
        }
    }

    /// Whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        self.rank == ACE
    }

    /// Rank label as shown on the display (`A`, `2`..`10`, `J`, `Q`, `K`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.rank {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            13 => "K",
            _ => "?",
        }
    }
}
