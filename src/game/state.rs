//! Game state types.

use crate::nav::Toggle;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GamePhase {
    /// The player is drawing.
    PlayerTurn,
    /// The dealer plays out their hand.
    DealerTurn,
    /// Round has ended; waiting for the replay decision.
    Result,
}

/// Player's choice on their turn, and the dealer's announced move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Move {
    /// Draw another card.
    Hit,
    /// Stop drawing.
    Sit,
}

/// Answer to "play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Replay {
    /// Deal a new round.
    Yes,
    /// Leave the game.
    No,
}

/// What the game is waiting for.
///
/// Each stage belongs to exactly one [`GamePhase`]; the pacing stages only
/// wait for Select so a person can read the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Stage {
    /// Player picks Hit or Sit.
    PlayerChoice(Toggle<Move>),
    /// Player hand is terminal; Select moves on.
    PlayerDone,
    /// Dealer shows their next move; Select carries it out.
    DealerPacing(Move),
    /// Result is shown; player picks Yes or No.
    Replay(Toggle<Replay>),
}

impl Stage {
    /// Phase this stage belongs to.
    #[must_use]
    pub const fn phase(&self) -> GamePhase {
        match self {
            Self::PlayerChoice(_) | Self::PlayerDone => GamePhase::PlayerTurn,
            Self::DealerPacing(_) => GamePhase::DealerTurn,
            Self::Replay(_) => GamePhase::Result,
        }
    }
}
