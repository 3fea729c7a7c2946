//! Error types.
//!
//! Broken caller contracts (drawing on a finished hand, a zero-width
//! selector) panic instead; these enums cover input that can legitimately be
//! wrong at runtime.

use thiserror::Error;

/// Errors from validating [`ControllerOptions`](crate::ControllerOptions).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OptionsError {
    /// The debounce threshold is zero, so every sample would fire.
    #[error("debounce threshold must be at least 1")]
    ZeroDebounceThreshold,
    /// The debounce threshold is above the supported maximum.
    #[error("debounce threshold must be at most {max}")]
    DebounceThresholdTooHigh {
        /// Largest accepted threshold.
        max: u8,
    },
}

/// Errors from building cards out of raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CardError {
    /// Rank outside `1..=13`.
    #[error("invalid rank {0}")]
    InvalidRank(u8),
    /// Suit index outside `0..4`.
    #[error("invalid suit index {0}")]
    InvalidSuit(u8),
}

/// Errors from appending a card to a [`Hand`](crate::Hand).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HandError {
    /// The hand already holds five cards.
    #[error("hand is full")]
    Full,
    /// The hand has reached a terminal state.
    #[error("hand is closed")]
    Closed,
}
