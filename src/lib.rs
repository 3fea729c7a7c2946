//! Blackjack and dice controller for a 5-button analog keypad and a 16x2
//! character display, with optional `no_std` support.
//!
//! The keypad is a resistor ladder on a single analog line. [`input`] turns raw
//! samples into edge-triggered [`ButtonId`] events, the [`Game`] and
//! [`DiceRoller`] apps consume those events, and [`display`] turns the app
//! state into the minimal set of writes for the character grid.
//!
//! # Example
//!
//! ```
//! use cardpad::{ButtonId, Game, GamePhase, SeededRandom};
//!
//! let mut game = Game::new(SeededRandom::new(42));
//! assert_eq!(game.phase(), GamePhase::PlayerTurn);
//! assert_eq!(game.player_hand().len(), 2);
//!
//! // Events come from the debouncer on hardware; here they are synthetic.
//! game.handle_event(ButtonId::Right);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
mod fmt;

pub mod card;
pub mod controller;
pub mod dice;
pub mod display;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod nav;
pub mod options;
pub mod random;
pub mod result;

// Re-export main types
pub use card::{Card, Suit};
pub use controller::{App, Controller, Flow};
pub use dice::{DiceField, DiceForm, DiceKind, DiceRequest, DiceRoller, Roll};
pub use display::{CharDisplay, DrawOp, Frame, Screen, TextGrid};
pub use error::{CardError, HandError, OptionsError};
pub use game::{Game, GamePhase, Stage};
pub use hand::{Hand, HandState, ScoreResult};
pub use input::{AnalogInput, ButtonId, Debouncer, decode};
pub use nav::{Cyclic, Toggle};
pub use options::ControllerOptions;
pub use random::{RandomSource, SeededRandom};
pub use result::Outcome;
