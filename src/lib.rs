//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Session`] that plays rounds between one human
//! player and a dealer that draws to 17. The session owns the [`Deck`] and
//! both hands; the player's choices come from a [`DecisionProvider`] and
//! every event goes to a [`Presenter`].
//!
//! The rules are also available as pure functions in [`engine`] and
//! [`hand`].
//!
//! # Example
//!
//! ```no_run
//! use blackjack::{DecisionProvider, Session, SessionOptions};
//!
//! struct AlwaysStand;
//!
//! impl DecisionProvider for AlwaysStand {
//!     fn bet_amount(&mut self, max_chips: usize) -> usize {
//!         max_chips.min(5)
//!     }
//!     fn wants_to_hit(&mut self) -> bool {
//!         false
//!     }
//!     fn wants_to_play_again(&mut self) -> bool {
//!         true
//!     }
//! }
//!
//! let mut session = Session::new("Ann", AlwaysStand, (), SessionOptions::default());
//! let _ = session.run();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod decision;
pub mod deck;
pub mod engine;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod presenter;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use decision::DecisionProvider;
pub use deck::Deck;
pub use engine::{DEALER_STAND_VALUE, determine_result, next_state, should_dealer_hit};
pub use error::{BetError, SessionError};
pub use game::{GameState, Session, TurnFacts};
pub use hand::{BLACKJACK_VALUE, Hand};
pub use options::SessionOptions;
pub use participant::{Dealer, DealerStrategy, Human, HumanStrategy, Participant, Strategy};
pub use presenter::Presenter;
pub use result::{GameResult, PayoutType, Winner};
