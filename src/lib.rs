//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`RoundEngine`] that owns the deck and both hands and
//! steps one round from the deal through the player's turn, the dealer's turn
//! and resolution. Rendering and input are left to the caller, either by
//! driving the engine directly or through a [`Session`].
//!
//! # Example
//!
//! ```
//! use tealeaf::{RoundEngine, RoundState, TableOptions};
//!
//! let mut engine = RoundEngine::new(TableOptions::default(), 42);
//! engine.deal().unwrap();
//!
//! while engine.state() == RoundState::PlayerTurn {
//!     let decision = if engine.player().hand().final_value() < 17 { "h" } else { "s" };
//!     engine.apply(decision).unwrap();
//! }
//!
//! let result = engine.advance().unwrap();
//! assert!(result.is_some());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod decision;
pub mod error;
pub mod game;
pub mod hand;
pub mod message;
pub mod options;
pub mod participant;
pub mod result;
pub mod session;

// Re-export main types
pub use card::{Card, DECK_SIZE, FACES, Face, SUITS, Suit};
pub use deck::Deck;
pub use decision::Decision;
pub use error::{ActionError, DealError, DealerError, DeckError, InvalidDecision, SessionError};
pub use game::{RoundEngine, RoundState, Snapshot};
pub use hand::{BLACKJACK, Hand, HandValue};
pub use message::Messages;
pub use options::{HoleCard, TableOptions};
pub use participant::{Participant, Role};
pub use result::{Outcome, RoundResult};
pub use session::{Input, Output, RoundReport, Session};
