//! Error types for deck and round operations.

use thiserror::Error;

/// Errors that can occur when taking cards from the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck holds no cards.
    ///
    /// Drawn cards cycle to the back, so this only happens if the 52-card
    /// invariant has been broken.
    #[error("deck is exhausted")]
    Exhausted,
    /// The requested card is not in the deck.
    #[error("card not found in deck")]
    CardNotFound,
}

/// The player's input was neither a hit nor a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unrecognized decision, expected hit or stay")]
pub struct InvalidDecision;

/// Errors that can occur while dealing the opening cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// The deck failed to produce a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during the player's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// The input did not name a decision.
    #[error(transparent)]
    InvalidDecision(#[from] InvalidDecision),
    /// The deck failed to produce a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur while revealing or playing out the dealer's hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealerError {
    /// Invalid round state for the dealer.
    #[error("invalid round state for the dealer")]
    InvalidState,
    /// The deck failed to produce a card.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can end a session driven by [`crate::session::Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Dealing failed.
    #[error("deal failed: {0}")]
    Deal(#[from] DealError),
    /// A player action failed for a reason other than bad input.
    #[error("player action failed: {0}")]
    Action(#[from] ActionError),
    /// The dealer's turn failed.
    #[error("dealer turn failed: {0}")]
    Dealer(#[from] DealerError),
}
