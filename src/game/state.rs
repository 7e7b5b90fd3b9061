//! Round state types.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;
use crate::hand::HandValue;
use crate::message::Messages;
use crate::result::RoundResult;

/// Phase of the current round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundState {
    /// Waiting for the opening cards to be dealt.
    Dealing,
    /// Waiting for the player to hit or stay.
    PlayerTurn,
    /// The player stayed; the dealer's hole card is about to be shown.
    RevealDealer,
    /// Dealer draws to its standing total.
    DealerTurn,
    /// Round is over and the result is available.
    Resolved,
}

/// Everything the presentation layer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Current phase.
    pub state: RoundState,
    /// The player's name.
    pub player_name: String,
    /// The dealer's name.
    pub dealer_name: String,
    /// The player's cards, in the order dealt.
    pub player_cards: Vec<Card>,
    /// The dealer's cards, in the order dealt. Hidden cards keep
    /// `face_up == false`.
    pub dealer_cards: Vec<Card>,
    /// Value of the player's visible cards.
    pub player_value: HandValue,
    /// Value of the dealer's visible cards.
    pub dealer_value: HandValue,
    /// Latest status lines.
    pub messages: Messages,
    /// Result, once the round is resolved.
    pub result: Option<RoundResult>,
}
