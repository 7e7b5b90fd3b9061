//! Status lines exposed to the presentation layer.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use crate::hand::Hand;
use crate::result::{Outcome, RoundResult};

/// Prompt shown while waiting for the player's decision.
pub const TURN_PROMPT: &str = "Hit or stay? (h/s)";

/// The latest messages for each slot of the table display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    /// Round outcome or the current prompt.
    pub game_status: String,
    /// Short note about the player's hand, such as `Blackjack!` or `Bust!`.
    pub player_status: String,
    /// The player's hand value as displayed.
    pub player_tally: String,
    /// Short note about the dealer's hand.
    pub dealer_status: String,
    /// The dealer's hand value as displayed.
    pub dealer_tally: String,
}

impl Messages {
    /// Empties every slot.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Refreshes both tallies from the hands.
    ///
    /// While `settled` is false a live soft alternative is shown as
    /// `hard/soft`; once the round is over only the final total is shown.
    pub(crate) fn update_tallies(&mut self, player: &Hand, dealer: &Hand, settled: bool) {
        self.player_tally = tally(player, settled);
        self.dealer_tally = tally(dealer, settled);
    }

    /// Fills the status slots from a finished round.
    ///
    /// A hand that is neither blackjack nor bust keeps its earlier status,
    /// such as the player's `Stays on 18`.
    pub(crate) fn announce(&mut self, result: &RoundResult, player_name: &str, dealer_name: &str) {
        if let Some(status) = hand_status(result.player_blackjack, result.player_bust()) {
            self.player_status = status.to_string();
        }
        if let Some(status) = hand_status(result.dealer_blackjack, result.dealer_bust()) {
            self.dealer_status = status.to_string();
        }
        self.game_status = match result.outcome {
            Outcome::PlayerWins => format!("{player_name} wins!"),
            Outcome::DealerWins => format!("{dealer_name} wins!"),
            Outcome::Push => "Push. Nobody wins.".to_string(),
        };
    }
}

fn tally(hand: &Hand, settled: bool) -> String {
    if hand.is_empty() {
        String::new()
    } else if settled {
        hand.value().settled().to_string()
    } else {
        hand.value().to_string()
    }
}

const fn hand_status(blackjack: bool, bust: bool) -> Option<&'static str> {
    if blackjack {
        Some("Blackjack!")
    } else if bust {
        Some("Bust!")
    } else {
        None
    }
}
