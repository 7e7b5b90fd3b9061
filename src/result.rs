//! Round outcomes and their resolution rules.

use crate::hand::{BLACKJACK, Hand};
use crate::participant::Role;

/// Who took the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The player won.
    PlayerWins,
    /// The dealer won.
    DealerWins,
    /// Tie, nobody wins.
    Push,
}

impl Outcome {
    /// Returns the winning role, or `None` on a push.
    #[must_use]
    pub const fn winner(self) -> Option<Role> {
        match self {
            Self::PlayerWins => Some(Role::Player),
            Self::DealerWins => Some(Role::Dealer),
            Self::Push => None,
        }
    }
}

/// Result of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The outcome of the round.
    pub outcome: Outcome,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the player had blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}

impl RoundResult {
    /// Compares two finished hands.
    ///
    /// Rules apply in order: equal totals push unless exactly one side holds a
    /// blackjack, a busted player loses, a busted dealer loses, and otherwise
    /// the higher total wins.
    #[must_use]
    pub fn settle(player: &Hand, dealer: &Hand) -> Self {
        let player_value = player.final_value();
        let dealer_value = dealer.final_value();
        let player_blackjack = player.is_blackjack();
        let dealer_blackjack = dealer.is_blackjack();

        let outcome = if player_value == dealer_value {
            match (player_blackjack, dealer_blackjack) {
                (true, false) => Outcome::PlayerWins,
                (false, true) => Outcome::DealerWins,
                _ => Outcome::Push,
            }
        } else if player_value > BLACKJACK {
            Outcome::DealerWins
        } else if dealer_value > BLACKJACK || player_value > dealer_value {
            Outcome::PlayerWins
        } else {
            Outcome::DealerWins
        };

        Self {
            outcome,
            player_value,
            dealer_value,
            player_blackjack,
            dealer_blackjack,
        }
    }

    /// Whether the player's hand went over 21.
    #[must_use]
    pub const fn player_bust(&self) -> bool {
        self.player_value > BLACKJACK
    }

    /// Whether the dealer's hand went over 21.
    #[must_use]
    pub const fn dealer_bust(&self) -> bool {
        self.dealer_value > BLACKJACK
    }
}
