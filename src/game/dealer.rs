use alloc::vec::Vec;

use crate::card::Card;
use crate::error::DealerError;
use crate::participant::{Role, dealer_should_hit};
use crate::result::RoundResult;

use super::{RoundEngine, RoundState};

impl RoundEngine {
    /// Turns the dealer's hole card face up.
    ///
    /// A dealer blackjack resolves the round; otherwise the dealer plays out
    /// the hand in [`RoundState::DealerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in reveal state.
    pub fn reveal_dealer(&mut self) -> Result<RoundState, DealerError> {
        if self.state != RoundState::RevealDealer {
            return Err(DealerError::InvalidState);
        }

        self.dealer.hand_mut().reveal_all();

        if self.dealer.hand().is_blackjack() {
            log::debug!("dealer reveals blackjack");
            self.finish();
        } else {
            self.transition(RoundState::DealerTurn);
            self.refresh_tallies();
        }

        Ok(self.state)
    }

    /// Plays one dealer step: draws a card while below the standing total,
    /// otherwise stands and resolves the round.
    ///
    /// Returns the card drawn, or `None` once the dealer has stood.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// cannot produce a card.
    pub fn dealer_hit(&mut self) -> Result<Option<Card>, DealerError> {
        if self.state != RoundState::DealerTurn {
            return Err(DealerError::InvalidState);
        }

        if dealer_should_hit(self.dealer.hand(), self.options.dealer_stands_on) {
            let card = self.deal_to(Role::Dealer, true)?;
            self.refresh_tallies();
            return Ok(Some(card));
        }

        log::debug!("dealer stands on {}", self.dealer.hand().final_value());
        self.finish();
        Ok(None)
    }

    /// Dealer plays their hand to completion.
    ///
    /// The dealer draws while below 17 and stands on any 17, soft or hard.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// cannot produce a card.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, DealerError> {
        let mut drawn_cards = Vec::new();
        while let Some(card) = self.dealer_hit()? {
            drawn_cards.push(card);
        }
        Ok(drawn_cards)
    }

    /// Runs the phases that need no player input until the round waits for
    /// the player or is resolved.
    ///
    /// Returns the result if the round is resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer's turn fails.
    pub fn advance(&mut self) -> Result<Option<RoundResult>, DealerError> {
        loop {
            match self.state {
                RoundState::RevealDealer => {
                    self.reveal_dealer()?;
                }
                RoundState::DealerTurn => {
                    self.dealer_play()?;
                }
                RoundState::Dealing | RoundState::PlayerTurn | RoundState::Resolved => {
                    return Ok(self.result);
                }
            }
        }
    }
}
