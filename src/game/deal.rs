use crate::card::Card;
use crate::error::DealError;
use crate::message::TURN_PROMPT;
use crate::options::HoleCard;
use crate::participant::Role;

use super::{RoundEngine, RoundState};

/// Cards each side receives in the opening deal.
const OPENING_CARDS: usize = 2;

impl RoundEngine {
    /// Deals the opening cards: two face up to the player, then two to the
    /// dealer with the hole card face down.
    ///
    /// A player blackjack ends the round at once, with the dealer revealed.
    /// Otherwise the round moves to [`RoundState::PlayerTurn`].
    ///
    /// Returns the state the round is in afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state, or if the deck
    /// cannot produce a card.
    pub fn deal(&mut self) -> Result<RoundState, DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        while self.state == RoundState::Dealing {
            self.deal_next()?;
        }
        Ok(self.state)
    }

    /// Deals one opening card.
    ///
    /// The card that completes the opening deal also leaves
    /// [`RoundState::Dealing`], exactly as [`RoundEngine::deal`] does.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealing state, or if the deck
    /// cannot produce a card.
    pub fn deal_next(&mut self) -> Result<Card, DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        let card = if self.player.hand().len() < OPENING_CARDS {
            self.deal_to(Role::Player, true)?
        } else {
            let hole = match self.options.hole_card {
                HoleCard::First => 0,
                HoleCard::Second => 1,
            };
            let face_up = self.dealer.hand().len() != hole;
            self.deal_to(Role::Dealer, face_up)?
        };

        if self.dealer.hand().len() < OPENING_CARDS {
            self.refresh_tallies();
        } else if self.player.hand().is_blackjack() {
            log::debug!("player dealt blackjack");
            self.finish();
        } else {
            self.messages.game_status = TURN_PROMPT.into();
            self.transition(RoundState::PlayerTurn);
            self.refresh_tallies();
        }

        Ok(card)
    }
}
