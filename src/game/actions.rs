use alloc::format;

use crate::card::Card;
use crate::decision::Decision;
use crate::error::ActionError;
use crate::message::TURN_PROMPT;
use crate::participant::Role;

use super::{RoundEngine, RoundState};

impl RoundEngine {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn {
            return Err(ActionError::InvalidState);
        }
        Ok(())
    }

    /// Parses raw player input and applies the decision.
    ///
    /// Unrecognized input leaves the round untouched and puts a re-prompt in
    /// the game status line; the caller simply asks again.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::InvalidDecision`] for unrecognized input, and
    /// otherwise the errors of [`RoundEngine::hit`] and [`RoundEngine::stay`].
    pub fn apply(&mut self, input: &str) -> Result<Decision, ActionError> {
        self.ensure_player_turn()?;

        let decision = match input.parse::<Decision>() {
            Ok(decision) => decision,
            Err(err) => {
                log::warn!("rejected player input {input:?}");
                self.messages.game_status = format!("Sorry, I didn't get that. {TURN_PROMPT}");
                return Err(err.into());
            }
        };

        match decision {
            Decision::Hit => {
                self.hit()?;
            }
            Decision::Stay => self.stay()?,
        }
        Ok(decision)
    }

    /// Player action: Hit (draw a card face up).
    ///
    /// Going over 21 resolves the round immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck cannot
    /// produce a card.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.deal_to(Role::Player, true)?;

        if self.player.hand().is_bust() {
            log::debug!("player busts with {}", self.player.hand().final_value());
            self.finish();
        } else {
            self.messages.game_status = TURN_PROMPT.into();
            self.refresh_tallies();
        }

        Ok(card)
    }

    /// Player action: Stay (keep the hand and let the dealer play).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stay(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        self.messages.player_status = format!("Stays on {}", self.player.hand().final_value());
        self.messages.game_status = format!("{}'s turn.", self.dealer.name());
        self.transition(RoundState::RevealDealer);
        Ok(())
    }
}
