//! Round engine and state management.

use alloc::string::ToString;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::message::Messages;
use crate::options::{TableOptions, normalize_name};
use crate::participant::{Participant, Role};
use crate::result::RoundResult;

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::{RoundState, Snapshot};

/// A blackjack round engine for one player against the dealer.
///
/// The engine owns the deck and both participants and moves through
/// [`RoundState`] one operation at a time. It never blocks and never renders;
/// callers read [`RoundEngine::snapshot`] after each step.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    deck: Deck,
    options: TableOptions,
    player: Participant,
    dealer: Participant,
    state: RoundState,
    messages: Messages,
    result: Option<RoundResult>,
}

impl RoundEngine {
    /// Creates an engine with a freshly shuffled deck from the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use tealeaf::{RoundEngine, RoundState, TableOptions};
    ///
    /// let engine = RoundEngine::new(TableOptions::default(), 42);
    /// assert_eq!(engine.state(), RoundState::Dealing);
    /// ```
    #[must_use]
    pub fn new(options: TableOptions, seed: u64) -> Self {
        Self::with_deck(options, Deck::new(seed))
    }

    /// Creates an engine that deals from `deck` as it stands.
    ///
    /// The deck is not reshuffled until the next [`RoundEngine::reset`], so a
    /// deck stacked with [`Deck::arrange`] deals in the arranged order.
    #[must_use]
    pub fn with_deck(options: TableOptions, deck: Deck) -> Self {
        let player = Participant::new(options.player_name.clone(), Role::Player);
        let dealer = Participant::new(options.dealer_name.clone(), Role::Dealer);

        Self {
            deck,
            options,
            player,
            dealer,
            state: RoundState::Dealing,
            messages: Messages::default(),
            result: None,
        }
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the table options.
    #[must_use]
    pub const fn options(&self) -> &TableOptions {
        &self.options
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Participant {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns the deck.
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Returns the latest status lines.
    #[must_use]
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns the result of the round once it is resolved.
    #[must_use]
    pub const fn result(&self) -> Option<RoundResult> {
        self.result
    }

    /// Sets the player's name from raw input. See [`normalize_name`].
    pub fn set_player_name(&mut self, raw: &str) {
        let name = normalize_name(raw);
        log::debug!("player name set to {name}");
        self.player.set_name(name);
    }

    /// Replaces the game status line.
    pub fn set_game_status(&mut self, status: impl ToString) {
        self.messages.game_status = status.to_string();
    }

    /// Copies out the current table for display.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let value = |participant: &Participant| {
            let value = participant.hand().value();
            if self.state == RoundState::Resolved {
                value.settled()
            } else {
                value
            }
        };

        Snapshot {
            state: self.state,
            player_name: self.player.name().to_string(),
            dealer_name: self.dealer.name().to_string(),
            player_cards: self.player.hand().cards().to_vec(),
            dealer_cards: self.dealer.hand().cards().to_vec(),
            player_value: value(&self.player),
            dealer_value: value(&self.dealer),
            messages: self.messages.clone(),
            result: self.result,
        }
    }

    /// Starts over: empties both hands, reshuffles the deck and returns to
    /// [`RoundState::Dealing`].
    ///
    /// Called between rounds, and also to abandon a round in progress. Cards
    /// never leave the deck, so nothing can be lost by resetting early.
    pub fn reset(&mut self) {
        if self.state != RoundState::Resolved && self.state != RoundState::Dealing {
            log::debug!("round cancelled in {:?}", self.state);
        }

        self.player.hand_mut().clear();
        self.dealer.hand_mut().clear();
        self.messages.clear();
        self.result = None;
        self.deck.shuffle();
        self.transition(RoundState::Dealing);
    }

    fn transition(&mut self, next: RoundState) {
        log::debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn refresh_tallies(&mut self) {
        let settled = self.state == RoundState::Resolved;
        self.messages
            .update_tallies(self.player.hand(), self.dealer.hand(), settled);
    }

    /// Reveals the dealer, settles the round and enters
    /// [`RoundState::Resolved`].
    fn finish(&mut self) -> RoundResult {
        self.dealer.hand_mut().reveal_all();

        let result = RoundResult::settle(self.player.hand(), self.dealer.hand());
        self.messages
            .announce(&result, self.player.name(), self.dealer.name());
        self.result = Some(result);
        self.transition(RoundState::Resolved);
        self.refresh_tallies();

        log::info!(
            "round resolved: {:?} ({} vs {})",
            result.outcome,
            result.player_value,
            result.dealer_value
        );
        result
    }

    fn deal_to(&mut self, role: Role, face_up: bool) -> Result<Card, DeckError> {
        let mut card = self.deck.draw()?;
        card.face_up = face_up;

        let participant = match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        };
        participant.hand_mut().add_card(card);
        log::trace!("{} receives {card}", participant.name());
        Ok(card)
    }
}
