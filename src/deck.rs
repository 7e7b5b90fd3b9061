//! The circular 52-card deck.

use alloc::collections::VecDeque;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, FACES, Face, SUITS, Suit};
use crate::error::DeckError;

/// A single deck of 52 unique cards with circular draw semantics.
///
/// Drawing takes the front card and cycles it to the back, so the deck never
/// shrinks; the same set of cards is reshuffled at every round.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: VecDeque<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck and shuffles it with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);
        for suit in SUITS {
            for face in FACES {
                cards.push_back(Card::new(face, suit));
            }
        }

        let mut deck = Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        deck.shuffle();
        deck
    }

    /// Takes the front card, moves it to the back, and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Exhausted`] if the deck is empty, which the
    /// cycle-back design rules out.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        let card = self.cards.pop_front().ok_or(DeckError::Exhausted)?;
        self.cards.push_back(card);
        log::trace!("drew {card}");
        Ok(card)
    }

    /// Returns the first card matching `face` and `suit` without moving it.
    ///
    /// Debug hook; regular play only uses [`Deck::draw`].
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if no card matches.
    pub fn draw_specific(&self, face: Face, suit: Suit) -> Result<Card, DeckError> {
        self.cards
            .iter()
            .find(|card| card.face == face && card.suit == suit)
            .copied()
            .ok_or(DeckError::CardNotFound)
    }

    /// Randomly permutes the deck and turns every card face up.
    pub fn shuffle(&mut self) {
        self.cards.make_contiguous().shuffle(&mut self.rng);
        for card in &mut self.cards {
            card.face_up = true;
        }
        log::debug!("deck shuffled");
    }

    /// Moves the named cards to the front of the deck, in the given order.
    ///
    /// The remaining cards keep their relative order behind them. Used to
    /// stack the deck for tests and replays. A [`Card`] given here replaces
    /// the deck's copy, visibility included, until the next shuffle.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::CardNotFound`] if a named card is missing. The deck
    /// is left untouched in that case.
    pub fn arrange<C: Copy + Into<Card>>(&mut self, front: &[C]) -> Result<(), DeckError> {
        let mut rest = self.cards.clone();
        let mut stacked = VecDeque::with_capacity(DECK_SIZE);

        for &wanted in front {
            let wanted: Card = wanted.into();
            let index = rest
                .iter()
                .position(|card| card.same_as(&wanted))
                .ok_or(DeckError::CardNotFound)?;
            rest.remove(index);
            stacked.push_back(wanted);
        }

        stacked.extend(rest);
        self.cards = stacked;
        Ok(())
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the cards from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
