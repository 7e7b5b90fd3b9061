//! Hands and hand value computation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest total before a hand busts.
pub const BLACKJACK: u8 = 21;

/// Extra points an ace is worth when counted as eleven.
const SOFT_BONUS: u8 = 10;

/// Hard and soft totals of the face-up cards in a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HandValue {
    /// Total with every ace counted as one.
    pub hard: u8,
    /// Best total not above 21 with some aces counted as eleven, or 0 when
    /// the visible cards hold no ace.
    pub soft: u8,
}

impl HandValue {
    /// Computes the value of `cards`, skipping cards that are face down.
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let visible = || cards.iter().filter(|card| card.face_up);

        let hard = visible().fold(0u8, |total, card| {
            total.saturating_add(card.face.points())
        });

        let mut soft = 0;
        if visible().any(Card::is_ace) {
            soft = hard;
            for _ in visible().filter(|card| card.is_ace()) {
                if soft.saturating_add(SOFT_BONUS) <= BLACKJACK {
                    soft += SOFT_BONUS;
                }
            }
        }

        Self { hard, soft }
    }

    /// The usable total: the larger of the hard and soft values.
    #[must_use]
    pub fn total(self) -> u8 {
        self.hard.max(self.soft)
    }

    /// Whether a distinct soft total exists alongside the hard one.
    #[must_use]
    pub const fn has_soft_alternative(self) -> bool {
        self.soft != 0 && self.soft != self.hard
    }

    /// Collapses the value to its usable total, dropping the soft alternative.
    #[must_use]
    pub fn settled(self) -> Self {
        Self {
            hard: self.total(),
            soft: 0,
        }
    }
}

/// Displays `hard/soft` while both totals are live, otherwise the total.
impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_soft_alternative() {
            write!(f, "{}/{}", self.hard, self.soft)
        } else {
            write!(f, "{}", self.total())
        }
    }
}

/// An ordered collection of cards held by one participant.
///
/// The cached [`HandValue`] is recomputed whenever a card is added or card
/// visibility changes, and only ever counts face-up cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    value: HandValue,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            value: HandValue { hard: 0, soft: 0 },
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.recompute();
    }

    /// Turns every card in the hand face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.face_up = true;
        }
        self.recompute();
    }

    /// Removes every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.value = HandValue::of(&self.cards);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the hard and soft value of the visible cards.
    #[must_use]
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Total with aces counted as one.
    #[must_use]
    pub const fn hard_value(&self) -> u8 {
        self.value.hard
    }

    /// Best total with aces promoted, or 0 without a visible ace.
    #[must_use]
    pub const fn soft_value(&self) -> u8 {
        self.value.soft
    }

    /// The larger of the hard and soft values.
    #[must_use]
    pub fn final_value(&self) -> u8 {
        self.value.total()
    }

    /// Returns whether the hand is a two-card 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.final_value() == BLACKJACK
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.final_value() > BLACKJACK
    }

    /// Returns whether any card is face down.
    #[must_use]
    pub fn has_hidden(&self) -> bool {
        self.cards.iter().any(|card| !card.face_up)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
