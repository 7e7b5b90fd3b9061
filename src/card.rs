//! Card types and the fixed face/suit tables.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// Single-letter ASCII code (`C`, `D`, `H`, `S`).
    #[must_use]
    pub const fn ascii(self) -> char {
        match self {
            Self::Clubs => 'C',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Spades => 'S',
        }
    }

    /// Outline suit symbol, for terminals that can render it.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '\u{2667}',
            Self::Diamonds => '\u{2662}',
            Self::Hearts => '\u{2661}',
            Self::Spades => '\u{2664}',
        }
    }

    /// Whether the suit is printed in red.
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Self::Diamonds | Self::Hearts)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ascii())
    }
}

/// Card face, from two through ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace.
    Ace,
}

impl Face {
    /// Hard point value of the face: aces count 1, court cards 10.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            Self::Ace => 1,
        }
    }

    /// Short label as printed on the card.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
            Self::Ace => "A",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All four suits, in deck construction order.
pub const SUITS: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

/// All thirteen faces, in deck construction order.
pub const FACES: [Face; 13] = [
    Face::Two,
    Face::Three,
    Face::Four,
    Face::Five,
    Face::Six,
    Face::Seven,
    Face::Eight,
    Face::Nine,
    Face::Ten,
    Face::Jack,
    Face::Queen,
    Face::King,
    Face::Ace,
];

/// Number of cards per deck.
pub const DECK_SIZE: usize = SUITS.len() * FACES.len();

/// A playing card.
///
/// Identity is the `(face, suit)` pair; `face_up` is only visibility and is
/// ignored by [`Card::same_as`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The face of the card.
    pub face: Face,
    /// The suit of the card.
    pub suit: Suit,
    /// Whether the card is showing.
    pub face_up: bool,
}

impl Card {
    /// Creates a new face-up card.
    #[must_use]
    pub const fn new(face: Face, suit: Suit) -> Self {
        Self {
            face,
            suit,
            face_up: true,
        }
    }

    /// Returns a copy of the card turned face down.
    #[must_use]
    pub const fn face_down(mut self) -> Self {
        self.face_up = false;
        self
    }

    /// Whether the card is an ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        matches!(self.face, Face::Ace)
    }

    /// Whether both cards are the same face and suit, regardless of visibility.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        self.face == other.face && self.suit == other.suit
    }
}

impl From<(Face, Suit)> for Card {
    fn from((face, suit): (Face, Suit)) -> Self {
        Self::new(face, suit)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_up {
            write!(f, "{}{}", self.face, self.suit)
        } else {
            f.write_str("##")
        }
    }
}
