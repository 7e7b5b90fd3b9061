//! Table configuration options.

extern crate alloc;

use alloc::string::String;

/// Which of the dealer's two opening cards is dealt face down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HoleCard {
    /// The first card dealt to the dealer is hidden.
    #[default]
    First,
    /// The second card dealt to the dealer is hidden.
    Second,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use tealeaf::{HoleCard, TableOptions};
///
/// let options = TableOptions::default()
///     .with_player_name("Ada")
///     .with_hole_card(HoleCard::Second);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Name shown for the player.
    pub player_name: String,
    /// Name shown for the dealer.
    pub dealer_name: String,
    /// Which dealer card starts face down.
    pub hole_card: HoleCard,
    /// Total at or above which the dealer stops drawing.
    pub dealer_stands_on: u8,
}

/// Name used when the player does not give one.
pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Name used for the dealer unless configured.
pub const DEFAULT_DEALER_NAME: &str = "Dealer";

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            player_name: String::from(DEFAULT_PLAYER_NAME),
            dealer_name: String::from(DEFAULT_DEALER_NAME),
            hole_card: HoleCard::First,
            dealer_stands_on: 17,
        }
    }
}

impl TableOptions {
    /// Sets the player's name.
    ///
    /// # Example
    ///
    /// ```
    /// use tealeaf::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_name("Grace");
    /// assert_eq!(options.player_name, "Grace");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Sets the dealer's name.
    ///
    /// # Example
    ///
    /// ```
    /// use tealeaf::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_name("House");
    /// assert_eq!(options.dealer_name, "House");
    /// ```
    #[must_use]
    pub fn with_dealer_name(mut self, name: impl Into<String>) -> Self {
        self.dealer_name = name.into();
        self
    }

    /// Sets which dealer card is dealt face down.
    ///
    /// # Example
    ///
    /// ```
    /// use tealeaf::{HoleCard, TableOptions};
    ///
    /// let options = TableOptions::default().with_hole_card(HoleCard::Second);
    /// assert_eq!(options.hole_card, HoleCard::Second);
    /// ```
    #[must_use]
    pub const fn with_hole_card(mut self, hole_card: HoleCard) -> Self {
        self.hole_card = hole_card;
        self
    }

    /// Sets the total the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use tealeaf::TableOptions;
    ///
    /// let options = TableOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, total: u8) -> Self {
        self.dealer_stands_on = total;
        self
    }
}

/// Normalizes a typed name: trims it, capitalizes the first letter and
/// lowercases the rest. Blank input falls back to [`DEFAULT_PLAYER_NAME`].
///
/// ```
/// use tealeaf::options::normalize_name;
///
/// assert_eq!(normalize_name("  aDA \n"), "Ada");
/// assert_eq!(normalize_name("   "), "Player");
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    let Some(first) = chars.next() else {
        return String::from(DEFAULT_PLAYER_NAME);
    };

    let mut name: String = first.to_uppercase().collect();
    name.extend(chars.flat_map(char::to_lowercase));
    name
}
