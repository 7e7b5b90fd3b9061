//! Player decisions during their turn.

use core::fmt;
use core::str::FromStr;

use crate::error::InvalidDecision;

/// A decision the player can make while it is their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand and hand over to the dealer.
    Stay,
}

/// Parses `h`, `hit`, `s`, `stay` or `stand`, ignoring case and surrounding
/// whitespace.
///
/// ```
/// use tealeaf::Decision;
///
/// assert_eq!(" H ".parse::<Decision>(), Ok(Decision::Hit));
/// assert_eq!("stay".parse::<Decision>(), Ok(Decision::Stay));
/// assert!("double".parse::<Decision>().is_err());
/// ```
impl FromStr for Decision {
    type Err = InvalidDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("h") || s.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if s.eq_ignore_ascii_case("s")
            || s.eq_ignore_ascii_case("stay")
            || s.eq_ignore_ascii_case("stand")
        {
            Ok(Self::Stay)
        } else {
            Err(InvalidDecision)
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stay => f.write_str("stay"),
        }
    }
}

/// Parses a yes/no answer to "play again?".
///
/// Returns `None` for anything other than `y`, `yes`, `n` or `no`.
#[must_use]
pub fn parse_play_again(input: &str) -> Option<bool> {
    let input = input.trim();
    if input.eq_ignore_ascii_case("y") || input.eq_ignore_ascii_case("yes") {
        Some(true)
    } else if input.eq_ignore_ascii_case("n") || input.eq_ignore_ascii_case("no") {
        Some(false)
    } else {
        None
    }
}
