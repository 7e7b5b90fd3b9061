//! The two seats at the table.

extern crate alloc;

use alloc::string::String;

use crate::hand::Hand;

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Decisions come from the input collaborator.
    Player,
    /// Decisions come from [`dealer_should_hit`].
    Dealer,
}

/// A named participant owning one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    name: String,
    role: Role,
    hand: Hand,
}

impl Participant {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            hand: Hand::new(),
        }
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the display name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the participant's hand for mutation.
    pub const fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }
}

/// Fixed dealer policy: draw while the final value is below `stands_on`.
///
/// Soft totals count like hard ones, so the dealer stands on a soft 17.
#[must_use]
pub fn dealer_should_hit(hand: &Hand, stands_on: u8) -> bool {
    hand.final_value() < stands_on
}
