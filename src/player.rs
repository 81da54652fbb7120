//! The player and the house.

use crate::hand::Hand;

/// Chips a new player sits down with.
pub const STARTING_CHIPS: usize = 100;

/// The human player: a name, a chip balance, and a hand.
///
/// The chip balance changes only through round settlement; the betting
/// guard in the engine keeps it from going negative.
#[derive(Debug, Clone)]
pub struct Player {
    name: String,
    chips: usize,
    /// Cards currently held; empty between rounds.
    pub hand: Hand,
}

impl Player {
    /// Creates a player with the given name and chip balance.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize) -> Self {
        Self {
            name: name.into(),
            chips,
            hand: Hand::new(),
        }
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Credits chips to the balance.
    pub const fn add_chips(&mut self, amount: usize) {
        self.chips += amount;
    }

    /// Debits chips from the balance.
    pub const fn take_chips(&mut self, amount: usize) {
        self.chips = self.chips.saturating_sub(amount);
    }

    /// Returns whether the player still has chips to play with.
    #[must_use]
    pub const fn has_chips(&self) -> bool {
        self.chips > 0
    }

    /// Returns whether the player can cover a bet of the given size.
    #[must_use]
    pub const fn can_bet(&self, amount: usize) -> bool {
        self.chips >= amount
    }
}

/// The house dealer. It is the betting counterparty, not a
/// chip-constrained player, so it holds only a hand.
#[derive(Debug, Clone, Default)]
pub struct House {
    /// Cards currently held; the second dealt card stays face down until
    /// the house turn.
    pub hand: Hand,
}

impl House {
    /// Creates a house with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }
}
