//! Card types and deck constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
}

/// All four suits, in canonical deck-building order.
pub const SUITS: [Suit; 4] = [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades];

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Hearts => '♥',
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Spades => '♠',
        };
        write!(f, "{symbol}")
    }
}

/// A playing card.
///
/// Suit and rank never change after construction; only the face-down
/// flag mutates once the card is on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
    /// Whether the card is lying face down on the table.
    pub face_down: bool,
}

impl Card {
    /// Creates a new face-up card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but may yield non-standard results when evaluating a hand.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self {
            suit,
            rank,
            face_down: false,
        }
    }

    /// Returns the blackjack value of the card.
    ///
    /// Aces count as 11 when `ace_as_eleven` is set, 1 otherwise; face
    /// cards count as 10.
    #[must_use]
    pub const fn value(self, ace_as_eleven: bool) -> u8 {
        match self.rank {
            1 => {
                if ace_as_eleven {
                    11
                } else {
                    1
                }
            }
            2..=10 => self.rank,
            11..=13 => 10,
            _ => 0,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.face_down {
            return write!(f, "??");
        }
        match self.rank {
            1 => write!(f, "A{}", self.suit),
            11 => write!(f, "J{}", self.suit),
            12 => write!(f, "Q{}", self.suit),
            13 => write!(f, "K{}", self.suit),
            rank => write!(f, "{rank}{}", self.suit),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
