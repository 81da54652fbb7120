//! Hand representation and value computation.

use core::fmt;

use crate::card::Card;

fn evaluate_cards(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.rank == 1 {
            aces += 1;
        }
        value = value.saturating_add(card.value(true));
    }

    // Downgrade aces from 11 to 1 until the total fits.
    while value > 21 && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    value
}

/// A hand of cards, ordered by deal/draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the end of the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    ///
    /// Aces are counted as 11 if possible without busting, otherwise as 1.
    /// The value is recomputed from the current cards on every call.
    #[must_use]
    pub fn value(&self) -> u8 {
        evaluate_cards(&self.cards)
    }

    /// Returns whether the hand is a natural blackjack: exactly two cards
    /// totalling 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.value() == 21
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > 21
    }

    /// Turns every card face up.
    pub fn reveal_all(&mut self) {
        for card in &mut self.cards {
            card.face_down = false;
        }
    }

    /// Empties the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
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

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in &self.cards {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{card}")?;
            first = false;
        }
        Ok(())
    }
}
