//! The 52-card deck.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, SUITS};

/// An ordered collection of cards. The top of the deck is the end of the
/// sequence; [`Deck::draw`] pops from there.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a fresh deck of all 52 cards in canonical order
    /// (rank-major, suit-minor).
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for rank in 1..=13 {
            for suit in SUITS {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards }
    }

    /// Creates a deck with a known card order. The last card is the top
    /// of the deck and will be drawn first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Rebuilds the full 52-card set, replacing whatever is left.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Shuffles the remaining cards into a random permutation.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Removes and returns the top card with its face-down flag set as
    /// requested. Returns `None` when the deck is exhausted; callers must
    /// check rather than expect a card.
    pub fn draw(&mut self, face_down: bool) -> Option<Card> {
        let mut card = self.cards.pop()?;
        card.face_down = face_down;
        Some(card)
    }

    /// Returns the remaining cards, bottom first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
