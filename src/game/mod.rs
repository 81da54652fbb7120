//! Game engine and round setup.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::deck::Deck;
use crate::error::BetError;
use crate::player::{House, Player, STARTING_CHIPS};
use crate::result::RoundEvent;

mod round;
pub mod state;

pub use state::RoundState;

/// A player decision during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Draw another card.
    Hit,
    /// End the turn without drawing.
    Stand,
}

/// Source of hit/stand decisions for the player turn.
///
/// The engine blocks on this while a round is played; the console
/// front-end reads stdin, tests feed scripted decisions.
pub trait DecisionSource {
    /// Returns the player's next decision.
    fn hit_or_stand(&mut self) -> Decision;
}

/// Sink for the events the engine emits while playing a round.
pub trait EventSink {
    /// Receives one round event.
    fn on_event(&mut self, event: RoundEvent);
}

/// A blackjack game engine for one player against the house.
///
/// The engine owns the deck, the player, the house, and the current bet,
/// and drives the round protocol: deal, player turn, house turn,
/// settlement. It has no console dependency; decisions come in through
/// [`DecisionSource`] and table state goes out through [`EventSink`].
#[derive(Debug)]
pub struct Game {
    /// The shared deck, rebuilt and reshuffled every round.
    pub deck: Deck,
    /// The human player.
    pub player: Player,
    /// The house dealer.
    pub house: House,
    /// The bet at stake in the current round.
    pub bet: usize,
    /// Current round state.
    pub state: RoundState,
    /// Random number generator for shuffling.
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a new game with the given player name and shuffle seed.
    /// The player starts with [`STARTING_CHIPS`].
    #[must_use]
    pub fn new(name: impl Into<String>, seed: u64) -> Self {
        Self {
            deck: Deck::new(),
            player: Player::new(name, STARTING_CHIPS),
            house: House::new(),
            bet: 0,
            state: RoundState::NotStarted,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Starts a round: stores the bet, rebuilds and shuffles the deck,
    /// clears both hands, and deals the player two face-up cards followed
    /// by one face-up and one face-down card for the house. Leaves the
    /// engine waiting for player decisions.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero, exceeds the player's chips, or
    /// a round is already in progress. On error neither the chip balance
    /// nor the deck is touched.
    pub fn start_round(&mut self, bet: usize) -> Result<(), BetError> {
        if self.state != RoundState::NotStarted {
            return Err(BetError::RoundInProgress);
        }
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if !self.player.can_bet(bet) {
            return Err(BetError::InsufficientChips);
        }

        self.state = RoundState::Dealing;
        self.bet = bet;

        self.deck.reset();
        self.deck.shuffle(&mut self.rng);

        self.player.hand.clear();
        self.house.hand.clear();

        // A fresh 52-card deck cannot run out during the initial deal.
        for _ in 0..2 {
            if let Some(card) = self.deck.draw(false) {
                self.player.hand.add_card(card);
            }
        }
        if let Some(card) = self.deck.draw(false) {
            self.house.hand.add_card(card);
        }
        if let Some(card) = self.deck.draw(true) {
            self.house.hand.add_card(card);
        }

        self.state = RoundState::PlayerTurn;

        Ok(())
    }
}
