//! A single-player console blackjack game played against the house.
//!
//! The crate provides a [`Game`] engine that manages the deck, the
//! player's and house's hands, turn order, and chip settlement for one
//! round at a time. The engine itself never touches the console: player
//! decisions come in through a [`DecisionSource`] and table state goes
//! out through an [`EventSink`], so the round protocol can be driven by
//! stdin/stdout or by scripted tests alike.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::Game;
//!
//! let game = Game::new("Ada", 42);
//! let _ = game;
//! ```

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, SUITS, Suit};
pub use deck::Deck;
pub use error::{BetError, RoundError};
pub use game::{Decision, DecisionSource, EventSink, Game, RoundState};
pub use hand::Hand;
pub use player::{House, Player, STARTING_CHIPS};
pub use result::{Outcome, RoundEvent};
