//! Round outcome and reporting types.

use crate::card::Card;
use crate::hand::Hand;

/// Settled result of a round, evaluated once per settlement in a fixed
/// priority order so exactly one variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Player wins: natural blackjack, or a higher non-bust value, or the
    /// house busts. The bet is credited to the player.
    PlayerWin,
    /// House wins: house natural blackjack, player bust, or a higher
    /// non-bust house value. The bet is debited from the player.
    HouseWin,
    /// Equal values with neither side taking precedence; the balance is
    /// unchanged.
    Push,
}

/// Events the engine reports to its presentation sink while a round is
/// played out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundEvent {
    /// The player is about to decide; shows the current hand and value.
    PlayerTurn {
        /// The player's hand.
        hand: Hand,
        /// The player's current hand value.
        value: u8,
    },
    /// The player drew a card.
    PlayerDrew {
        /// The drawn card.
        card: Card,
        /// The player's hand after the draw.
        hand: Hand,
        /// The new hand value.
        value: u8,
    },
    /// The deck ran out of cards; no more can be dealt this round.
    DeckExhausted,
    /// The player's hand is a natural 21; the round ends as an automatic
    /// player win.
    NaturalTwentyOne,
    /// The house revealed its hidden card and finished drawing.
    HouseShowdown {
        /// The house's hand, fully face up.
        hand: Hand,
        /// The house's final hand value.
        value: u8,
    },
    /// The round was settled and the payout applied.
    Settled {
        /// Who won the round.
        outcome: Outcome,
        /// The player's final hand value.
        player_value: u8,
        /// The house's final hand value.
        house_value: u8,
    },
}
