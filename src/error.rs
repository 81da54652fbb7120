//! Error types for game operations.

use thiserror::Error;

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// The bet exceeds the player's chip balance.
    #[error("the bet exceeds the player's chips")]
    InsufficientChips,
    /// A round is already in progress.
    #[error("a round is already in progress")]
    RoundInProgress,
}

/// Errors that can occur when playing out a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The round has not been dealt yet.
    #[error("no round has been dealt")]
    InvalidState,
}
