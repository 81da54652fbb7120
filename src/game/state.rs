//! Round state types.

/// Where the engine is in the round lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// No round in progress; bets can be placed.
    NotStarted,
    /// Initial cards are being dealt.
    Dealing,
    /// Waiting for player hit/stand decisions.
    PlayerTurn,
    /// House reveals and plays out its hand.
    HouseTurn,
    /// Outcome is computed and the payout applied.
    Settlement,
}
