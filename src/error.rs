//! Error types for round operations.
//!
//! Every rejected action leaves the round state untouched; the caller is told
//! why through these enums. Internal invariant violations are not represented
//! here, they panic.

use thiserror::Error;

/// Errors that can occur when placing a wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets are only accepted during the betting phase.
    #[error("bets are only accepted while betting")]
    WrongPhase,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet exceeds the current balance.
    #[error("insufficient funds")]
    InsufficientFunds,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round can only start from the betting phase.
    #[error("a round can only start while betting")]
    WrongPhase,
    /// No main bet has been placed.
    #[error("no active bet")]
    NoActiveBet,
}

/// Errors that can occur during player actions on a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[error("action is not legal in this phase")]
    WrongPhase,
    /// Doubling down is not available on this hand.
    #[error("cannot double down on this hand")]
    DoubleNotAllowed,
    /// Splitting is not available (already split, or hand already acted on).
    #[error("cannot split this hand")]
    SplitNotAllowed,
    /// The hand is not a pair of equal ranks.
    #[error("hand is not a pair")]
    NotAPair,
    /// The balance does not cover the additional wager.
    #[error("insufficient funds")]
    InsufficientFunds,
}
