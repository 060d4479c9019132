//! Error types for session operations.

use thiserror::Error;

/// Errors that can occur when placing a bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds: bet {bet}, balance {chips}")]
    InsufficientFunds {
        /// The requested stake.
        bet: usize,
        /// The balance at the time of the bet.
        chips: usize,
    },
}

/// Errors that abort a session.
///
/// These only occur when a collaborator breaks its contract; the rules
/// themselves cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The decision provider returned a bet the player cannot place.
    #[error("decision provider returned an invalid bet: {0}")]
    Bet(#[from] BetError),
}
