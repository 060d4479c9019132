//! Round result types.

/// Who won the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Winner {
    /// The human player.
    Player,
    /// The dealer.
    Dealer,
    /// Neither; the stake is returned.
    Tie,
}

/// How a winning (or tied) stake is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayoutType {
    /// Even money.
    Standard,
    /// 3:2, truncated toward zero.
    Blackjack,
    /// No profit.
    Tie,
}

impl PayoutType {
    /// Returns the profit paid on `bet`, excluding the returned stake.
    ///
    /// ```
    /// use blackjack::PayoutType;
    ///
    /// assert_eq!(PayoutType::Standard.payout(10), 10);
    /// assert_eq!(PayoutType::Blackjack.payout(11), 16);
    /// assert_eq!(PayoutType::Tie.payout(10), 0);
    /// ```
    #[must_use]
    pub const fn payout(self, bet: usize) -> usize {
        match self {
            Self::Standard => bet,
            Self::Blackjack => bet.saturating_mul(3) / 2,
            Self::Tie => 0,
        }
    }
}

/// Outcome of a single round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    /// Who won.
    pub winner: Winner,
    /// How the stake is paid.
    pub payout_type: PayoutType,
}

impl GameResult {
    /// Creates a new result.
    #[must_use]
    pub const fn new(winner: Winner, payout_type: PayoutType) -> Self {
        Self {
            winner,
            payout_type,
        }
    }

    /// Returns the chips handed back to the player for a round staked at
    /// `bet`: the stake plus profit on a win or tie, nothing on a loss.
    ///
    /// ```
    /// use blackjack::{GameResult, PayoutType, Winner};
    ///
    /// let win = GameResult::new(Winner::Player, PayoutType::Blackjack);
    /// assert_eq!(win.chips_returned(11), 27);
    ///
    /// let loss = GameResult::new(Winner::Dealer, PayoutType::Standard);
    /// assert_eq!(loss.chips_returned(11), 0);
    /// ```
    #[must_use]
    pub const fn chips_returned(&self, bet: usize) -> usize {
        match self.winner {
            Winner::Player | Winner::Tie => bet.saturating_add(self.payout_type.payout(bet)),
            Winner::Dealer => 0,
        }
    }
}
