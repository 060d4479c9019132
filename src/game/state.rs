//! Game state types.

/// Game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Waiting for the player's bet. Every round starts here.
    AwaitingBet,
    /// Dealing the initial two cards to each participant.
    DealingCards,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round has ended and results can be settled.
    RoundOver,
    /// The session has ended.
    GameOver,
}

impl GameState {
    /// All states.
    pub const ALL: [Self; 6] = [
        Self::AwaitingBet,
        Self::DealingCards,
        Self::PlayerTurn,
        Self::DealerTurn,
        Self::RoundOver,
        Self::GameOver,
    ];
}

/// Facts observed by the controller that drive a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TurnFacts {
    /// The player chose to stand.
    pub player_stands: bool,
    /// The player's hand is over 21.
    pub player_busts: bool,
    /// The dealer has finished drawing.
    pub dealer_finished: bool,
}

impl TurnFacts {
    /// No facts observed.
    pub const NONE: Self = Self {
        player_stands: false,
        player_busts: false,
        dealer_finished: false,
    };

    /// The player stood.
    pub const STAND: Self = Self {
        player_stands: true,
        ..Self::NONE
    };

    /// The player busted.
    pub const BUST: Self = Self {
        player_busts: true,
        ..Self::NONE
    };

    /// The dealer is done.
    pub const DEALER_DONE: Self = Self {
        dealer_finished: true,
        ..Self::NONE
    };
}
