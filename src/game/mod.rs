//! Session controller and round flow.

use alloc::string::String;
use tracing::{info, warn};

use crate::card::Card;
use crate::decision::DecisionProvider;
use crate::deck::Deck;
use crate::engine;
use crate::error::SessionError;
use crate::hand::Hand;
use crate::options::SessionOptions;
use crate::participant::{Dealer, Human, Participant};
use crate::presenter::Presenter;

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use state::{GameState, TurnFacts};

/// A blackjack session between one human player and the dealer.
///
/// The session owns the deck, both participants and the current bet. It
/// moves through [`GameState`]s one action at a time, asking the
/// [`DecisionProvider`] for the player's choices and reporting every event
/// to the [`Presenter`].
pub struct Session<D, P> {
    /// Cards left to deal.
    deck: Deck,
    /// Table setup.
    options: SessionOptions,
    /// Current game state.
    state: GameState,
    /// The human player.
    player: Human<D>,
    /// The dealer.
    dealer: Dealer,
    /// Receives game events.
    presenter: P,
    /// Stake of the round in progress.
    current_bet: usize,
    /// Whether the welcome has been sent.
    started: bool,
}

impl<D: DecisionProvider, P: Presenter> Session<D, P> {
    /// Creates a session with a freshly shuffled deck seeded from
    /// `options.seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack::{DecisionProvider, GameState, Session, SessionOptions};
    ///
    /// struct Cautious;
    ///
    /// impl DecisionProvider for Cautious {
    ///     fn bet_amount(&mut self, max_chips: usize) -> usize {
    ///         max_chips.min(10)
    ///     }
    ///
    ///     fn wants_to_hit(&mut self) -> bool {
    ///         false
    ///     }
    ///
    ///     fn wants_to_play_again(&mut self) -> bool {
    ///         false
    ///     }
    /// }
    ///
    /// let options = SessionOptions::default().with_seed(42);
    /// let mut session = Session::new("Ann", Cautious, (), options);
    ///
    /// let chips = session.run()?;
    /// assert!(matches!(chips, 90 | 100 | 110 | 115));
    /// assert_eq!(session.state(), GameState::GameOver);
    /// # Ok::<(), blackjack::SessionError>(())
    /// ```
    #[must_use]
    pub fn new(
        player_name: impl Into<String>,
        provider: D,
        presenter: P,
        options: SessionOptions,
    ) -> Self {
        let deck = Deck::new(options.seed);
        Self::with_deck(player_name, provider, presenter, options, deck)
    }

    /// Creates a session that deals from the given deck.
    #[must_use]
    pub fn with_deck(
        player_name: impl Into<String>,
        provider: D,
        presenter: P,
        options: SessionOptions,
        deck: Deck,
    ) -> Self {
        let player = Participant::human(player_name, options.starting_chips, provider);
        let dealer = Participant::dealer(options.dealer_name.clone());

        Self {
            deck,
            options,
            state: GameState::AwaitingBet,
            player,
            dealer,
            presenter,
            current_bet: 0,
            started: false,
        }
    }

    /// Plays rounds until the session ends and returns the final balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision provider returns a bet the player
    /// cannot place. The session is over either way.
    pub fn run(&mut self) -> Result<usize, SessionError> {
        while self.state != GameState::GameOver {
            self.step()?;
        }
        Ok(self.player.chips())
    }

    /// Performs the action of the current state and returns the new state.
    ///
    /// Calling this in [`GameState::GameOver`] does nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the decision provider returns a bet the player
    /// cannot place. The session moves to [`GameState::GameOver`].
    pub fn step(&mut self) -> Result<GameState, SessionError> {
        if !self.started {
            self.started = true;
            self.presenter.welcome(self.player.name());
        }

        let outcome = match self.state {
            GameState::AwaitingBet => self.handle_betting(),
            GameState::DealingCards => {
                self.deal_initial_cards();
                Ok(())
            }
            GameState::PlayerTurn => {
                self.handle_player_turn();
                Ok(())
            }
            GameState::DealerTurn => {
                self.handle_dealer_turn();
                Ok(())
            }
            GameState::RoundOver => {
                self.handle_round_over();
                Ok(())
            }
            GameState::GameOver => return Ok(GameState::GameOver),
        };

        if let Err(err) = outcome {
            warn!(%err, "session aborted");
            self.finish();
            return Err(err);
        }

        if self.state == GameState::GameOver {
            self.finish();
        }

        Ok(self.state)
    }

    /// Applies the transition table to the current state.
    fn advance(&mut self, facts: TurnFacts) {
        self.state = engine::next_state(self.state, facts);
    }

    fn finish(&mut self) {
        self.state = GameState::GameOver;
        info!(chips = self.player.chips(), "session over");
        self.presenter.game_over(self.player.chips());
    }
}

impl<D, P> Session<D, P> {
    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the player's chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.player.chips()
    }

    /// Returns the stake of the current (or last) round.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn player_hand(&self) -> &Hand {
        self.player.hand()
    }

    /// Returns the dealer's full hand.
    #[must_use]
    pub const fn dealer_hand(&self) -> &Hand {
        self.dealer.hand()
    }

    /// Returns the dealer's cards as the player sees them before the
    /// dealer's turn.
    #[must_use]
    pub fn dealer_visible_cards(&self) -> &[Card] {
        self.dealer.visible_cards()
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Human<D> {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the session options.
    #[must_use]
    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Returns the presenter.
    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Returns the decision provider.
    #[must_use]
    pub const fn provider(&self) -> &D {
        self.player.strategy().provider()
    }
}
