use tracing::info;

use crate::decision::DecisionProvider;
use crate::error::SessionError;
use crate::presenter::Presenter;

use super::{GameState, Session, TurnFacts};

/// Cards each participant receives before anyone plays.
const INITIAL_CARDS: usize = 2;

/// Sent when the deck is replaced before a deal.
const NEW_DECK_MESSAGE: &str = "New deck in use!";

impl<D: DecisionProvider, P: Presenter> Session<D, P> {
    /// Asks for a bet and takes it out of the player's balance.
    ///
    /// A bet of zero ends the session.
    pub(super) fn handle_betting(&mut self) -> Result<(), SessionError> {
        self.presenter
            .player_status(self.player.name(), self.player.chips());

        let bet = self.player.bet_amount();
        if bet == 0 {
            info!(chips = self.player.chips(), "player left the table");
            self.state = GameState::GameOver;
            return Ok(());
        }

        self.player.place_bet(bet)?;
        self.current_bet = bet;
        info!(bet, chips = self.player.chips(), "bet placed");

        self.advance(TurnFacts::NONE);
        Ok(())
    }

    /// Deals two cards each, alternating player then dealer.
    ///
    /// A natural blackjack on either side skips both turns.
    pub(super) fn deal_initial_cards(&mut self) {
        if self
            .deck
            .ensure_minimum_cards(self.options.minimum_deck_size)
        {
            self.presenter.message(NEW_DECK_MESSAGE);
        }

        self.player.clear_hand();
        self.dealer.clear_hand();

        for _ in 0..INITIAL_CARDS {
            let card = self.deck.deal_card();
            self.player.add_card(card);
            let card = self.deck.deal_card();
            self.dealer.add_card(card);
        }

        self.presenter.initial_deal(
            self.player.hand(),
            self.dealer.visible_cards(),
            self.dealer.visible_value(),
        );

        let player_natural = self.player.hand().is_natural_blackjack();
        let dealer_natural = self.dealer.hand().is_natural_blackjack();

        if player_natural || dealer_natural {
            info!(player_natural, dealer_natural, "natural blackjack dealt");
            self.state = GameState::RoundOver;
        } else {
            self.advance(TurnFacts::NONE);
        }
    }
}
