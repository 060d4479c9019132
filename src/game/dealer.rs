use tracing::{debug, info};

use crate::decision::DecisionProvider;
use crate::engine;
use crate::presenter::Presenter;

use super::{GameState, Session, TurnFacts};

/// Sent when the round leaves the player with nothing to bet.
const OUT_OF_CHIPS_MESSAGE: &str = "You're out of chips! Game over.";

impl<D: DecisionProvider, P: Presenter> Session<D, P> {
    /// Reveals the dealer's hand and plays it out.
    ///
    /// If the player already busted the dealer draws nothing; the round is
    /// lost regardless of the dealer's cards.
    pub(super) fn handle_dealer_turn(&mut self) {
        self.presenter.dealer_turn_started(self.dealer.hand());

        if !self.player.hand().is_busted() {
            self.play_dealer_hand();
        }

        self.advance(TurnFacts::DEALER_DONE);
    }

    /// Dealer draws while below 17, stopping early on a bust.
    fn play_dealer_hand(&mut self) {
        while self.dealer.wants_to_hit() {
            let card = self.deck.deal_card();
            self.dealer.add_card(card);
            debug!(%card, value = self.dealer.hand().value(), "dealer hit");
            self.presenter
                .card_dealt(self.dealer.name(), card, self.dealer.hand());

            if self.dealer.hand().is_busted() {
                self.presenter.bust(self.dealer.name());
                return;
            }
        }

        self.presenter.stand(self.dealer.name());
    }

    /// Settles the round, then asks whether to play another one.
    ///
    /// The stake was taken when the bet was placed, so a loss changes
    /// nothing here; a win or tie hands back stake plus profit.
    pub(super) fn handle_round_over(&mut self) {
        let result = engine::determine_result(self.player.hand(), self.dealer.hand());
        let bet = self.current_bet;
        self.player.collect(result.chips_returned(bet));

        info!(
            winner = ?result.winner,
            payout = ?result.payout_type,
            bet,
            player_value = self.player.hand().value(),
            dealer_value = self.dealer.hand().value(),
            chips = self.player.chips(),
            "round settled"
        );

        self.presenter
            .round_result(self.player.hand(), self.dealer.hand(), result, bet);

        if self.player.chips() == 0 {
            self.presenter.message(OUT_OF_CHIPS_MESSAGE);
            self.state = GameState::GameOver;
        } else if self.player.wants_to_play_again() {
            self.advance(TurnFacts::NONE);
        } else {
            self.state = GameState::GameOver;
        }
    }
}
