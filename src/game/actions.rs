use tracing::debug;

use crate::decision::DecisionProvider;
use crate::presenter::Presenter;

use super::{Session, TurnFacts};

impl<D: DecisionProvider, P: Presenter> Session<D, P> {
    /// Runs one decision of the player's turn.
    ///
    /// A busted hand ends the turn before the player is asked anything.
    /// Otherwise the player hits (one card, turn continues) or stands.
    pub(super) fn handle_player_turn(&mut self) {
        if self.player.hand().is_busted() {
            debug!(value = self.player.hand().value(), "player busted");
            self.presenter.bust(self.player.name());
            self.advance(TurnFacts::BUST);
            return;
        }

        if self.player.wants_to_hit() {
            let card = self.deck.deal_card();
            self.player.add_card(card);
            debug!(%card, value = self.player.hand().value(), "player hit");
            self.presenter
                .card_dealt(self.player.name(), card, self.player.hand());
        } else {
            debug!(value = self.player.hand().value(), "player stood");
            self.presenter.stand(self.player.name());
            self.advance(TurnFacts::STAND);
        }
    }
}
