//! Notifications sent to whatever displays the game.

use crate::card::Card;
use crate::hand::Hand;
use crate::result::GameResult;

/// Receiver of game events.
///
/// All methods are notifications; nothing is returned to the session. Each
/// has an empty default so implementors only handle what they display.
pub trait Presenter {
    /// The session has started.
    fn welcome(&mut self, _player_name: &str) {}

    /// The player's balance before a bet is requested.
    fn player_status(&mut self, _player_name: &str, _chips: usize) {}

    /// The initial two cards each are out. Only the dealer's first card is
    /// visible; `dealer_visible_value` is its point value.
    fn initial_deal(
        &mut self,
        _player_hand: &Hand,
        _dealer_visible: &[Card],
        _dealer_visible_value: u8,
    ) {
    }

    /// A participant drew `card` during their turn. `hand` already holds it.
    fn card_dealt(&mut self, _participant: &str, _card: Card, _hand: &Hand) {}

    /// A participant went over 21.
    fn bust(&mut self, _participant: &str) {}

    /// A participant stood.
    fn stand(&mut self, _participant: &str) {}

    /// The dealer reveals their full hand and starts playing.
    fn dealer_turn_started(&mut self, _dealer_hand: &Hand) {}

    /// The round was settled.
    fn round_result(
        &mut self,
        _player_hand: &Hand,
        _dealer_hand: &Hand,
        _result: GameResult,
        _bet: usize,
    ) {
    }

    /// The session has ended.
    fn game_over(&mut self, _final_chips: usize) {}

    /// Free-form information for the player.
    fn message(&mut self, _text: &str) {}
}

/// Discards every event.
impl Presenter for () {}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn welcome(&mut self, player_name: &str) {
        (**self).welcome(player_name);
    }

    fn player_status(&mut self, player_name: &str, chips: usize) {
        (**self).player_status(player_name, chips);
    }

    fn initial_deal(
        &mut self,
        player_hand: &Hand,
        dealer_visible: &[Card],
        dealer_visible_value: u8,
    ) {
        (**self).initial_deal(player_hand, dealer_visible, dealer_visible_value);
    }

    fn card_dealt(&mut self, participant: &str, card: Card, hand: &Hand) {
        (**self).card_dealt(participant, card, hand);
    }

    fn bust(&mut self, participant: &str) {
        (**self).bust(participant);
    }

    fn stand(&mut self, participant: &str) {
        (**self).stand(participant);
    }

    fn dealer_turn_started(&mut self, dealer_hand: &Hand) {
        (**self).dealer_turn_started(dealer_hand);
    }

    fn round_result(
        &mut self,
        player_hand: &Hand,
        dealer_hand: &Hand,
        result: GameResult,
        bet: usize,
    ) {
        (**self).round_result(player_hand, dealer_hand, result, bet);
    }

    fn game_over(&mut self, final_chips: usize) {
        (**self).game_over(final_chips);
    }

    fn message(&mut self, text: &str) {
        (**self).message(text);
    }
}
