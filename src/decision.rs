//! Decisions requested from the human player.

/// Source of the human player's decisions.
///
/// Calls block the session until an answer is available. Validating and
/// re-prompting on bad input is the implementor's job: the session trusts
/// every answer, and treats a bet it cannot place as a fatal
/// [`SessionError`](crate::SessionError).
pub trait DecisionProvider {
    /// Returns the stake for the next round.
    ///
    /// Must return 0 without prompting when `max_chips` is 0. Otherwise
    /// returns a value in `1..=max_chips`, or 0 to leave the table.
    fn bet_amount(&mut self, max_chips: usize) -> usize;

    /// Returns whether the player takes another card.
    fn wants_to_hit(&mut self) -> bool;

    /// Returns whether the player starts another round.
    ///
    /// Never called while the player has no chips.
    fn wants_to_play_again(&mut self) -> bool;
}

impl<D: DecisionProvider + ?Sized> DecisionProvider for &mut D {
    fn bet_amount(&mut self, max_chips: usize) -> usize {
        (**self).bet_amount(max_chips)
    }

    fn wants_to_hit(&mut self) -> bool {
        (**self).wants_to_hit()
    }

    fn wants_to_play_again(&mut self) -> bool {
        (**self).wants_to_play_again()
    }
}
