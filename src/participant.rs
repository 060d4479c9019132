//! Participants: the human player and the dealer.
//!
//! Both are the same [`Participant`] type. They differ only in the
//! [`Strategy`] that decides whether to take another card.

use alloc::string::String;

use crate::card::Card;
use crate::decision::DecisionProvider;
use crate::engine;
use crate::error::BetError;
use crate::hand::{self, Hand};

/// Decides whether a participant draws another card.
pub trait Strategy {
    /// Returns whether to hit on `hand`.
    fn wants_to_hit(&mut self, hand: &Hand) -> bool;
}

/// The dealer's fixed policy: draw below 17, stand otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DealerStrategy;

impl Strategy for DealerStrategy {
    fn wants_to_hit(&mut self, hand: &Hand) -> bool {
        engine::should_dealer_hit(hand)
    }
}

/// Delegates every decision to an external [`DecisionProvider`].
#[derive(Debug, Clone, Default)]
pub struct HumanStrategy<D> {
    provider: D,
}

impl<D> HumanStrategy<D> {
    /// Wraps a decision provider.
    #[must_use]
    pub const fn new(provider: D) -> Self {
        Self { provider }
    }

    /// Returns the wrapped provider.
    #[must_use]
    pub const fn provider(&self) -> &D {
        &self.provider
    }

    /// Returns the wrapped provider mutably.
    pub const fn provider_mut(&mut self) -> &mut D {
        &mut self.provider
    }
}

impl<D: DecisionProvider> Strategy for HumanStrategy<D> {
    fn wants_to_hit(&mut self, _hand: &Hand) -> bool {
        self.provider.wants_to_hit()
    }
}

/// A seat at the table: name, hand, chips and decision strategy.
///
/// The participant is the only mutator of its hand; callers get read-only
/// access through [`Participant::hand`].
#[derive(Debug, Clone)]
pub struct Participant<S> {
    name: String,
    hand: Hand,
    chips: usize,
    strategy: S,
}

/// The human player, driven by a decision provider.
pub type Human<D> = Participant<HumanStrategy<D>>;

/// The automated dealer.
pub type Dealer = Participant<DealerStrategy>;

impl<S> Participant<S> {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, chips: usize, strategy: S) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            chips,
            strategy,
        }
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the chip balance.
    #[must_use]
    pub const fn chips(&self) -> usize {
        self.chips
    }

    /// Returns the strategy.
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Empties the hand for a new round.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Takes `amount` out of the balance as a stake.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is zero or larger than the balance.
    pub const fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }
        if amount > self.chips {
            return Err(BetError::InsufficientFunds {
                bet: amount,
                chips: self.chips,
            });
        }

        self.chips -= amount;
        Ok(())
    }

    /// Adds chips won back to the balance.
    pub const fn collect(&mut self, amount: usize) {
        self.chips = self.chips.saturating_add(amount);
    }
}

impl<S: Strategy> Participant<S> {
    /// Asks the strategy whether to draw another card.
    pub fn wants_to_hit(&mut self) -> bool {
        self.strategy.wants_to_hit(&self.hand)
    }
}

impl Participant<DealerStrategy> {
    /// Creates a dealer. The dealer holds no chips.
    #[must_use]
    pub fn dealer(name: impl Into<String>) -> Self {
        Self::new(name, 0, DealerStrategy)
    }

    /// Returns the cards visible before the dealer's turn: the first card
    /// only.
    #[must_use]
    pub fn visible_cards(&self) -> &[Card] {
        match self.hand.first_card() {
            Some(card) => core::slice::from_ref(card),
            None => &[],
        }
    }

    /// Returns the value of the visible cards. An Ace counts 11.
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        hand::value(self.visible_cards())
    }
}

impl<D: DecisionProvider> Participant<HumanStrategy<D>> {
    /// Creates a human player driven by `provider`.
    #[must_use]
    pub fn human(name: impl Into<String>, chips: usize, provider: D) -> Self {
        Self::new(name, chips, HumanStrategy::new(provider))
    }

    /// Asks the provider for a bet against the current balance.
    pub fn bet_amount(&mut self) -> usize {
        let max_chips = self.chips;
        self.strategy.provider_mut().bet_amount(max_chips)
    }

    /// Asks the provider whether to play another round. Always `false` with
    /// no chips left, without asking.
    pub fn wants_to_play_again(&mut self) -> bool {
        self.chips > 0 && self.strategy.provider_mut().wants_to_play_again()
    }

    /// Returns the decision provider.
    #[must_use]
    pub const fn provider(&self) -> &D {
        self.strategy.provider()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    struct Scripted {
        hits: bool,
        again: bool,
        asked_again: usize,
    }

    impl DecisionProvider for Scripted {
        fn bet_amount(&mut self, max_chips: usize) -> usize {
            max_chips.min(5)
        }

        fn wants_to_hit(&mut self) -> bool {
            self.hits
        }

        fn wants_to_play_again(&mut self) -> bool {
            self.asked_again += 1;
            self.again
        }
    }

    fn scripted() -> Scripted {
        Scripted {
            hits: true,
            again: true,
            asked_again: 0,
        }
    }

    #[test]
    fn place_bet_rejects_zero_and_overdraw() {
        let mut player = Participant::human("Ann", 10, scripted());
        assert_eq!(player.place_bet(0), Err(BetError::ZeroBet));
        assert_eq!(
            player.place_bet(11),
            Err(BetError::InsufficientFunds { bet: 11, chips: 10 })
        );
        assert_eq!(player.place_bet(10), Ok(()));
        assert_eq!(player.chips(), 0);
    }

    #[test]
    fn play_again_is_not_asked_when_broke() {
        let mut player = Participant::human("Ann", 0, scripted());
        assert!(!player.wants_to_play_again());
        assert_eq!(player.provider().asked_again, 0);

        player.collect(3);
        assert!(player.wants_to_play_again());
        assert_eq!(player.provider().asked_again, 1);
    }

    #[test]
    fn bet_amount_is_bounded_by_balance() {
        let mut player = Participant::human("Ann", 3, scripted());
        assert_eq!(player.bet_amount(), 3);
    }

    #[test]
    fn human_strategy_delegates_to_provider() {
        let mut player = Participant::human("Ann", 10, scripted());
        player.add_card(Card::new(Rank::King, Suit::Clubs));
        player.add_card(Card::new(Rank::Queen, Suit::Clubs));
        assert!(player.wants_to_hit());
    }

    #[test]
    fn dealer_shows_only_first_card() {
        let mut dealer = Participant::dealer("Dealer");
        assert!(dealer.visible_cards().is_empty());
        assert_eq!(dealer.visible_value(), 0);

        dealer.add_card(Card::new(Rank::Ace, Suit::Hearts));
        dealer.add_card(Card::new(Rank::Six, Suit::Clubs));
        assert_eq!(
            dealer.visible_cards(),
            &[Card::new(Rank::Ace, Suit::Hearts)]
        );
        assert_eq!(dealer.visible_value(), 11);
        assert!(!dealer.wants_to_hit());
    }

    #[test]
    fn clear_hand_empties_cards_but_keeps_chips() {
        let mut player = Participant::human("Ann", 10, scripted());
        player.add_card(Card::new(Rank::Two, Suit::Spades));
        player.clear_hand();
        assert!(player.hand().is_empty());
        assert_eq!(player.chips(), 10);
    }
}
